use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize config: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;

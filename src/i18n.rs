use std::sync::LazyLock;

use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    unic_langid::LanguageIdentifier,
    DesktopLanguageRequester, LanguageLoader,
};
use rust_embed::RustEmbed;
use tracing::{debug, error};

use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();
    if let Err(e) = loader.load_fallback_language(&Localizations) {
        error!("failed to load fallback language: {}", e);
    }
    loader
});

/// Compile-time checked translation lookup.
#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}

/// Look up a key known only at runtime, such as a configured page title.
/// Missing keys come back verbatim.
pub fn tr(key: &str) -> String {
    if key.is_empty() {
        return String::new();
    }
    if LANGUAGE_LOADER.has(key) {
        LANGUAGE_LOADER.get(key)
    } else {
        key.to_string()
    }
}

/// Switch the active bundle to `code`.
pub fn set_language(code: &str) -> Result<()> {
    let id: LanguageIdentifier = code
        .parse()
        .map_err(|_| Error::UnknownLanguage(code.to_string()))?;

    if !available_languages().iter().any(|l| l == code) {
        return Err(Error::UnknownLanguage(code.to_string()));
    }

    i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &[id])
        .map_err(|_| Error::UnknownLanguage(code.to_string()))?;
    debug!("language set to {}", code);
    Ok(())
}

pub fn current_language() -> String {
    LANGUAGE_LOADER
        .current_languages()
        .first()
        .map(|id| id.language.as_str().to_string())
        .unwrap_or_else(|| LANGUAGE_LOADER.fallback_language().language.as_str().to_string())
}

/// Language codes that have a bundled translation.
pub fn available_languages() -> Vec<String> {
    match LANGUAGE_LOADER.available_languages(&Localizations) {
        Ok(ids) => ids.iter().map(|id| id.language.as_str().to_string()).collect(),
        Err(e) => {
            error!("failed to list bundled languages: {}", e);
            Vec::new()
        }
    }
}

/// First language the desktop asks for that is also in `supported`.
pub fn requested_language(supported: &[String]) -> Option<String> {
    DesktopLanguageRequester::requested_languages()
        .iter()
        .map(|id| id.language.as_str().to_string())
        .find(|code| supported.iter().any(|s| s == code))
}

pub fn native_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "zh" => "中文",
        other => other,
    }
}

pub fn is_rtl(code: &str) -> bool {
    matches!(code, "ar" | "fa" | "he" | "ur")
}

/// Serializes tests that switch the process-wide bundle.
#[cfg(test)]
pub(crate) static TEST_LANGUAGE_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

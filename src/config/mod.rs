use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::nav::{ExternalLink, PageDescriptor, PrefixLocalizer};

const APP_DIR: &str = "cosmic_drawer";
const ENV_PREFIX: &str = "COSMIC_DRAWER";

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub title_key: String,
    pub url: String,
    pub default_language: String,
    pub languages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title_key: "site-title".to_string(),
            url: "https://dodgyshop.g0vhk.io".to_string(),
            default_language: "en".to_string(),
            languages: vec!["en".to_string(), "zh".to_string()],
        }
    }
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq, Eq)]
pub struct SupportLink {
    pub href: String,
    #[serde(default = "default_support_icon")]
    pub icon: String,
    #[serde(default = "default_support_title")]
    pub title: String,
    #[serde(default = "default_language_param")]
    pub language_param: String,
}

fn default_support_icon() -> String {
    "thumb_up".to_string()
}

fn default_support_title() -> String {
    "text-support-us".to_string()
}

fn default_language_param() -> String {
    "lang".to_string()
}

impl Default for SupportLink {
    fn default() -> Self {
        Self {
            href: "https://www.collaction.hk/s/g0vhk/fund".to_string(),
            icon: default_support_icon(),
            title: default_support_title(),
            language_param: default_language_param(),
        }
    }
}

/// External links shown in the drawer. `extra` is keyed by language code;
/// a language without an entry gets no extra links.
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinksConfig {
    pub extra: HashMap<String, Vec<ExternalLink>>,
    pub support: SupportLink,
}

impl Default for LinksConfig {
    fn default() -> Self {
        let mut extra = HashMap::new();
        // The forms only exist in Chinese.
        extra.insert(
            "zh".to_string(),
            vec![
                ExternalLink {
                    href: "https://forms.gle/gK477bmq8cG57ELv8".to_string(),
                    icon: "edit".to_string(),
                    title: "dodgy-shops-report-incident".to_string(),
                },
                ExternalLink {
                    href: "https://forms.gle/1M96G6xHH2tku4mJ8".to_string(),
                    icon: "contact_support".to_string(),
                    title: "text-help-us".to_string(),
                },
            ],
        );
        Self {
            extra,
            support: SupportLink::default(),
        }
    }
}

impl LinksConfig {
    pub fn extra_for(&self, language: &str) -> &[ExternalLink] {
        self.extra
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Container style applied to the drawer panel.
#[derive(Debug, Deserialize, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DrawerClass {
    #[default]
    Primary,
    Secondary,
    Background,
    Card,
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
#[serde(default)]
pub struct DrawerConfig {
    pub width: f32,
    /// Window widths at or above this get the permanent drawer.
    pub breakpoint: f32,
    pub swipe_threshold: f32,
    pub class: DrawerClass,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            width: 240.0,
            breakpoint: 600.0,
            swipe_threshold: 48.0,
            class: DrawerClass::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub pages: Vec<PageDescriptor>,
    pub links: LinksConfig,
    pub drawer: DrawerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            pages: vec![
                PageDescriptor::new("/shops", "store", "dodgy-shops-list"),
                PageDescriptor::new("/map", "map", "dodgy-shops-map"),
                PageDescriptor::new("/about", "info", "dodgy-shops-about"),
            ],
            links: LinksConfig::default(),
            drawer: DrawerConfig::default(),
        }
    }
}

impl AppConfig {
    fn config_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load `path` with `COSMIC_DRAWER__*` overrides; a missing file yields
    /// the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("loading config from {}", path.display());

        let config = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.site.languages.is_empty() {
            return Err(Error::Invalid("no languages configured".to_string()));
        }
        if !self.supports(&self.site.default_language) {
            return Err(Error::UnknownLanguage(self.site.default_language.clone()));
        }
        if self.drawer.width <= 0.0 {
            return Err(Error::Invalid(format!("drawer width {} must be positive", self.drawer.width)));
        }

        url::Url::parse(&self.site.url)?;
        url::Url::parse(&self.links.support.href)?;
        for link in self.links.extra.values().flatten() {
            url::Url::parse(&link.href)?;
        }

        Ok(())
    }

    pub fn supports(&self, language: &str) -> bool {
        self.site.languages.iter().any(|l| l == language)
    }

    pub fn localizer(&self) -> PrefixLocalizer {
        PrefixLocalizer::new(self.site.default_language.clone(), &self.site.languages)
    }

    /// Pick the startup language: an explicit request wins, then the
    /// desktop locale if configured, then the site default.
    pub fn pick_language(&self, requested: Option<&str>, desktop: Option<&str>) -> Result<String> {
        if let Some(code) = requested {
            if !self.supports(code) {
                return Err(Error::UnknownLanguage(code.to_string()));
            }
            return Ok(code.to_string());
        }

        Ok(desktop
            .filter(|code| self.supports(code))
            .unwrap_or(self.site.default_language.as_str())
            .to_string())
    }

    /// Absolute URL of a localized route on the public site.
    pub fn site_url(&self, route: &str) -> String {
        format!("{}{}", self.site.url.trim_end_matches('/'), route)
    }
}

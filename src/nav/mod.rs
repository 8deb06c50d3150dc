//! Navigation list building.
//!
//! Turns the configured page descriptors into the ordered entries shown in
//! the drawer. Nothing here touches widgets: labels stay translation keys and
//! icons stay icon keys until the view resolves them.

pub mod path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::LinksConfig;
pub use path::{PathLocalizer, PrefixLocalizer};

pub const HOME_PATH: &str = "/";
pub const HOME_ICON: &str = "home";
pub const HOME_TITLE: &str = "text-homepage";
pub const LANGUAGE_ICON: &str = "translate";

/// A page of the site as supplied by configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: String,
}

impl PageDescriptor {
    pub fn new(to: impl Into<String>, icon: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            icon: icon.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub href: String,
    pub icon: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NavTarget {
    Internal(String),
    External(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub icon: String,
    pub title: String,
    pub target: NavTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavEntry {
    Link(NavItem),
    Divider,
    LanguageSwitcher { icon: String },
}

/// Build the drawer body for `language`.
///
/// Fixed entries sit at fixed positions: home first, then the pages in input
/// order, then the language switcher, then whatever extra links are
/// configured for the language.
pub fn build_entries(
    pages: &[PageDescriptor],
    language: &str,
    links: &LinksConfig,
    localizer: &dyn PathLocalizer,
) -> Vec<NavEntry> {
    let extra = links.extra_for(language);
    let mut entries = Vec::with_capacity(pages.len() + extra.len() + 6);

    entries.push(NavEntry::Link(NavItem {
        icon: HOME_ICON.to_string(),
        title: HOME_TITLE.to_string(),
        target: NavTarget::Internal(localizer.localize(language, HOME_PATH)),
    }));
    entries.push(NavEntry::Divider);

    entries.extend(pages.iter().map(|page| {
        NavEntry::Link(NavItem {
            icon: page.icon.clone(),
            title: page.title.clone(),
            target: NavTarget::Internal(localizer.localize(language, &page.to)),
        })
    }));

    entries.push(NavEntry::Divider);
    entries.push(NavEntry::LanguageSwitcher {
        icon: LANGUAGE_ICON.to_string(),
    });
    entries.push(NavEntry::Divider);

    entries.extend(extra.iter().map(|link| {
        NavEntry::Link(NavItem {
            icon: link.icon.clone(),
            title: link.title.clone(),
            target: NavTarget::External(link.href.clone()),
        })
    }));

    entries
}

/// The footer link pinned to the bottom of the drawer.
pub fn build_footer(language: &str, links: &LinksConfig) -> NavEntry {
    let support = &links.support;
    NavEntry::Link(NavItem {
        icon: support.icon.clone(),
        title: support.title.clone(),
        target: NavTarget::External(with_language(&support.href, &support.language_param, language)),
    })
}

/// Set `param=language` on `href`, replacing any existing value.
pub fn with_language(href: &str, param: &str, language: &str) -> String {
    let mut url = match url::Url::parse(href) {
        Ok(url) => url,
        Err(e) => {
            warn!("support link {} is not a valid url: {}", href, e);
            return href.to_string();
        }
    };

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != param)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(param, language);

    url.to_string()
}

/// Find the page whose localized route matches `route`.
pub fn active_page<'a>(
    pages: &'a [PageDescriptor],
    route: &str,
    localizer: &dyn PathLocalizer,
) -> Option<&'a PageDescriptor> {
    let (_, bare) = localizer.strip(route);
    pages.iter().find(|page| {
        let to = if page.to.starts_with('/') {
            page.to.clone()
        } else {
            format!("/{}", page.to)
        };
        to == bare
    })
}

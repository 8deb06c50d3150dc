use cosmic::widget::icon;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

pub const FALLBACK_ICON: &str = "image-missing-symbolic";

pub static ICON_CACHE: OnceLock<Mutex<IconCache>> = OnceLock::new();

/// Map an icon key used in page descriptors to a freedesktop icon name.
pub fn icon_name(key: &str) -> &'static str {
    match key {
        "home" => "go-home-symbolic",
        "translate" => "preferences-desktop-locale-symbolic",
        "menu" => "open-menu-symbolic",
        "close" => "window-close-symbolic",
        "edit" => "document-edit-symbolic",
        "contact_support" => "help-browser-symbolic",
        "thumb_up" => "emblem-favorite-symbolic",
        "share" => "emblem-shared-symbolic",
        "store" => "view-list-symbolic",
        "map" => "mark-location-symbolic",
        "info" => "dialog-information-symbolic",
        "help" => "help-about-symbolic",
        "news" => "x-office-document-symbolic",
        "link" => "insert-link-symbolic",
        _ => FALLBACK_ICON,
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
struct IconCacheKey {
    name: &'static str,
    size: u16,
}

pub struct IconCache {
    cache: HashMap<IconCacheKey, icon::Handle>,
}

impl IconCache {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    fn get(&mut self, name: &'static str, size: u16) -> icon::Icon {
        let handle = self
            .cache
            .entry(IconCacheKey { name, size })
            .or_insert_with(|| icon::from_name(name).size(size).handle())
            .clone();
        icon::icon(handle).size(size)
    }
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Themed icon for `key`; unknown keys get [`FALLBACK_ICON`].
pub fn get_icon(key: &str, size: u16) -> icon::Icon {
    let mut cache = ICON_CACHE
        .get_or_init(|| Mutex::new(IconCache::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    cache.get(icon_name(key), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_keys_are_mapped() {
        for key in ["home", "translate", "menu", "edit", "contact_support", "thumb_up"] {
            assert_ne!(icon_name(key), FALLBACK_ICON, "{} has no icon", key);
        }
    }

    #[test]
    fn test_unknown_key_uses_fallback() {
        assert_eq!(icon_name("definitely-not-an-icon"), FALLBACK_ICON);
        assert_eq!(icon_name(""), FALLBACK_ICON);
    }

    #[test]
    fn test_cache_reuses_handles() {
        let mut cache = IconCache::new();
        let _ = cache.get(icon_name("home"), 16);
        let _ = cache.get(icon_name("home"), 16);
        let _ = cache.get(icon_name("home"), 24);
        assert_eq!(cache.cache.len(), 2);
    }
}

/// Maps a site path to its language-specific route and back.
pub trait PathLocalizer {
    fn localize(&self, language: &str, path: &str) -> String;

    /// Split a localized route into its language and the bare path.
    fn strip<'a>(&self, path: &'a str) -> (Option<&'a str>, String);
}

/// Prefixes every non-default language with `/{lang}`; the default language
/// keeps bare paths.
#[derive(Debug, Clone)]
pub struct PrefixLocalizer {
    default_language: String,
    languages: Vec<String>,
}

impl PrefixLocalizer {
    pub fn new(default_language: impl Into<String>, languages: &[String]) -> Self {
        Self {
            default_language: default_language.into(),
            languages: languages.to_vec(),
        }
    }
}

fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

impl PathLocalizer for PrefixLocalizer {
    fn localize(&self, language: &str, path: &str) -> String {
        let path = normalize(path);
        if language == self.default_language || language.is_empty() {
            return path;
        }
        format!("/{}{}", language, path)
    }

    fn strip<'a>(&self, path: &'a str) -> (Option<&'a str>, String) {
        let trimmed = path.trim_start_matches('/');
        let (head, rest) = match trimmed.find('/') {
            Some(i) => (&trimmed[..i], &trimmed[i..]),
            None => (trimmed, "/"),
        };

        if head != self.default_language && self.languages.iter().any(|l| l == head) {
            (Some(head), rest.to_string())
        } else {
            (None, normalize(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localizer() -> PrefixLocalizer {
        PrefixLocalizer::new("en", &["en".to_string(), "zh".to_string()])
    }

    #[test]
    fn test_default_language_keeps_path() {
        let l = localizer();
        assert_eq!(l.localize("en", "/"), "/");
        assert_eq!(l.localize("en", "/shops"), "/shops");
        assert_eq!(l.localize("en", "shops"), "/shops");
    }

    #[test]
    fn test_other_language_is_prefixed() {
        let l = localizer();
        assert_eq!(l.localize("zh", "/"), "/zh/");
        assert_eq!(l.localize("zh", "/shops"), "/zh/shops");
    }

    #[test]
    fn test_strip_round_trip() {
        let l = localizer();
        for lang in ["en", "zh"] {
            for path in ["/", "/shops", "/shops/42"] {
                let localized = l.localize(lang, path);
                let (found, bare) = l.strip(&localized);
                assert_eq!(bare, path);
                if lang == "en" {
                    assert_eq!(found, None);
                } else {
                    assert_eq!(found, Some(lang));
                }
            }
        }
    }

    #[test]
    fn test_strip_ignores_unknown_prefix() {
        let l = localizer();
        assert_eq!(l.strip("/fr/shops"), (None, "/fr/shops".to_string()));
    }
}

//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of every language the service
//! accepts at its API boundary, together with the code the translation model
//! expects for it. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language, including its short tag,
/// names, model code, enabled status, and whether it is the fallback language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "ur")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Urdu")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "اردو")
    pub native_name: &'static str,

    /// Language+script code consumed by the translation model (e.g., "eng_Latn")
    pub model_code: &'static str,

    /// Whether this is the fallback language (only one should be true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// This registry contains all supported languages and provides methods to query
/// and access them. It's initialized once on first access and remains immutable
/// thereafter, so concurrent requests read it without locking.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the default (fallback) language configuration.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple default
    /// languages are defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Map a short language tag to the model's language code.
    ///
    /// Unknown, disabled and empty tags resolve to the default language's
    /// code. This never fails.
    pub fn resolve_model_code(&self, tag: &str) -> &'static str {
        match self.get_by_code(tag) {
            Some(config) if config.enabled => config.model_code,
            _ => self.default_language().model_code,
        }
    }
}

/// Default language configurations.
///
/// English is the fallback for anything the registry does not know.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            model_code: "eng_Latn",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "ur",
            name: "Urdu",
            native_name: "اردو",
            model_code: "urd_Arab",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            model_code: "ara_Arab",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            model_code: "fra_Latn",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_urdu() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("ur").expect("Urdu should be registered");

        assert_eq!(config.code, "ur");
        assert_eq!(config.name, "Urdu");
        assert_eq!(config.model_code, "urd_Arab");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("de").is_none());
    }

    #[test]
    fn test_list_enabled_contains_whitelist() {
        let registry = LanguageRegistry::get();
        let enabled = registry.list_enabled();

        assert_eq!(enabled.len(), 4);
        for code in ["en", "ur", "ar", "fr"] {
            assert!(enabled.iter().any(|lang| lang.code == code), "missing {}", code);
        }
    }

    #[test]
    fn test_default_language_is_english() {
        let registry = LanguageRegistry::get();
        let default = registry.default_language();

        assert_eq!(default.code, "en");
        assert_eq!(default.model_code, "eng_Latn");
    }

    #[test]
    fn test_resolve_model_code_whitelist() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.resolve_model_code("en"), "eng_Latn");
        assert_eq!(registry.resolve_model_code("ur"), "urd_Arab");
        assert_eq!(registry.resolve_model_code("ar"), "ara_Arab");
        assert_eq!(registry.resolve_model_code("fr"), "fra_Latn");
    }

    #[test]
    fn test_resolve_model_code_falls_back_to_english() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.resolve_model_code("de"), "eng_Latn");
        assert_eq!(registry.resolve_model_code(""), "eng_Latn");
        assert_eq!(registry.resolve_model_code("UR"), "eng_Latn");
    }

    #[test]
    fn test_model_codes_are_unique() {
        let registry = LanguageRegistry::get();
        let mut codes: Vec<_> = registry.list_enabled().iter().map(|l| l.model_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), registry.list_enabled().len());
    }

    proptest! {
        #[test]
        fn prop_resolve_model_code_is_total(tag in ".*") {
            let code = LanguageRegistry::get().resolve_model_code(&tag);
            prop_assert!(LanguageRegistry::get()
                .list_enabled()
                .iter()
                .any(|lang| lang.model_code == code));
        }
    }
}

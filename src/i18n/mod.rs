//! Language support for the translation endpoint.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and the model
//!   code each one maps to
//! - `language`: Type-safe `Language` validated against the registry
//!
//! # Example
//!
//! ```rust,ignore
//! use idiom_translator::i18n::{Language, LanguageRegistry};
//!
//! let urdu = Language::from_code("ur")?;
//! assert_eq!(urdu.model_code(), "urd_Arab");
//!
//! // Unknown tags degrade to English instead of failing
//! assert_eq!(resolve_model_code("de"), "eng_Latn");
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};

/// Resolve a short language tag to the translation model's language code.
///
/// Total over every input string: unsupported tags resolve to English.
pub fn resolve_model_code(tag: &str) -> &'static str {
    LanguageRegistry::get().resolve_model_code(tag)
}

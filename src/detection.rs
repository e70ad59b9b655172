//! Source language detection.

use crate::error::DetectionError;
use whatlang::Lang;

/// Detects the language of a piece of text, returning a short language tag.
///
/// The tag may be one the service does not support; callers decide how to
/// handle that.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

/// Trigram-based detector backed by `whatlang`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String, DetectionError> {
        // Best guess is used even when whatlang flags it as unreliable
        let info = whatlang::detect(text).ok_or(DetectionError::Inconclusive)?;
        Ok(lang_to_tag(info.lang()))
    }
}

/// Two-letter tags for the languages the service knows; ISO 639-3 for the rest.
fn lang_to_tag(lang: Lang) -> String {
    match lang {
        Lang::Eng => "en",
        Lang::Urd => "ur",
        Lang::Ara => "ar",
        Lang::Fra => "fr",
        other => other.code(),
    }
    .to_string()
}

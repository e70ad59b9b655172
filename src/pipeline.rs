//! Request-level translation flow.
//!
//! validate -> detect source language -> resolve model codes -> translate
//! (with a deadline) -> correct idioms -> assemble the result.

use crate::correction::correct;
use crate::detection::LanguageDetector;
use crate::error::TranslateError;
use crate::glossary::Glossary;
use crate::i18n::{resolve_model_code, Language};
use crate::metrics::PipelineMetrics;
use crate::translation::Translator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Incoming translation request. Both fields are optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub detected_language: String,
    pub translation: String,
}

pub struct TranslationPipeline {
    translator: Arc<dyn Translator>,
    detector: Arc<dyn LanguageDetector>,
    glossary: Arc<Glossary>,
    metrics: Arc<PipelineMetrics>,
    timeout: Duration,
}

impl TranslationPipeline {
    pub fn new(
        translator: Arc<dyn Translator>,
        detector: Arc<dyn LanguageDetector>,
        glossary: Arc<Glossary>,
        metrics: Arc<PipelineMetrics>,
        timeout: Duration,
    ) -> Self {
        Self {
            translator,
            detector,
            glossary,
            metrics,
            timeout,
        }
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    pub fn metrics(&self) -> &PipelineMetrics {
        &self.metrics
    }

    /// Translate `request.text` and correct literal idiom renderings.
    ///
    /// Detection problems fall back to the default language and are never
    /// reported. Model failures and timeouts abort the request.
    pub async fn handle_translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        self.metrics.record_request();

        let text = request.text.unwrap_or_default();
        if text.is_empty() {
            self.metrics.record_validation_failure();
            return Err(TranslateError::Validation("No text provided".to_string()));
        }

        let target_lang = request
            .target_lang
            .unwrap_or_else(|| Language::default_language().code().to_string());

        let detected = self.detect_source(&text);
        let source_code = detected.model_code();
        let target_code = resolve_model_code(&target_lang);

        info!(
            "Translating {} chars: {} ({}) -> {} ({})",
            text.chars().count(),
            detected,
            source_code,
            target_lang,
            target_code
        );

        let raw = match tokio::time::timeout(
            self.timeout,
            self.translator.translate(&text, source_code, target_code),
        )
        .await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                self.metrics.record_translation_failure();
                error!("Translation failed: {:#}", e);
                return Err(TranslateError::Translation(format!("{:#}", e)));
            }
            Err(_) => {
                self.metrics.record_timeout();
                error!("Translation exceeded deadline of {:?}", self.timeout);
                return Err(TranslateError::Timeout(self.timeout));
            }
        };

        let correction = correct(&self.glossary, &text, &raw, &target_lang);
        if !correction.applied.is_empty() {
            info!(
                "Corrected {} literal rendering(s) for idioms {:?}",
                correction.replacements, correction.applied
            );
            self.metrics.record_corrections(correction.replacements);
        }

        Ok(TranslationResult {
            original_text: text,
            detected_language: detected.code().to_string(),
            translation: correction.text,
        })
    }

    /// Detect the source language, falling back to the default language when
    /// detection fails or yields an unsupported tag.
    fn detect_source(&self, text: &str) -> Language {
        match self.detector.detect(text) {
            Ok(tag) => match Language::from_code(&tag) {
                Ok(language) => language,
                Err(_) => {
                    debug!("Detected unsupported language '{}', using default", tag);
                    self.metrics.record_detection_fallback();
                    Language::default_language()
                }
            },
            Err(e) => {
                warn!("Language detection failed ({}), using default", e);
                self.metrics.record_detection_fallback();
                Language::default_language()
            }
        }
    }
}

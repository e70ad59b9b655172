use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Machine translation backend.
///
/// `source_code` and `target_code` are model language codes (e.g. "eng_Latn"),
/// not the short tags used at the API boundary.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source_code: &str, target_code: &str) -> Result<String>;
}

/// Request body for the model-serving sidecar
#[derive(Debug, Serialize)]
struct ModelTranslateRequest<'a> {
    text: &'a str,
    src_lang: &'a str,
    tgt_lang: &'a str,
    max_length: u32,
    num_beams: u32,
}

#[derive(Debug, Deserialize)]
struct ModelTranslateResponse {
    translation: String,
}

/// HTTP client for the service hosting the NLLB translation model.
#[derive(Debug, Clone)]
pub struct ModelServiceClient {
    client: reqwest::Client,
    endpoint: String,
    max_length: u32,
    num_beams: u32,
}

impl ModelServiceClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            endpoint: format!("{}/translate", config.model_service_url.trim_end_matches('/')),
            max_length: config.max_length,
            num_beams: config.num_beams,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Translator for ModelServiceClient {
    async fn translate(&self, text: &str, source_code: &str, target_code: &str) -> Result<String> {
        let request = ModelTranslateRequest {
            text,
            src_lang: source_code,
            tgt_lang: target_code,
            max_length: self.max_length,
            num_beams: self.num_beams,
        };

        debug!(
            "Requesting translation {} -> {} ({} chars)",
            source_code,
            target_code,
            text.chars().count()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send translation request to model service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Model service error ({}): {}", status, body);
        }

        let model_response: ModelTranslateResponse = response
            .json()
            .await
            .context("Failed to parse model service translation response")?;

        Ok(model_response.translation)
    }
}

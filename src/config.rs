use anyhow::{bail, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Model service
    pub model_service_url: String,
    pub translate_timeout_secs: u64,
    pub max_length: u32,
    pub num_beams: u32,

    // Glossary override (JSON file); builtin glossary when unset
    pub glossary_path: Option<String>,

    // Optional shared secret for the X-API-Key header
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            model_service_url: "http://localhost:8000".to_string(),
            translate_timeout_secs: 60,
            max_length: 200,
            num_beams: 5,
            glossary_path: None,
            api_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),

            model_service_url: std::env::var("MODEL_SERVICE_URL")
                .unwrap_or(defaults.model_service_url),
            translate_timeout_secs: std::env::var("TRANSLATE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.translate_timeout_secs),
            max_length: std::env::var("MAX_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|len| *len > 0)
                .unwrap_or(defaults.max_length),
            num_beams: std::env::var("NUM_BEAMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|beams| *beams > 0)
                .unwrap_or(defaults.num_beams),

            glossary_path: std::env::var("GLOSSARY_PATH").ok().filter(|p| !p.is_empty()),
            api_key: std::env::var("API_KEY").ok().filter(|k| !k.is_empty()),
        };

        if !config.model_service_url.starts_with("http://")
            && !config.model_service_url.starts_with("https://")
        {
            bail!(
                "MODEL_SERVICE_URL must be an http(s) URL, got '{}'",
                config.model_service_url
            );
        }

        Ok(config)
    }

    pub fn translate_timeout(&self) -> Duration {
        Duration::from_secs(self.translate_timeout_secs)
    }
}

use crate::config::Config;
use crate::detection::WhatlangDetector;
use crate::error::TranslateError;
use crate::glossary::Glossary;
use crate::i18n::Language;
use crate::metrics::{MetricsReport, PipelineMetrics};
use crate::pipeline::{TranslationPipeline, TranslationRequest, TranslationResult};
use crate::security::require_api_key;
use crate::translation::{ModelServiceClient, Translator};
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TranslationPipeline>,
    pub api_key: Option<String>,
}

impl AppState {
    /// Wire the production collaborators: NLLB model service, whatlang
    /// detection and the configured glossary.
    pub fn from_config(config: &Config) -> Result<Self> {
        let glossary = match &config.glossary_path {
            Some(path) => Glossary::from_file(path)?,
            None => Glossary::builtin(),
        };
        info!(
            "Loaded glossary with {} idioms for '{}'",
            glossary.len(),
            glossary.target_language()
        );

        let client = reqwest::Client::builder()
            .timeout(config.translate_timeout())
            .build()
            .context("Failed to create HTTP client")?;
        let translator = ModelServiceClient::new(client, config);
        info!("Using model service at {}", translator.endpoint());

        Ok(Self::new(config, Arc::new(translator), glossary))
    }

    pub fn new(config: &Config, translator: Arc<dyn Translator>, glossary: Glossary) -> Self {
        let pipeline = TranslationPipeline::new(
            translator,
            Arc::new(WhatlangDetector),
            Arc::new(glossary),
            Arc::new(PipelineMetrics::new()),
            config.translate_timeout(),
        );

        Self {
            pipeline: Arc::new(pipeline),
            api_key: config.api_key.clone(),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/translate", post(translate))
        .route("/health", get(health_check))
        .route("/languages", get(list_languages))
        .route("/metrics", get(metrics))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn translate(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResult>, TranslateError> {
    require_api_key(&headers, state.api_key.as_deref())?;

    let Json(request) = payload.map_err(|rejection| {
        state.pipeline.metrics().record_request();
        state.pipeline.metrics().record_validation_failure();
        TranslateError::Validation(rejection.body_text())
    })?;

    let result = state.pipeline.handle_translate(request).await?;
    Ok(Json(result))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "glossary_entries": state.pipeline.glossary().len()
    }))
}

#[derive(Debug, Serialize)]
struct LanguageInfo {
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    model_code: &'static str,
    is_default: bool,
}

async fn list_languages() -> Json<Vec<LanguageInfo>> {
    let languages = Language::enabled()
        .into_iter()
        .map(|lang| LanguageInfo {
            code: lang.code(),
            name: lang.name(),
            native_name: lang.native_name(),
            model_code: lang.model_code(),
            is_default: lang.is_default(),
        })
        .collect();

    Json(languages)
}

async fn metrics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MetricsReport>, TranslateError> {
    require_api_key(&headers, state.api_key.as_deref())?;
    Ok(Json(state.pipeline.metrics().report()))
}

//! Machine translation endpoint with idiom-aware post-correction.
//!
//! Requests are translated by an external NLLB model service, then scanned
//! for literal renderings of known idioms which are replaced by their
//! culturally correct equivalents.

pub mod config;
pub mod correction;
pub mod detection;
pub mod error;
pub mod glossary;
pub mod i18n;
pub mod metrics;
pub mod pipeline;
pub mod security;
pub mod server;
pub mod translation;

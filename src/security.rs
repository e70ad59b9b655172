use crate::error::TranslateError;
use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Constant-time string comparison to prevent timing attacks
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Check the `X-API-Key` header when an API key is configured.
///
/// With no configured key every request is allowed.
pub fn require_api_key(headers: &HeaderMap, expected: Option<&str>) -> Result<(), TranslateError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let provided = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if constant_time_compare(provided, expected) {
        Ok(())
    } else {
        Err(TranslateError::Unauthorized)
    }
}

//! CORS middleware configuration.

use axum::http::{HeaderValue, Method, header::InvalidHeaderValue};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Create the CORS layer for the configured origins.
///
/// An empty list allows every origin, method and header. Otherwise only the
/// listed origins are allowed, with the methods the API actually serves.
pub fn create_cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    if allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any))
}

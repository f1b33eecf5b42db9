//! Request extractors.

use super::error::ApiError;
use axum::extract::FromRequest;

/// `axum::Json` whose rejections (invalid JSON, wrong content type, unknown
/// fields) become a 400 `ApiError` with the standard error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

//! API error handling utilities.

use crate::services::ServiceError;
use crate::storage::StorageError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Error body returned by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
    /// Machine-readable reason, present on conflicts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict { code: &'static str, message: String },
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::Conflict { message, .. }
            | ApiError::Internal(message) => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(message) => error!("Request failed: {}", message),
            other => warn!("Request rejected ({}): {}", status.as_u16(), other.message()),
        }

        let code = match &self {
            ApiError::Conflict { code, .. } => Some(code.to_string()),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.message().to_string(),
            status: status.as_u16(),
            code,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Conflict { .. } => ApiError::Conflict {
                code: "conflict",
                message: err.to_string(),
            },
            StorageError::Connection(_) | StorageError::Query(_) | StorageError::Migration(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(message) => ApiError::BadRequest(message),
            ServiceError::DishNotFound(_) => ApiError::Conflict {
                code: "dish_not_found",
                message: err.to_string(),
            },
            ServiceError::AlreadySaved { .. } => ApiError::Conflict {
                code: "already_saved",
                message: err.to_string(),
            },
            ServiceError::Catalog(_) => ApiError::Internal(err.to_string()),
            ServiceError::Storage(storage) => storage.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

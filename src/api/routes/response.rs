//! Response bodies shared by several route modules.

use serde::Serialize;
use utoipa::ToSchema;

/// Plain `{"message": ...}` acknowledgement
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

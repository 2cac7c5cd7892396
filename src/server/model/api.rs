//! Response bodies shared across endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured failure body.
///
/// `type` carries a stable tag such as `EntityNotFoundException` or `BadRequest`,
/// `message` a human-readable description.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl ErrorDto {
    pub fn new(error_type: &str, message: String) -> Self {
        Self {
            error_type: error_type.to_string(),
            message,
        }
    }
}

/// Confirmation body returned by delete operations.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MessageDto {
    pub message: String,
}

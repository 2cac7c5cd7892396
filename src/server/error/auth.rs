use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::middleware::auth::Role;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Caller does not hold the role the operation declares.
    ///
    /// Also covers callers without a recognized session, who hold no roles at all.
    /// Results in a 403 Forbidden response with no body.
    #[error("Access denied: operation requires {required}")]
    Forbidden {
        /// Role the operation declared.
        required: Role,
    },
}

/// Converts authorization errors into HTTP responses.
///
/// Rejections are logged at debug level; the response carries only the status.
///
/// # Returns
/// - 403 Forbidden - For `Forbidden`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Forbidden { required } => {
                tracing::debug!("Rejected request lacking {}", required);
                StatusCode::FORBIDDEN.into_response()
            }
        }
    }
}

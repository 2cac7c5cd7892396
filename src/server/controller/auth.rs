use axum::{http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::server::{controller::user::USER_TAG, middleware::session::AuthSession};

/// End the current session.
///
/// # Returns
/// - `204 No Content` - Session cleared, whether or not a user was logged in
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    StatusCode::NO_CONTENT
}

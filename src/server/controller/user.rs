use axum::{extract::State, Json};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Role},
    model::user::CurrentUserDto,
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the logged-in user and their authorities.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `200 OK` - The user and their roles
/// - `403 Forbidden` - No user in session
#[utoipa::path(
    get,
    path = "/api/currentUser",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The logged-in user", body = CurrentUserDto),
        (status = 403, description = "No user in session")
    ),
)]
pub async fn current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CurrentUserDto>, AppError> {
    let caller = AuthGuard::new(&state.db, &session).caller().await?;

    let Some(current) = UserService::describe(caller) else {
        return Err(AuthError::Forbidden {
            required: Role::User,
        }
        .into());
    };

    Ok(Json(current))
}

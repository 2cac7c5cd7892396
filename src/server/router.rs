use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth::logout, resource::routes, user::current_user},
    docs,
    model::{
        articles::Article, help_request::HelpRequest,
        ucsb_dining_commons_menu_item::UcsbDiningCommonsMenuItem,
        ucsb_organization::UcsbOrganization,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(routes::<Article>())
        .merge(routes::<HelpRequest>())
        .merge(routes::<UcsbDiningCommonsMenuItem>())
        .merge(routes::<UcsbOrganization>())
        .route("/api/currentUser", get(current_user))
        .route("/api/auth/logout", post(logout))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::openapi()))
}

/// Attaches state, the session layer and request tracing to `routes`.
pub fn app(
    routes: Router<AppState>,
    state: AppState,
    session: SessionManagerLayer<SqliteStore>,
) -> Router {
    routes
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http())
}

//! HTTP tests driving the full router over a real listener.
//!
//! Each test starts its own server on an ephemeral port backed by a fresh in-memory
//! database. Sessions are issued through a test-only login route, standing in for the
//! external login flow.

use axum::{extract::Path, http::StatusCode as AxumStatus, routing::post};
use reqwest::{Client, Response, StatusCode};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::session::AuthSession, router, startup, state::AppState,
};

mod ucsb_dining_commons_menu_item;
mod ucsb_organization;

pub struct TestServer {
    base: String,
    client: Client,
    pub db: DatabaseConnection,
    _context: TestContext,
}

async fn test_login(
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<AxumStatus, AppError> {
    AuthSession::new(&session).set_user_id(user_id).await?;
    Ok(AxumStatus::NO_CONTENT)
}

impl TestServer {
    /// Starts a server with database-backed stores.
    pub async fn start() -> Self {
        Self::start_with(|state| state).await
    }

    /// Starts a server after letting `customize` replace parts of the state.
    pub async fn start_with(customize: impl FnOnce(AppState) -> AppState) -> Self {
        let mut context = TestBuilder::new()
            .with_resource_tables()
            .build()
            .await
            .unwrap();
        let store = context.session_store().await.unwrap();
        let db = context.db.clone().unwrap();

        let state = customize(AppState::new(db.clone()));
        let routes = router::router().route("/test/login/{user_id}", post(test_login));
        let app = router::app(routes, state, startup::session_layer(store, false));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder().cookie_store(true).build().unwrap();

        Self {
            base: format!("http://{}", addr),
            client,
            db,
            _context: context,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn login_as(&self, user_id: i32) {
        let response = self
            .client
            .post(self.url(&format!("/test/login/{}", user_id)))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    /// Logs in as a freshly created regular user.
    pub async fn login_user(&self) -> entity::user::Model {
        let user = factory::create_user(&self.db).await.unwrap();
        self.login_as(user.id).await;
        user
    }

    /// Logs in as a freshly created admin.
    pub async fn login_admin(&self) -> entity::user::Model {
        let admin = factory::create_admin(&self.db).await.unwrap();
        self.login_as(admin.id).await;
        admin
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn post(&self, path: &str, query: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .query(query)
            .send()
            .await
            .unwrap()
    }

    pub async fn put(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }
}

/// Asserts a 404 response carrying the not-found body.
pub async fn assert_not_found(response: Response, message: &str) {
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "type": "EntityNotFoundException", "message": message })
    );
}

/// Asserts a 403 response with an empty body.
pub async fn assert_forbidden(response: Response) {
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response.bytes().await.unwrap().is_empty());
}

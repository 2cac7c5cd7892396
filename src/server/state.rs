//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for role resolution
//! - One `Store` per resource, behind `Arc<dyn Store<_>>` so tests can swap in fakes

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        articles::ArticleRepository, help_request::HelpRequestRepository, store::Store,
        ucsb_dining_commons_menu_item::MenuItemRepository,
        ucsb_organization::OrganizationRepository,
    },
    model::{
        articles::Article, help_request::HelpRequest,
        ucsb_dining_commons_menu_item::UcsbDiningCommonsMenuItem,
        resource::Resource, ucsb_organization::UcsbOrganization,
    },
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool and the
/// stores are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool used to resolve the caller's roles.
    pub db: DatabaseConnection,

    pub articles: Arc<dyn Store<Article>>,
    pub help_requests: Arc<dyn Store<HelpRequest>>,
    pub menu_items: Arc<dyn Store<UcsbDiningCommonsMenuItem>>,
    pub organizations: Arc<dyn Store<UcsbOrganization>>,
}

impl AppState {
    /// Creates the application state with SeaORM-backed stores on `db`.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            articles: Arc::new(ArticleRepository::new(db.clone())),
            help_requests: Arc::new(HelpRequestRepository::new(db.clone())),
            menu_items: Arc::new(MenuItemRepository::new(db.clone())),
            organizations: Arc::new(OrganizationRepository::new(db.clone())),
            db,
        }
    }
}

/// Selects the store serving resource `R`.
pub trait StoreFor<R: Resource> {
    fn store(&self) -> Arc<dyn Store<R>>;
}

impl StoreFor<Article> for AppState {
    fn store(&self) -> Arc<dyn Store<Article>> {
        self.articles.clone()
    }
}

impl StoreFor<HelpRequest> for AppState {
    fn store(&self) -> Arc<dyn Store<HelpRequest>> {
        self.help_requests.clone()
    }
}

impl StoreFor<UcsbDiningCommonsMenuItem> for AppState {
    fn store(&self) -> Arc<dyn Store<UcsbDiningCommonsMenuItem>> {
        self.menu_items.clone()
    }
}

impl StoreFor<UcsbOrganization> for AppState {
    fn store(&self) -> Arc<dyn Store<UcsbOrganization>> {
        self.organizations.clone()
    }
}

//! Server-side API backend.
//!
//! This module contains the complete backend implementation: API endpoints, the
//! generic resource contract, data access and infrastructure. The backend uses Axum
//! as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, parameter decoding and response shaping
//! - **Service Layer** (`service/`) - The resource contract: authorization, not-found handling, partial updates
//! - **Data Layer** (`data/`) - The `Store` abstraction and its SeaORM-backed implementations
//! - **Model Layer** (`model/`) - Resource records, the `Resource` trait and wire DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and the role gate
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB connection, per-resource stores)
//! - **Startup** (`startup`) - Initialization of tracing, database, sessions and admin seeding
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`docs`) - OpenAPI document generated from the resource contract
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a resource handler
//! 2. **Middleware** resolves the caller's roles from the session and issues a grant
//! 3. **Controller** decodes key, parameters or body only once the caller is authorized
//! 4. **Service** checks the grant against the operation and performs one store call
//! 5. **Data** maps between database rows and resource records
//! 6. **Controller** serializes the record, or the error layer renders the failure

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

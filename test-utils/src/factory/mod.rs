//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each table has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let article = factory::articles::create_article(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@ucsb.edu")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod articles;
pub mod help_request;
pub mod helpers;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;
pub mod user;

pub use articles::create_article;
pub use help_request::create_help_request;
pub use ucsb_dining_commons_menu_item::create_menu_item;
pub use ucsb_organization::create_organization;
pub use user::{create_admin, create_user};

//! Server-side domain models and parameter types.
//!
//! Resource records double as their own wire representation: each one is serialized
//! field-by-field (camelCase, no envelope) and converted to and from entity models at
//! the repository boundary. The `resource` module defines the contract every record
//! implements so that a single controller and service can serve all of them.

pub mod api;
pub mod articles;
pub mod help_request;
pub mod resource;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;
pub mod user;

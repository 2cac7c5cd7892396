//! Database repository layer for all domain entities.
//!
//! Resource records are persisted through the `Store` trait so the service layer can
//! run against either a SeaORM-backed repository or the in-memory fake used in tests.
//! Repositories use SeaORM entity models internally and convert to domain records at
//! this boundary.

pub mod articles;
pub mod help_request;
#[cfg(test)]
pub mod memory;
pub mod store;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;
pub mod user;

#[cfg(test)]
mod test;

//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Authorization**: Checking the caller's grant against the operation before any store access
//! - **Resource Contract**: Not-found handling and allow-list updates, uniform across resources
//! - **Domain Models**: Working with domain records rather than entity models

pub mod resource;
pub mod user;

#[cfg(test)]
mod test;

//! HTTP request handlers.
//!
//! - `resource` - Generic handlers and routes implementing the CRUD contract for any resource
//! - `user` - Current-user endpoint
//! - `auth` - Session termination

pub mod auth;
pub mod resource;
pub mod user;

#[cfg(test)]
mod test;

//! Request-scoped session access and role gating.
//!
//! - `session` - Typed wrapper around the tower-sessions `Session`
//! - `auth` - Role resolution and the `authorize` gate issuing operation grants

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;

//! REST backend exposing campus resources (articles, help requests, dining
//! commons menu items and student organizations) through one uniform,
//! role-gated CRUD contract.

pub mod server;

//! SeaORM entities, one module per table.

pub mod prelude;

pub mod articles;
pub mod help_request;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;
pub mod user;

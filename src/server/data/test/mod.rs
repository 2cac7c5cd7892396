use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::store::Store;

mod articles;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{authorize, AuthGuard, Role, RoleSet},
        session::AuthSession,
    },
};
use test_utils::{builder::TestBuilder, factory};

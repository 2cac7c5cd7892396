//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Users are identified by id in sessions and by email when seeded from configuration.

use crate::server::model::user::{UpsertUserParam, User};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user keyed by email.
    ///
    /// Inserts a new user or updates an existing user's name and optionally their admin status.
    /// The admin status is only updated if explicitly provided (Some value), so regular
    /// upserts never revoke admin privileges.
    ///
    /// # Arguments
    /// - `param` - User upsert parameters including email, full name, and optional admin status
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let mut update_columns = vec![entity::user::Column::FullName];

        if param.is_admin.is_some() {
            update_columns.push(entity::user::Column::Admin);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            full_name: ActiveValue::Set(param.full_name),
            admin: ActiveValue::Set(param.is_admin.unwrap_or(false)),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Email)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}

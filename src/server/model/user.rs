//! User domain models and parameters.
//!
//! Users back role resolution: every user holds the user role, and those flagged as
//! admin additionally hold the admin role.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            full_name: entity.full_name,
            admin: entity.admin,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            admin: self.admin,
        }
    }
}

/// Parameters for inserting or updating a user by email.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub email: String,
    pub full_name: String,
    /// Admin flag to store; `None` leaves an existing user's flag untouched.
    pub is_admin: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub admin: bool,
}

/// The logged-in user together with the authorities they hold.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CurrentUserDto {
    pub user: UserDto,
    /// Authority strings, e.g. `ROLE_USER`, `ROLE_ADMIN`
    pub roles: Vec<String>,
}

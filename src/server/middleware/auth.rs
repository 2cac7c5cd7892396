//! Role resolution and authorization.
//!
//! Authorization is an explicit capability check: `authorize` compares the caller's
//! role set with the role an operation declares and, on success, issues a `Grant`
//! that is handed to the operation itself. Roles are independent; holding `Admin`
//! does not satisfy an operation that declares `User`.

use std::collections::BTreeSet;
use std::fmt;

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Authority string reported to clients.
    pub fn authority(self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.authority())
    }
}

/// Roles held by one caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    /// Role set of a caller without a recognized session.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Role set of a known user.
    pub fn for_user(user: &User) -> Self {
        let mut roles = BTreeSet::from([Role::User]);
        if user.admin {
            roles.insert(Role::Admin);
        }
        Self(roles)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn authorities(&self) -> Vec<String> {
        self.0.iter().map(|role| role.authority().to_string()).collect()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Capability to run operations that declare one specific role.
///
/// Only `authorize` issues grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grant {
    role: Role,
}

impl Grant {
    /// Checks that this grant covers an operation declaring `required`.
    pub fn check(&self, required: Role) -> Result<(), AuthError> {
        if self.role == required {
            Ok(())
        } else {
            Err(AuthError::Forbidden { required })
        }
    }
}

/// Issues a grant for `required` if the caller holds that exact role.
pub fn authorize(roles: &RoleSet, required: Role) -> Result<Grant, AuthError> {
    if roles.contains(required) {
        Ok(Grant { role: required })
    } else {
        Err(AuthError::Forbidden { required })
    }
}

/// Resolved identity of the current caller.
#[derive(Debug, Clone)]
pub struct Caller {
    /// The logged-in user, if the session names a known user.
    pub user: Option<User>,
    pub roles: RoleSet,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the caller from the session.
    ///
    /// A session without a user, or naming a user id that no longer exists, yields a
    /// caller with no roles rather than an error.
    ///
    /// # Returns
    /// - `Ok(Caller)` - Resolved caller
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    /// - `Err(AppError::DbErr(_))` - Failed to look up the user
    pub async fn caller(&self) -> Result<Caller, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(Caller {
                user: None,
                roles: RoleSet::empty(),
            });
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            tracing::debug!("Session references unknown user {}", user_id);
            return Ok(Caller {
                user: None,
                roles: RoleSet::empty(),
            });
        };

        let roles = RoleSet::for_user(&user);

        Ok(Caller {
            user: Some(user),
            roles,
        })
    }

    /// Resolves the caller and authorizes them for `required`.
    ///
    /// # Returns
    /// - `Ok(Grant)` - Caller holds `required`
    /// - `Err(AppError::AuthErr(AuthError::Forbidden))` - Caller lacks `required`
    pub async fn require(&self, required: Role) -> Result<Grant, AppError> {
        let caller = self.caller().await?;

        Ok(authorize(&caller.roles, required)?)
    }
}

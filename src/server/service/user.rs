use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    middleware::auth::Caller,
    model::user::{CurrentUserDto, UpsertUserParam, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ensures every listed email belongs to an admin user.
    ///
    /// Missing users are created with their email as display name; existing users keep
    /// their name and are promoted.
    pub async fn seed_admins(&self, emails: &[String]) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);
        let mut admins = Vec::with_capacity(emails.len());

        for email in emails {
            let full_name = match repo.find_by_email(email).await? {
                Some(existing) => existing.full_name,
                None => email.clone(),
            };

            let admin = repo
                .upsert(UpsertUserParam {
                    email: email.clone(),
                    full_name,
                    is_admin: Some(true),
                })
                .await?;

            tracing::info!("Seeded admin {}", admin.email);
            admins.push(admin);
        }

        Ok(admins)
    }

    /// Describes the caller for the current-user endpoint.
    ///
    /// Returns `None` for callers without a known user.
    pub fn describe(caller: Caller) -> Option<CurrentUserDto> {
        let user = caller.user?;
        let roles = caller.roles.authorities();

        Some(CurrentUserDto {
            user: user.into_dto(),
            roles,
        })
    }
}

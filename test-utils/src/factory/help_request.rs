//! Help request factory for creating test help request rows.

use crate::factory::helpers::{date_time, next_id};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test help requests with customizable fields.
pub struct HelpRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requester_email: String,
    team_id: String,
    table_or_breakout_room: String,
    request_time: NaiveDateTime,
    explanation: String,
    solved: bool,
}

impl<'a> HelpRequestFactory<'a> {
    /// Creates a new HelpRequestFactory with default values.
    ///
    /// Defaults:
    /// - team_id: `"{n}-f24"`
    /// - request_time: `2024-10-29T00:00:00`
    /// - solved: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            requester_email: "foo@bar.com".to_string(),
            team_id: format!("{}-f24", id),
            table_or_breakout_room: "br10".to_string(),
            request_time: date_time("2024-10-29T00:00:00"),
            explanation: "testing".to_string(),
            solved: false,
        }
    }

    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    pub fn solved(mut self, solved: bool) -> Self {
        self.solved = solved;
        self
    }

    /// Builds and inserts the help request row into the database.
    pub async fn build(self) -> Result<entity::help_request::Model, DbErr> {
        entity::help_request::ActiveModel {
            requester_email: ActiveValue::Set(self.requester_email),
            team_id: ActiveValue::Set(self.team_id),
            table_or_breakout_room: ActiveValue::Set(self.table_or_breakout_room),
            request_time: ActiveValue::Set(self.request_time),
            explanation: ActiveValue::Set(self.explanation),
            solved: ActiveValue::Set(self.solved),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a help request with default values.
pub async fn create_help_request(
    db: &DatabaseConnection,
) -> Result<entity::help_request::Model, DbErr> {
    HelpRequestFactory::new(db).build().await
}

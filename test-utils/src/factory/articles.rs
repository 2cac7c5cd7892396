//! Article factory for creating test article rows.

use crate::factory::helpers::{date_time, next_id};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    url: String,
    explanation: String,
    email: String,
    date_added: NaiveDateTime,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {n}"`
    /// - url: `"https://example.com/{n}"`
    /// - date_added: `2022-01-03T00:00:00`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Article {}", id),
            url: format!("https://example.com/{}", id),
            explanation: "An article worth reading".to_string(),
            email: "cgaucho@ucsb.edu".to_string(),
            date_added: date_time("2022-01-03T00:00:00"),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn date_added(mut self, date_added: NaiveDateTime) -> Self {
        self.date_added = date_added;
        self
    }

    /// Builds and inserts the article row into the database.
    pub async fn build(self) -> Result<entity::articles::Model, DbErr> {
        entity::articles::ActiveModel {
            title: ActiveValue::Set(self.title),
            url: ActiveValue::Set(self.url),
            explanation: ActiveValue::Set(self.explanation),
            email: ActiveValue::Set(self.email),
            date_added: ActiveValue::Set(self.date_added),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values.
pub async fn create_article(db: &DatabaseConnection) -> Result<entity::articles::Model, DbErr> {
    ArticleFactory::new(db).build().await
}

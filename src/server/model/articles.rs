//! Article records and their creation parameters.

use chrono::NaiveDateTime;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::server::model::resource::Resource;

/// Article recommended by a member, with a link and an explanation.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Surrogate key, assigned on first save.
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub explanation: String,
    /// Email of the member who submitted the article.
    pub email: String,
    pub date_added: NaiveDateTime,
}

/// Query parameters for creating an article.
#[derive(Deserialize, IntoParams, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreateArticleParams {
    /// Title of the article
    pub title: String,
    /// Link to the article
    pub url: String,
    /// Why the article is worth reading
    pub explanation: String,
    /// Email of the submitter
    pub email: String,
    /// ISO-8601 local date-time, e.g. `2022-01-03T00:00:00`
    #[param(value_type = String)]
    pub date_added: NaiveDateTime,
}

impl Article {
    /// Converts an entity model to an article at the repository boundary.
    pub fn from_entity(entity: entity::articles::Model) -> Self {
        Self {
            id: Some(entity.id),
            title: entity.title,
            url: entity.url,
            explanation: entity.explanation,
            email: entity.email,
            date_added: entity.date_added,
        }
    }

    /// Converts the article into an active model.
    ///
    /// The id is left unset when absent so the database assigns it.
    pub fn into_active_model(self) -> entity::articles::ActiveModel {
        entity::articles::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            title: ActiveValue::Set(self.title),
            url: ActiveValue::Set(self.url),
            explanation: ActiveValue::Set(self.explanation),
            email: ActiveValue::Set(self.email),
            date_added: ActiveValue::Set(self.date_added),
        }
    }
}

impl Resource for Article {
    type Key = i64;
    type CreateParams = CreateArticleParams;

    const NAME: &'static str = "Articles";
    const PATH: &'static str = "/api/articles";
    const KEY_PARAM: &'static str = "id";
    const DELETABLE: bool = true;

    fn key(&self) -> Option<i64> {
        self.id
    }

    fn set_key(&mut self, key: i64) {
        self.id = Some(key);
    }

    fn from_params(params: CreateArticleParams) -> Self {
        Self {
            id: None,
            title: params.title,
            url: params.url,
            explanation: params.explanation,
            email: params.email,
            date_added: params.date_added,
        }
    }

    /// `date_added` records submission time and is not editable.
    fn apply_update(&mut self, incoming: Self) {
        self.title = incoming.title;
        self.url = incoming.url;
        self.explanation = incoming.explanation;
        self.email = incoming.email;
    }
}

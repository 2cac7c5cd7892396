//! Help request records and their creation parameters.

use chrono::NaiveDateTime;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::server::model::resource::Resource;

/// Request for help raised by a team during a lab section.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

/// Query parameters for creating a help request.
#[derive(Deserialize, IntoParams, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreateHelpRequestParams {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    /// ISO-8601 local date-time
    #[param(value_type = String)]
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

impl HelpRequest {
    pub fn from_entity(entity: entity::help_request::Model) -> Self {
        Self {
            id: Some(entity.id),
            requester_email: entity.requester_email,
            team_id: entity.team_id,
            table_or_breakout_room: entity.table_or_breakout_room,
            request_time: entity.request_time,
            explanation: entity.explanation,
            solved: entity.solved,
        }
    }

    pub fn into_active_model(self) -> entity::help_request::ActiveModel {
        entity::help_request::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            requester_email: ActiveValue::Set(self.requester_email),
            team_id: ActiveValue::Set(self.team_id),
            table_or_breakout_room: ActiveValue::Set(self.table_or_breakout_room),
            request_time: ActiveValue::Set(self.request_time),
            explanation: ActiveValue::Set(self.explanation),
            solved: ActiveValue::Set(self.solved),
        }
    }
}

impl Resource for HelpRequest {
    type Key = i64;
    type CreateParams = CreateHelpRequestParams;

    const NAME: &'static str = "HelpRequest";
    const PATH: &'static str = "/api/helprequests";
    const KEY_PARAM: &'static str = "id";
    const DELETABLE: bool = true;

    fn key(&self) -> Option<i64> {
        self.id
    }

    fn set_key(&mut self, key: i64) {
        self.id = Some(key);
    }

    fn from_params(params: CreateHelpRequestParams) -> Self {
        Self {
            id: None,
            requester_email: params.requester_email,
            team_id: params.team_id,
            table_or_breakout_room: params.table_or_breakout_room,
            request_time: params.request_time,
            explanation: params.explanation,
            solved: params.solved,
        }
    }

    fn apply_update(&mut self, incoming: Self) {
        self.requester_email = incoming.requester_email;
        self.team_id = incoming.team_id;
        self.table_or_breakout_room = incoming.table_or_breakout_room;
        self.request_time = incoming.request_time;
        self.explanation = incoming.explanation;
        self.solved = incoming.solved;
    }
}

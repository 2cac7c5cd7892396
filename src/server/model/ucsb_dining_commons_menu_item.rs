//! Dining commons menu items.

use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::server::model::resource::Resource;

/// Item served at a station of one of the campus dining commons.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonsMenuItem {
    #[serde(default)]
    pub id: Option<i64>,
    /// Short code of the dining commons, e.g. `ortega`
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Deserialize, IntoParams, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreateMenuItemParams {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl UcsbDiningCommonsMenuItem {
    pub fn from_entity(entity: entity::ucsb_dining_commons_menu_item::Model) -> Self {
        Self {
            id: Some(entity.id),
            dining_commons_code: entity.dining_commons_code,
            name: entity.name,
            station: entity.station,
        }
    }

    pub fn into_active_model(self) -> entity::ucsb_dining_commons_menu_item::ActiveModel {
        entity::ucsb_dining_commons_menu_item::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            dining_commons_code: ActiveValue::Set(self.dining_commons_code),
            name: ActiveValue::Set(self.name),
            station: ActiveValue::Set(self.station),
        }
    }
}

impl Resource for UcsbDiningCommonsMenuItem {
    type Key = i64;
    type CreateParams = CreateMenuItemParams;

    const NAME: &'static str = "UCSBDiningCommonsMenuItem";
    const PATH: &'static str = "/api/ucsbdiningcommonsmenuitems";
    const KEY_PARAM: &'static str = "id";
    const DELETABLE: bool = true;

    fn key(&self) -> Option<i64> {
        self.id
    }

    fn set_key(&mut self, key: i64) {
        self.id = Some(key);
    }

    fn from_params(params: CreateMenuItemParams) -> Self {
        Self {
            id: None,
            dining_commons_code: params.dining_commons_code,
            name: params.name,
            station: params.station,
        }
    }

    fn apply_update(&mut self, incoming: Self) {
        self.dining_commons_code = incoming.dining_commons_code;
        self.name = incoming.name;
        self.station = incoming.station;
    }
}

//! Student organizations, keyed by their organization code.

use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::server::model::resource::Resource;

/// Registered student organization.
///
/// The organization code is a natural key chosen by the caller at creation and
/// addresses the record from then on.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    /// Short organization code, e.g. `ZPR`. May be omitted from update bodies.
    #[serde(default)]
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

#[derive(Deserialize, IntoParams, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreateOrganizationParams {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl UcsbOrganization {
    pub fn from_entity(entity: entity::ucsb_organization::Model) -> Self {
        Self {
            org_code: entity.org_code,
            org_translation_short: entity.org_translation_short,
            org_translation: entity.org_translation,
            inactive: entity.inactive,
        }
    }

    pub fn into_active_model(self) -> entity::ucsb_organization::ActiveModel {
        entity::ucsb_organization::ActiveModel {
            org_code: ActiveValue::Set(self.org_code),
            org_translation_short: ActiveValue::Set(self.org_translation_short),
            org_translation: ActiveValue::Set(self.org_translation),
            inactive: ActiveValue::Set(self.inactive),
        }
    }
}

impl Resource for UcsbOrganization {
    type Key = String;
    type CreateParams = CreateOrganizationParams;

    const NAME: &'static str = "UCSBOrganization";
    const PATH: &'static str = "/api/ucsborganizations";
    const KEY_PARAM: &'static str = "orgCode";
    const DELETABLE: bool = false;

    fn key(&self) -> Option<String> {
        if self.org_code.is_empty() {
            None
        } else {
            Some(self.org_code.clone())
        }
    }

    fn set_key(&mut self, key: String) {
        self.org_code = key;
    }

    fn from_params(params: CreateOrganizationParams) -> Self {
        Self {
            org_code: params.org_code,
            org_translation_short: params.org_translation_short,
            org_translation: params.org_translation,
            inactive: params.inactive,
        }
    }

    fn apply_update(&mut self, incoming: Self) {
        self.org_translation_short = incoming.org_translation_short;
        self.org_translation = incoming.org_translation;
        self.inactive = incoming.inactive;
    }
}

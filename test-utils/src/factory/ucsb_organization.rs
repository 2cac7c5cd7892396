//! Organization factory for creating test student organization rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test organizations with customizable fields.
///
/// Organizations are keyed by their caller-supplied `org_code`, so the default
/// code carries the counter to stay unique across a test.
pub struct OrganizationFactory<'a> {
    db: &'a DatabaseConnection,
    org_code: String,
    org_translation_short: String,
    org_translation: String,
    inactive: bool,
}

impl<'a> OrganizationFactory<'a> {
    /// Creates a new OrganizationFactory with default values.
    ///
    /// Defaults:
    /// - org_code: `"ORG{n}"`
    /// - inactive: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            org_code: format!("ORG{}", id),
            org_translation_short: format!("Org {}", id),
            org_translation: format!("Organization {}", id),
            inactive: false,
        }
    }

    pub fn org_code(mut self, org_code: impl Into<String>) -> Self {
        self.org_code = org_code.into();
        self
    }

    pub fn inactive(mut self, inactive: bool) -> Self {
        self.inactive = inactive;
        self
    }

    /// Builds and inserts the organization row into the database.
    pub async fn build(self) -> Result<entity::ucsb_organization::Model, DbErr> {
        entity::ucsb_organization::ActiveModel {
            org_code: ActiveValue::Set(self.org_code),
            org_translation_short: ActiveValue::Set(self.org_translation_short),
            org_translation: ActiveValue::Set(self.org_translation),
            inactive: ActiveValue::Set(self.inactive),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an organization with default values.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::ucsb_organization::Model, DbErr> {
    OrganizationFactory::new(db).build().await
}

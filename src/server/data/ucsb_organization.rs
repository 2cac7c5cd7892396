//! Student organization data repository.
//!
//! Organizations are keyed by their caller-chosen code, so a save with an unseen code
//! inserts a new row under that code.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{data::store::Store, model::ucsb_organization::UcsbOrganization};

/// SeaORM-backed store for organizations.
pub struct OrganizationRepository {
    db: DatabaseConnection,
}

impl OrganizationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store<UcsbOrganization> for OrganizationRepository {
    async fn find_all(&self) -> Result<Vec<UcsbOrganization>, DbErr> {
        let entities = entity::prelude::UcsbOrganization::find()
            .all(&self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(UcsbOrganization::from_entity)
            .collect())
    }

    async fn find_by_id(&self, key: &String) -> Result<Option<UcsbOrganization>, DbErr> {
        let entity = entity::prelude::UcsbOrganization::find_by_id(key.clone())
            .one(&self.db)
            .await?;

        Ok(entity.map(UcsbOrganization::from_entity))
    }

    async fn save(&self, record: UcsbOrganization) -> Result<UcsbOrganization, DbErr> {
        let exists = entity::prelude::UcsbOrganization::find_by_id(record.org_code.clone())
            .one(&self.db)
            .await?
            .is_some();

        let active = record.into_active_model();
        let entity = if exists {
            active.update(&self.db).await?
        } else {
            active.insert(&self.db).await?
        };

        Ok(UcsbOrganization::from_entity(entity))
    }

    async fn delete(&self, record: UcsbOrganization) -> Result<(), DbErr> {
        entity::prelude::UcsbOrganization::delete_by_id(record.org_code)
            .exec(&self.db)
            .await?;

        Ok(())
    }
}

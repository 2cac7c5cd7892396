//! Help request data repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{data::store::Store, model::help_request::HelpRequest};

/// SeaORM-backed store for help requests.
pub struct HelpRequestRepository {
    db: DatabaseConnection,
}

impl HelpRequestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store<HelpRequest> for HelpRequestRepository {
    async fn find_all(&self) -> Result<Vec<HelpRequest>, DbErr> {
        let entities = entity::prelude::HelpRequest::find().all(&self.db).await?;

        Ok(entities.into_iter().map(HelpRequest::from_entity).collect())
    }

    async fn find_by_id(&self, key: &i64) -> Result<Option<HelpRequest>, DbErr> {
        let entity = entity::prelude::HelpRequest::find_by_id(*key)
            .one(&self.db)
            .await?;

        Ok(entity.map(HelpRequest::from_entity))
    }

    async fn save(&self, record: HelpRequest) -> Result<HelpRequest, DbErr> {
        let exists = match record.id {
            Some(id) => entity::prelude::HelpRequest::find_by_id(id)
                .one(&self.db)
                .await?
                .is_some(),
            None => false,
        };

        let active = record.into_active_model();
        let entity = if exists {
            active.update(&self.db).await?
        } else {
            active.insert(&self.db).await?
        };

        Ok(HelpRequest::from_entity(entity))
    }

    async fn delete(&self, record: HelpRequest) -> Result<(), DbErr> {
        if let Some(id) = record.id {
            entity::prelude::HelpRequest::delete_by_id(id)
                .exec(&self.db)
                .await?;
        }

        Ok(())
    }
}

//! Dining commons menu item data repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    data::store::Store, model::ucsb_dining_commons_menu_item::UcsbDiningCommonsMenuItem,
};

/// SeaORM-backed store for menu items.
pub struct MenuItemRepository {
    db: DatabaseConnection,
}

impl MenuItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store<UcsbDiningCommonsMenuItem> for MenuItemRepository {
    async fn find_all(&self) -> Result<Vec<UcsbDiningCommonsMenuItem>, DbErr> {
        let entities = entity::prelude::UcsbDiningCommonsMenuItem::find()
            .all(&self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(UcsbDiningCommonsMenuItem::from_entity)
            .collect())
    }

    async fn find_by_id(&self, key: &i64) -> Result<Option<UcsbDiningCommonsMenuItem>, DbErr> {
        let entity = entity::prelude::UcsbDiningCommonsMenuItem::find_by_id(*key)
            .one(&self.db)
            .await?;

        Ok(entity.map(UcsbDiningCommonsMenuItem::from_entity))
    }

    async fn save(
        &self,
        record: UcsbDiningCommonsMenuItem,
    ) -> Result<UcsbDiningCommonsMenuItem, DbErr> {
        let exists = match record.id {
            Some(id) => entity::prelude::UcsbDiningCommonsMenuItem::find_by_id(id)
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

        Ok(UcsbDiningCommonsMenuItem::from_entity(entity))
    }

    async fn delete(&self, record: UcsbDiningCommonsMenuItem) -> Result<(), DbErr> {
        if let Some(id) = record.id {
            entity::prelude::UcsbDiningCommonsMenuItem::delete_by_id(id)
                .exec(&self.db)
                .await?;
        }

        Ok(())
    }
}

//! Article data repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{data::store::Store, model::articles::Article};

/// SeaORM-backed store for articles.
pub struct ArticleRepository {
    db: DatabaseConnection,
}

impl ArticleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store<Article> for ArticleRepository {
    async fn find_all(&self) -> Result<Vec<Article>, DbErr> {
        let entities = entity::prelude::Articles::find().all(&self.db).await?;

        Ok(entities.into_iter().map(Article::from_entity).collect())
    }

    async fn find_by_id(&self, key: &i64) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::Articles::find_by_id(*key)
            .one(&self.db)
            .await?;

        Ok(entity.map(Article::from_entity))
    }

    async fn save(&self, record: Article) -> Result<Article, DbErr> {
        let exists = match record.id {
            Some(id) => entity::prelude::Articles::find_by_id(id)
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

        Ok(Article::from_entity(entity))
    }

    async fn delete(&self, record: Article) -> Result<(), DbErr> {
        if let Some(id) = record.id {
            entity::prelude::Articles::delete_by_id(id)
                .exec(&self.db)
                .await?;
        }

        Ok(())
    }
}

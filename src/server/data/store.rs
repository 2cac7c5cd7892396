//! Key-based persistence for resource records.

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::model::resource::Resource;

/// Persistence for one resource type.
///
/// Each method issues a single logical store call. `save` inserts a record without a
/// key (the store assigns one), updates the row when the key already exists and
/// inserts under the supplied key otherwise.
#[async_trait]
pub trait Store<R: Resource>: Send + Sync {
    /// Returns every stored record, in no particular order.
    async fn find_all(&self) -> Result<Vec<R>, DbErr>;

    async fn find_by_id(&self, key: &R::Key) -> Result<Option<R>, DbErr>;

    /// Persists `record` and returns it as stored, including any assigned key.
    async fn save(&self, record: R) -> Result<R, DbErr>;

    /// Removes `record` permanently.
    async fn delete(&self, record: R) -> Result<(), DbErr>;
}

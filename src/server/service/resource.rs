//! The uniform resource contract.
//!
//! `ResourceService` implements list, get, create, update and delete once for every
//! resource type. Each operation declares a role, checks the caller's grant before
//! touching the store, and then issues at most one lookup followed by at most one
//! mutation.

use crate::server::{
    data::store::Store,
    error::AppError,
    middleware::auth::{Grant, Role},
    model::resource::{Resource, ResourceKey},
};

/// Operations of the resource contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Role a caller must hold to run this operation.
    pub fn required_role(self) -> Role {
        match self {
            Operation::List | Operation::Get => Role::User,
            Operation::Create | Operation::Update | Operation::Delete => Role::Admin,
        }
    }
}

pub struct ResourceService<'a, R: Resource> {
    store: &'a dyn Store<R>,
}

impl<'a, R: Resource> ResourceService<'a, R> {
    pub fn new(store: &'a dyn Store<R>) -> Self {
        Self { store }
    }

    /// Returns every record of the resource.
    pub async fn list(&self, grant: Grant) -> Result<Vec<R>, AppError> {
        grant.check(Operation::List.required_role())?;

        let records = self.store.find_all().await?;
        tracing::debug!("Listed {} {} records", records.len(), R::NAME);

        Ok(records)
    }

    /// Returns the record stored under `key`.
    ///
    /// # Returns
    /// - `Ok(R)` - Record found
    /// - `Err(AppError::NotFound)` - No record under `key`
    /// - `Err(AppError::AuthErr)` - Grant does not cover this operation
    pub async fn get_by_key(&self, grant: Grant, key: &R::Key) -> Result<R, AppError> {
        grant.check(Operation::Get.required_role())?;

        self.find_existing(key).await
    }

    /// Creates a record from creation parameters and returns it as stored.
    ///
    /// Surrogate keys are assigned by the store; natural keys come from `params`
    /// and must be non-empty.
    pub async fn create(&self, grant: Grant, params: R::CreateParams) -> Result<R, AppError> {
        grant.check(Operation::Create.required_role())?;

        let record = R::from_params(params);
        if !R::Key::ASSIGNED_BY_STORE && record.key().is_none() {
            return Err(AppError::BadRequest(format!(
                "Request parameter '{}' must not be empty",
                R::KEY_PARAM
            )));
        }

        let record = self.store.save(record).await?;

        if let Some(key) = record.key() {
            tracing::info!("Created {} with id {}", R::NAME, key);
        }

        Ok(record)
    }

    /// Copies the allow-listed fields of `incoming` onto the record under `key`.
    ///
    /// The stored key is authoritative; any key carried by `incoming` is ignored.
    ///
    /// # Returns
    /// - `Ok(R)` - The updated record as stored
    /// - `Err(AppError::NotFound)` - No record under `key`; nothing is saved
    /// - `Err(AppError::AuthErr)` - Grant does not cover this operation
    pub async fn update(&self, grant: Grant, key: &R::Key, incoming: R) -> Result<R, AppError> {
        grant.check(Operation::Update.required_role())?;

        let mut record = self.find_existing(key).await?;
        record.apply_update(incoming);

        let record = self.store.save(record).await?;
        tracing::info!("Updated {} with id {}", R::NAME, key);

        Ok(record)
    }

    /// Deletes the record under `key` and returns a confirmation message.
    ///
    /// # Returns
    /// - `Ok(String)` - `"<Name> with id <key> deleted"`
    /// - `Err(AppError::NotFound)` - No record under `key`; nothing is deleted
    /// - `Err(AppError::AuthErr)` - Grant does not cover this operation
    pub async fn delete(&self, grant: Grant, key: &R::Key) -> Result<String, AppError> {
        grant.check(Operation::Delete.required_role())?;

        let record = self.find_existing(key).await?;
        self.store.delete(record).await?;

        let message = format!("{} with id {} deleted", R::NAME, key);
        tracing::info!("{}", message);

        Ok(message)
    }

    async fn find_existing(&self, key: &R::Key) -> Result<R, AppError> {
        self.store
            .find_by_id(key)
            .await?
            .ok_or_else(|| AppError::not_found(R::NAME, key))
    }
}

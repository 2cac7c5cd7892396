//! The contract shared by every table-backed resource.
//!
//! A resource is a record type with a fixed key type (numeric surrogate or natural
//! string key), a set of creation parameters supplied as query parameters, and an
//! allow-list of fields an update may overwrite. The generic controller, service and
//! stores are written once against this trait.

use std::fmt::{Debug, Display};

use serde::{de::DeserializeOwned, Serialize};
use utoipa::{IntoParams, PartialSchema, ToSchema};

/// Key type identifying one record of a resource.
pub trait ResourceKey: Clone + Debug + Display + Ord + PartialSchema + Send + Sync + 'static {
    /// Whether stores assign this key on insert. Otherwise the caller supplies it.
    const ASSIGNED_BY_STORE: bool;

    /// Parses a key from its raw request-parameter form.
    fn parse(raw: &str) -> Option<Self>;

    /// Key a store assigns to the `seq`-th inserted record, if the key is
    /// store-assigned at all.
    ///
    /// Natural keys are always supplied by the caller and return `None`.
    fn from_sequence(seq: i64) -> Option<Self>;

    /// Inverse of `from_sequence`: the sequence number this key occupies.
    fn as_sequence(&self) -> Option<i64>;
}

impl ResourceKey for i64 {
    const ASSIGNED_BY_STORE: bool = true;

    fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }

    fn from_sequence(seq: i64) -> Option<Self> {
        Some(seq)
    }

    fn as_sequence(&self) -> Option<i64> {
        Some(*self)
    }
}

impl ResourceKey for String {
    const ASSIGNED_BY_STORE: bool = false;

    fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(raw.to_string())
        }
    }

    fn from_sequence(_seq: i64) -> Option<Self> {
        None
    }

    fn as_sequence(&self) -> Option<i64> {
        None
    }
}

/// A table-backed record exposed through the uniform CRUD contract.
pub trait Resource:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + ToSchema + Send + Sync + 'static
{
    type Key: ResourceKey;

    /// Query parameters accepted by create.
    type CreateParams: DeserializeOwned + IntoParams + Send;

    /// Type name reported in not-found and deletion messages.
    const NAME: &'static str;

    /// Collection path, e.g. `/api/articles`.
    const PATH: &'static str;

    /// Query parameter carrying the key on get, update and delete.
    const KEY_PARAM: &'static str;

    /// Whether the delete operation is exposed.
    const DELETABLE: bool;

    /// The record's key; `None` until a store assigns a surrogate key.
    fn key(&self) -> Option<Self::Key>;

    fn set_key(&mut self, key: Self::Key);

    /// Builds an unsaved record from creation parameters.
    fn from_params(params: Self::CreateParams) -> Self;

    /// Copies the update allow-list from `incoming` onto `self`.
    ///
    /// The key is never part of the allow-list.
    fn apply_update(&mut self, incoming: Self);
}

//! In-memory `Store` fake recording every call it receives.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::{
    data::store::Store,
    model::resource::{Resource, ResourceKey},
};

/// One call observed by a `MemoryStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    FindAll,
    FindById(String),
    Save,
    Delete(String),
}

struct Inner<R: Resource> {
    records: BTreeMap<R::Key, R>,
    sequence: i64,
    calls: Vec<StoreCall>,
}

pub struct MemoryStore<R: Resource> {
    inner: Mutex<Inner<R>>,
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: BTreeMap::new(),
                sequence: 0,
                calls: Vec::new(),
            }),
        }
    }

    /// Seeds the store with keyed records without recording any calls.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().unwrap();
            for record in records {
                let key = record.key().expect("seeded records must carry a key");
                if let Some(seq) = key.as_sequence() {
                    inner.sequence = inner.sequence.max(seq);
                }
                inner.records.insert(key, record);
            }
        }
        store
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn count(&self, matches: impl Fn(&StoreCall) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }

    /// Current contents, in key order.
    pub fn snapshot(&self) -> Vec<R> {
        self.inner.lock().unwrap().records.values().cloned().collect()
    }
}

#[async_trait]
impl<R: Resource> Store<R> for MemoryStore<R> {
    async fn find_all(&self) -> Result<Vec<R>, DbErr> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(StoreCall::FindAll);
        Ok(inner.records.values().cloned().collect())
    }

    async fn find_by_id(&self, key: &R::Key) -> Result<Option<R>, DbErr> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(StoreCall::FindById(key.to_string()));
        Ok(inner.records.get(key).cloned())
    }

    async fn save(&self, mut record: R) -> Result<R, DbErr> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(StoreCall::Save);

        let key = match record.key() {
            Some(key) => key,
            None => {
                inner.sequence += 1;
                let key = R::Key::from_sequence(inner.sequence).ok_or_else(|| {
                    DbErr::Custom(format!("{} requires a caller-supplied key", R::NAME))
                })?;
                record.set_key(key.clone());
                key
            }
        };

        inner.records.insert(key, record.clone());
        Ok(record)
    }

    async fn delete(&self, record: R) -> Result<(), DbErr> {
        let mut inner = self.inner.lock().unwrap();
        let key = record.key();
        inner.calls.push(StoreCall::Delete(
            key.as_ref().map(ToString::to_string).unwrap_or_default(),
        ));
        if let Some(key) = key {
            inner.records.remove(&key);
        }
        Ok(())
    }
}

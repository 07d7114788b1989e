//! # Record Repository
//!
//! Thin typed CRUD façade per collection, plus the two query helpers built
//! on the same store handle: [`ExistenceChecker`] and
//! [`SequentialIndexAssigner`]. This module is the only code that touches
//! the [`DocumentStore`] port.

use crate::domain::entities::{Entity, EntityKind};
use crate::domain::errors::StoreError;
use crate::domain::ids::RecordId;
use crate::ports::outbound::{Document, DocumentStore};
use std::marker::PhantomData;
use std::sync::Arc;

fn encode<T: Entity>(record: &T) -> Result<Document, StoreError> {
    serde_json::to_value(record).map_err(|e| StoreError::Decode(e.to_string()))
}

fn decode<T: Entity>(doc: Document) -> Result<T, StoreError> {
    serde_json::from_value(doc).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Per-kind CRUD façade. No batching, no transactions.
pub struct Repository<T: Entity> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Repository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        let docs = self.store.find_all(T::KIND).await?;
        docs.into_iter().map(decode).collect()
    }

    pub async fn find_by_id(&self, id: RecordId) -> Result<Option<T>, StoreError> {
        match self.store.find_one(T::KIND, id).await? {
            Some(doc) => Ok(Some(decode(doc)?)),
            None => Ok(None),
        }
    }

    /// Persist a new record. The caller stamps identifier and timestamps
    /// before this point.
    pub async fn insert(&self, record: &T) -> Result<(), StoreError> {
        self.store
            .insert_one(T::KIND, record.id(), encode(record)?)
            .await
    }

    /// Replace the stored document wholesale. Returns false when no record
    /// with this identifier exists.
    pub async fn replace(&self, record: &T) -> Result<bool, StoreError> {
        let matched = self
            .store
            .replace_one(T::KIND, record.id(), encode(record)?)
            .await?;
        Ok(matched > 0)
    }

    /// Delete by identifier. Returns false when nothing was removed, which
    /// callers map to a not-found outcome; repeating the call is safe.
    pub async fn delete_by_id(&self, id: RecordId) -> Result<bool, StoreError> {
        let deleted = self.store.delete_one(T::KIND, id).await?;
        Ok(deleted > 0)
    }
}

/// Answers "does a record with this id exist in that collection".
///
/// One checker parameterized by kind replaces the per-entity-pair lookup
/// helpers the four record kinds would otherwise each reimplement. Pure
/// query; fails only when the store itself is unavailable.
pub struct ExistenceChecker {
    store: Arc<dyn DocumentStore>,
}

impl ExistenceChecker {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn exists(&self, kind: EntityKind, id: RecordId) -> Result<bool, StoreError> {
        self.store.exists(kind, id).await
    }
}

/// Assigns the next value of a per-collection sequential index.
///
/// Backed by the store's atomic sequence rather than a count-then-write,
/// so two concurrent creations can never observe the same index. The
/// sequence never reuses values after deletes, which keeps assigned
/// indices unique for the lifetime of the collection.
pub struct SequentialIndexAssigner {
    store: Arc<dyn DocumentStore>,
}

impl SequentialIndexAssigner {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn next_index(&self, kind: EntityKind) -> Result<u64, StoreError> {
        self.store.next_sequence(kind).await
    }
}

//! # Outbound Ports
//!
//! Dependencies the registry requires from its host: a document store and a
//! clock. The store port is collection-scoped and document-level; the crate
//! ships an in-memory adapter, production drivers are host-provided
//! implementations of [`DocumentStore`].

use crate::domain::entities::EntityKind;
use crate::domain::errors::StoreError;
use crate::domain::ids::RecordId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap};

/// A stored document, as loose JSON.
pub type Document = serde_json::Value;

/// Abstract interface for the backing document store.
///
/// One logical collection per [`EntityKind`]. Every call may block on
/// network I/O in a real driver; no timeout is propagated from the inbound
/// request. Individual operations are atomic; there are no multi-document
/// transactions.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Full-collection scan.
    async fn find_all(&self, kind: EntityKind) -> Result<Vec<Document>, StoreError>;

    /// Point lookup by identifier.
    async fn find_one(&self, kind: EntityKind, id: RecordId)
        -> Result<Option<Document>, StoreError>;

    /// Insert a new document under the given identifier.
    async fn insert_one(
        &self,
        kind: EntityKind,
        id: RecordId,
        doc: Document,
    ) -> Result<(), StoreError>;

    /// Replace the document stored under `id`. Returns the matched count
    /// (0 when no such document exists).
    async fn replace_one(
        &self,
        kind: EntityKind,
        id: RecordId,
        doc: Document,
    ) -> Result<u64, StoreError>;

    /// Delete by identifier. Returns the deleted count.
    async fn delete_one(&self, kind: EntityKind, id: RecordId) -> Result<u64, StoreError>;

    /// Number of documents currently in the collection.
    async fn count(&self, kind: EntityKind) -> Result<u64, StoreError>;

    /// Whether a document with this identifier exists.
    async fn exists(&self, kind: EntityKind, id: RecordId) -> Result<bool, StoreError>;

    /// Atomically advance and return the per-collection sequence.
    ///
    /// Starts at 1 and never repeats a value, including across deletes.
    /// Real drivers back this with a store-native counter (for example an
    /// `$inc` on a counters document) so uniqueness holds under concurrent
    /// writers.
    async fn next_sequence(&self, kind: EntityKind) -> Result<u64, StoreError>;
}

/// Abstract clock, for testability.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System clock.
#[derive(Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// In-memory document store.
///
/// Backs unit and integration tests, and the `mem://` runtime scheme.
/// Collections are `BTreeMap`s keyed by id so scans come back in id order;
/// sequences are plain monotonic counters guarded by a mutex.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<EntityKind, BTreeMap<RecordId, Document>>>,
    sequences: Mutex<HashMap<EntityKind, u64>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_all(&self, kind: EntityKind) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read();
        Ok(collections
            .get(&kind)
            .map(|c| c.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        kind: EntityKind,
        id: RecordId,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read();
        Ok(collections.get(&kind).and_then(|c| c.get(&id)).cloned())
    }

    async fn insert_one(
        &self,
        kind: EntityKind,
        id: RecordId,
        doc: Document,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write();
        collections.entry(kind).or_default().insert(id, doc);
        Ok(())
    }

    async fn replace_one(
        &self,
        kind: EntityKind,
        id: RecordId,
        doc: Document,
    ) -> Result<u64, StoreError> {
        let mut collections = self.collections.write();
        let collection = collections.entry(kind).or_default();
        match collection.get_mut(&id) {
            Some(slot) => {
                *slot = doc;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, kind: EntityKind, id: RecordId) -> Result<u64, StoreError> {
        let mut collections = self.collections.write();
        let removed = collections
            .get_mut(&kind)
            .map(|c| c.remove(&id).is_some())
            .unwrap_or(false);
        Ok(u64::from(removed))
    }

    async fn count(&self, kind: EntityKind) -> Result<u64, StoreError> {
        let collections = self.collections.read();
        Ok(collections.get(&kind).map(|c| c.len() as u64).unwrap_or(0))
    }

    async fn exists(&self, kind: EntityKind, id: RecordId) -> Result<bool, StoreError> {
        let collections = self.collections.read();
        Ok(collections
            .get(&kind)
            .map(|c| c.contains_key(&id))
            .unwrap_or(false))
    }

    async fn next_sequence(&self, kind: EntityKind) -> Result<u64, StoreError> {
        let mut sequences = self.sequences.lock();
        let seq = sequences.entry(kind).or_insert(0);
        *seq += 1;
        Ok(*seq)
    }
}

//! # CRM Registry
//!
//! Record-management backend for four related entity kinds — Account,
//! Organization, Contact, Reaction-Icon — over a document store with no
//! native foreign-key enforcement. The interesting logic is cross-entity
//! referential validation and partial-update merging; everything around it
//! is thin plumbing.
//!
//! # Architecture
//!
//! ```text
//! HTTP (axum)        src/http/       envelope + per-kind handlers
//!      │
//! RecordService      src/service/    validation → stamp → persist
//!      │
//! Repository<T>      src/repository  typed CRUD façade per collection
//!      │
//! DocumentStore      src/ports/      outbound port + in-memory adapter
//! ```
//!
//! The document store is an outbound port: the crate bundles an in-memory
//! adapter (tests and the `mem://` scheme); production drivers are
//! host-provided implementations of [`ports::DocumentStore`].
//!
//! # Usage
//!
//! ```ignore
//! use crm_registry::{build_router, InMemoryDocumentStore, RecordService};
//! use std::sync::Arc;
//!
//! let store = Arc::new(InMemoryDocumentStore::new());
//! let service = Arc::new(RecordService::new(store));
//! let app = build_router(service);
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod http;
pub mod ports;
pub mod repository;
pub mod service;

// Re-exports for the public API
pub use domain::config::AppConfig;
pub use domain::entities::{Account, Contact, Entity, EntityKind, Organization, ReactionIcon};
pub use domain::errors::{ConfigError, ServiceError, StoreError, ValidationError};
pub use domain::ids::{IdentifierAllocator, RecordId, SystemIdAllocator};
pub use domain::merge::MergePatch;
pub use domain::validation::{OptionalRefDefault, ReferentialValidator};
pub use http::build_router;
pub use ports::{DocumentStore, InMemoryDocumentStore, SystemTimeSource, TimeSource};
pub use repository::{ExistenceChecker, Repository, SequentialIndexAssigner};
pub use service::RecordService;

use std::sync::Arc;

/// Select a store adapter from the configured URI scheme.
///
/// `mem://` yields the bundled in-memory adapter; any other scheme is a
/// configuration error naming the scheme, since real drivers are
/// host-provided.
pub fn open_store(uri: &str) -> Result<Arc<dyn DocumentStore>, ConfigError> {
    match uri.split_once("://") {
        Some(("mem", _)) => Ok(Arc::new(InMemoryDocumentStore::new())),
        Some((scheme, _)) => Err(ConfigError::UnsupportedStoreScheme(scheme.to_string())),
        None => Err(ConfigError::UnsupportedStoreScheme(uri.to_string())),
    }
}

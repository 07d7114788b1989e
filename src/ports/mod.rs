//! Port traits and bundled adapters.

pub mod outbound;

pub use outbound::{Document, DocumentStore, InMemoryDocumentStore, SystemTimeSource, TimeSource};

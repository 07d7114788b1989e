//! # Domain Errors
//!
//! Three-tier taxonomy: validation failures (client input, 400), not-found
//! outcomes (404), and store failures (500). Every error is terminal for the
//! request it occurred in; nothing is retried internally and a failed write
//! persists nothing.

use crate::domain::entities::EntityKind;
use crate::domain::ids::IdParseError;
use thiserror::Error;

/// A write or lookup was rejected because of the client's input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A mandatory reference field was left at its zero value.
    #[error("{field} is required")]
    RequiredFieldMissing { field: &'static str },

    /// A reference was supplied but its target does not exist.
    #[error("{field} does not reference an existing {kind}")]
    DanglingReference {
        field: &'static str,
        kind: EntityKind,
    },

    /// A bounded enum field fell outside its range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// An identifier string was not 24 hex characters.
    #[error("Invalid ID format")]
    MalformedIdentifier,

    /// The request body failed to deserialize.
    #[error("{0}")]
    MalformedPayload(String),
}

impl ValidationError {
    pub fn required(field: &'static str) -> Self {
        ValidationError::RequiredFieldMissing { field }
    }

    pub fn dangling(field: &'static str, kind: EntityKind) -> Self {
        ValidationError::DanglingReference { field, kind }
    }

    pub fn out_of_range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}

impl From<IdParseError> for ValidationError {
    fn from(_: IdParseError) -> Self {
        ValidationError::MalformedIdentifier
    }
}

/// Failure of the underlying document store.
///
/// The message is surfaced verbatim to the caller. Acceptable for an
/// internal tool; redaction is a known hardening item.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A stored document failed to decode into its entity shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Any other driver-level failure.
    #[error("store error: {0}")]
    Driver(String),
}

/// Top-level error for every service operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed record does not exist.
    #[error("{} not found", .0.label())]
    NotFound(EntityKind),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Configuration problems, fatal at process start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("STORE_URI not set in environment")]
    MissingStoreUri,

    #[error("invalid bind address: {0}")]
    InvalidBindAddr(String),

    #[error("unsupported store scheme: {0}")]
    UnsupportedStoreScheme(String),
}

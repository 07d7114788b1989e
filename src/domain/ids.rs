//! # Record Identifiers
//!
//! Opaque, sortable 12-byte identifiers rendered as 24-character lowercase
//! hex. Layout: 4-byte big-endian unix seconds, 5-byte per-process random
//! value, 3-byte monotonically increasing counter. Byte-wise ordering
//! therefore sorts ids by allocation time.
//!
//! The all-zero id is reserved as the "not supplied" sentinel: clients omit
//! an optional reference by leaving the field out (or empty), which
//! deserializes to [`RecordId::ZERO`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};

/// A 12-byte record identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId([u8; 12]);

/// Raised when an identifier string is not 24 hex characters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid ID format")]
pub struct IdParseError;

impl RecordId {
    /// The zero id, meaning "no reference supplied".
    pub const ZERO: RecordId = RecordId([0; 12]);

    /// Build an id from raw bytes.
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        RecordId(bytes)
    }

    /// Raw bytes of the id.
    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Whether this is the "not supplied" sentinel.
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 12]
    }

    /// Parse a 24-character hex string.
    pub fn parse_str(s: &str) -> Result<Self, IdParseError> {
        if s.len() != 24 {
            return Err(IdParseError);
        }
        let raw = hex::decode(s).map_err(|_| IdParseError)?;
        let mut bytes = [0u8; 12];
        bytes.copy_from_slice(&raw);
        Ok(RecordId(bytes))
    }

    /// Render as 24-character lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.to_hex())
    }
}

impl FromStr for RecordId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::ZERO
    }
}

impl Serialize for RecordId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(RecordId::ZERO);
        }
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Issues globally unique identifiers for new records.
///
/// A trait so tests can substitute a deterministic allocator.
pub trait IdentifierAllocator: Send + Sync {
    /// Mint a fresh, previously-unused identifier.
    fn mint(&self) -> RecordId;
}

/// Production allocator: timestamp + per-process random + counter.
pub struct SystemIdAllocator {
    node: [u8; 5],
    counter: AtomicU32,
}

impl SystemIdAllocator {
    pub fn new() -> Self {
        Self {
            node: rand::random(),
            counter: AtomicU32::new(rand::random()),
        }
    }
}

impl Default for SystemIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierAllocator for SystemIdAllocator {
    fn mint(&self) -> RecordId {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&self.node);
        bytes[9..].copy_from_slice(&seq.to_be_bytes()[1..]);
        RecordId(bytes)
    }
}

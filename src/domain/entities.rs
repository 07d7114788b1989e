//! # Domain Entities
//!
//! The four record kinds managed by the registry, plus the [`Entity`] trait
//! that ties each kind to its collection.
//!
//! Incoming payloads and stored documents share these shapes. Every field
//! carries a serde default so a partial payload parses cleanly; a zero value
//! (empty string, zero id, zero index) means "not supplied". Identifiers and
//! created timestamps are stamped by the service and never taken from the
//! client.
//!
//! Account keeps its legacy camelCase field names (`colorCode`,
//! `createdDate`, `updatedDate`); the other collections are snake_case.

use crate::domain::ids::RecordId;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

/// The four entity kinds, each backed by one document collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Account,
    Organization,
    Contact,
    ReactionIcon,
}

impl EntityKind {
    /// Collection name in the document store.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Account => "accounts",
            EntityKind::Organization => "organizations",
            EntityKind::Contact => "contacts",
            EntityKind::ReactionIcon => "reaction_icons",
        }
    }

    /// Human-readable label used in response messages.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Account => "Account",
            EntityKind::Organization => "Organization",
            EntityKind::Contact => "Contact",
            EntityKind::ReactionIcon => "Reaction icon",
        }
    }

    /// Singular lowercase noun for error messages.
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::Account => "account",
            EntityKind::Organization => "organization",
            EntityKind::Contact => "contact",
            EntityKind::ReactionIcon => "reaction icon",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// A record kind storable through [`crate::repository::Repository`].
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    const KIND: EntityKind;

    fn id(&self) -> RecordId;
}

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// An account owning organizations and contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "colorCode")]
    pub color_code: String,
    #[serde(rename = "createdDate")]
    pub created_date: DateTime<Utc>,
    #[serde(rename = "updatedDate")]
    pub updated_date: DateTime<Utc>,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            id: RecordId::ZERO,
            name: String::new(),
            color_code: String::new(),
            created_date: epoch(),
            updated_date: epoch(),
        }
    }
}

impl Entity for Account {
    const KIND: EntityKind = EntityKind::Account;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// An organization owned by an account, optionally linked to a reaction
/// icon and a primary contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: RecordId,
    pub name: String,
    pub tagline: String,
    pub website: String,
    pub status: i32,
    pub auto_followup: bool,
    pub last_viewed_date: Option<DateTime<Utc>>,
    pub last_followup_date: Option<DateTime<Utc>>,
    pub next_followup_date: Option<DateTime<Utc>>,
    pub created_date: DateTime<Utc>,
    pub owner_id: RecordId,
    pub icon_id: RecordId,
    pub primary_contact_id: RecordId,
}

impl Default for Organization {
    fn default() -> Self {
        Self {
            id: RecordId::ZERO,
            name: String::new(),
            tagline: String::new(),
            website: String::new(),
            status: 0,
            auto_followup: false,
            last_viewed_date: None,
            last_followup_date: None,
            next_followup_date: None,
            created_date: epoch(),
            owner_id: RecordId::ZERO,
            icon_id: RecordId::ZERO,
            primary_contact_id: RecordId::ZERO,
        }
    }
}

impl Entity for Organization {
    const KIND: EntityKind = EntityKind::Organization;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// A person attached to an organization and an owning account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: RecordId,
    pub job_title: String,
    pub description: String,
    pub name: String,
    pub cell_phone: String,
    pub work_phone: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub organization_id: RecordId,
    pub person_index: i64,
    pub owner_id: RecordId,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            id: RecordId::ZERO,
            job_title: String::new(),
            description: String::new(),
            name: String::new(),
            cell_phone: String::new(),
            work_phone: String::new(),
            email: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            created_date: epoch(),
            updated_date: epoch(),
            organization_id: RecordId::ZERO,
            person_index: 0,
            owner_id: RecordId::ZERO,
        }
    }
}

impl Entity for Contact {
    const KIND: EntityKind = EntityKind::Contact;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// A reaction icon with a sequential per-collection index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionIcon {
    pub id: RecordId,
    pub glyph: String,
    pub display_name: String,
    pub icon_index: u64,
    pub created_date: DateTime<Utc>,
}

impl Default for ReactionIcon {
    fn default() -> Self {
        Self {
            id: RecordId::ZERO,
            glyph: String::new(),
            display_name: String::new(),
            icon_index: 0,
            created_date: epoch(),
        }
    }
}

impl Entity for ReactionIcon {
    const KIND: EntityKind = EntityKind::ReactionIcon;

    fn id(&self) -> RecordId {
        self.id
    }
}

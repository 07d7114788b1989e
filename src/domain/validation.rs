//! # Referential Validation
//!
//! Cross-collection admission rules. The store has no native foreign keys,
//! so every write that carries a reference is checked here against the
//! current contents of the other collections before anything is persisted.

use crate::domain::entities::{Contact, EntityKind, Organization};
use crate::domain::errors::{ServiceError, ValidationError};
use crate::domain::ids::{IdentifierAllocator, RecordId};
use crate::repository::ExistenceChecker;

/// What to write into an omitted optional reference.
///
/// The legacy create path mints a fresh identifier that points at no stored
/// record, so "no relation" and "relation to a deleted record" are
/// indistinguishable in stored data; the legacy update path writes the zero
/// id instead. Both behaviors are kept, selected per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalRefDefault {
    /// Mint a fresh, dangling placeholder identifier (create path).
    FreshId,
    /// Write the zero sentinel (update path).
    ZeroId,
}

/// Validates required and optional references and bounded enum fields,
/// one routine per entity kind that carries references.
pub struct ReferentialValidator<'a> {
    checker: &'a ExistenceChecker,
    ids: &'a dyn IdentifierAllocator,
}

impl<'a> ReferentialValidator<'a> {
    pub fn new(checker: &'a ExistenceChecker, ids: &'a dyn IdentifierAllocator) -> Self {
        Self { checker, ids }
    }

    /// Admission rules for an organization payload.
    ///
    /// - `owner_id` is mandatory and must reference an existing account.
    /// - `icon_id` and `primary_contact_id`, when non-zero, must reference
    ///   existing records; when zero they are defaulted per `policy`.
    /// - `status` must lie in [0, 9] inclusive.
    ///
    /// On success the payload has any defaulted references filled in.
    pub async fn validate_organization(
        &self,
        org: &mut Organization,
        policy: OptionalRefDefault,
    ) -> Result<(), ServiceError> {
        if org.owner_id.is_zero() {
            return Err(ValidationError::required("owner_id").into());
        }
        if !self.checker.exists(EntityKind::Account, org.owner_id).await? {
            return Err(ValidationError::dangling("owner_id", EntityKind::Account).into());
        }

        org.icon_id = self
            .default_or_check(org.icon_id, "icon_id", EntityKind::ReactionIcon, policy)
            .await?;
        org.primary_contact_id = self
            .default_or_check(
                org.primary_contact_id,
                "primary_contact_id",
                EntityKind::Contact,
                policy,
            )
            .await?;

        if !(0..=9).contains(&org.status) {
            return Err(
                ValidationError::out_of_range("status", i64::from(org.status), 0, 9).into(),
            );
        }
        Ok(())
    }

    /// Admission rules for a contact payload: both references mandatory.
    pub async fn validate_contact(&self, contact: &Contact) -> Result<(), ServiceError> {
        if contact.owner_id.is_zero() {
            return Err(ValidationError::required("owner_id").into());
        }
        if !self
            .checker
            .exists(EntityKind::Account, contact.owner_id)
            .await?
        {
            return Err(ValidationError::dangling("owner_id", EntityKind::Account).into());
        }

        if contact.organization_id.is_zero() {
            return Err(ValidationError::required("organization_id").into());
        }
        if !self
            .checker
            .exists(EntityKind::Organization, contact.organization_id)
            .await?
        {
            return Err(
                ValidationError::dangling("organization_id", EntityKind::Organization).into(),
            );
        }
        Ok(())
    }

    async fn default_or_check(
        &self,
        id: RecordId,
        field: &'static str,
        kind: EntityKind,
        policy: OptionalRefDefault,
    ) -> Result<RecordId, ServiceError> {
        if id.is_zero() {
            return Ok(match policy {
                OptionalRefDefault::FreshId => self.ids.mint(),
                OptionalRefDefault::ZeroId => RecordId::ZERO,
            });
        }
        if !self.checker.exists(kind, id).await? {
            return Err(ValidationError::dangling(field, kind).into());
        }
        Ok(id)
    }
}

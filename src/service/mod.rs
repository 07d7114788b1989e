//! # Record Service
//!
//! Application service implementing the CRUD operations for the four record
//! kinds. Control flow for a write: validate references against the current
//! state of the other collections, stamp identifier and timestamps, persist
//! through the typed repository, return the stored shape (or a typed
//! failure). Each request is handled independently; the only shared
//! resource is the store handle.

use crate::domain::entities::{Account, Contact, Entity, EntityKind, Organization, ReactionIcon};
use crate::domain::errors::ServiceError;
use crate::domain::ids::{IdentifierAllocator, RecordId, SystemIdAllocator};
use crate::domain::merge::MergePatch;
use crate::domain::validation::{OptionalRefDefault, ReferentialValidator};
use crate::ports::outbound::{DocumentStore, SystemTimeSource, TimeSource};
use crate::repository::{ExistenceChecker, Repository, SequentialIndexAssigner};
use std::sync::Arc;
use tracing::info;


/// The registry's application service.
///
/// Holds the store handle and the injected allocator/clock; constructed at
/// process start and shared across request handlers.
pub struct RecordService {
    store: Arc<dyn DocumentStore>,
    ids: Arc<dyn IdentifierAllocator>,
    clock: Arc<dyn TimeSource>,
}

impl RecordService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_deps(
            store,
            Arc::new(SystemIdAllocator::new()),
            Arc::new(SystemTimeSource),
        )
    }

    /// Constructor with explicit allocator and clock, for tests.
    pub fn with_deps(
        store: Arc<dyn DocumentStore>,
        ids: Arc<dyn IdentifierAllocator>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self { store, ids, clock }
    }

    fn repo<T: Entity>(&self) -> Repository<T> {
        Repository::new(Arc::clone(&self.store))
    }

    fn checker(&self) -> ExistenceChecker {
        ExistenceChecker::new(Arc::clone(&self.store))
    }

    fn index_assigner(&self) -> SequentialIndexAssigner {
        SequentialIndexAssigner::new(Arc::clone(&self.store))
    }

    async fn get<T: Entity>(&self, id: RecordId) -> Result<T, ServiceError> {
        self.repo::<T>()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(T::KIND))
    }

    async fn delete<T: Entity>(&self, id: RecordId) -> Result<(), ServiceError> {
        if !self.repo::<T>().delete_by_id(id).await? {
            return Err(ServiceError::NotFound(T::KIND));
        }
        info!(kind = %T::KIND, %id, "record deleted");
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Accounts (merge-update discipline)
    // ---------------------------------------------------------------------

    pub async fn list_accounts(&self) -> Result<Vec<Account>, ServiceError> {
        Ok(self.repo::<Account>().find_all().await?)
    }

    pub async fn get_account(&self, id: RecordId) -> Result<Account, ServiceError> {
        self.get(id).await
    }

    pub async fn create_account(&self, mut payload: Account) -> Result<Account, ServiceError> {
        let now = self.clock.now();
        payload.id = self.ids.mint();
        payload.created_date = now;
        payload.updated_date = now;
        self.repo::<Account>().insert(&payload).await?;
        info!(id = %payload.id, "account created");
        Ok(payload)
    }

    /// Merge-update: only non-empty patch fields overwrite stored values;
    /// the updated timestamp always advances.
    pub async fn update_account(
        &self,
        id: RecordId,
        patch: Account,
    ) -> Result<Account, ServiceError> {
        let mut stored: Account = self.get(id).await?;
        stored.merge_patch(patch, self.clock.now());
        if !self.repo::<Account>().replace(&stored).await? {
            return Err(ServiceError::NotFound(EntityKind::Account));
        }
        Ok(stored)
    }

    pub async fn delete_account(&self, id: RecordId) -> Result<(), ServiceError> {
        self.delete::<Account>(id).await
    }

    // ---------------------------------------------------------------------
    // Organizations (full-validate-and-replace discipline)
    // ---------------------------------------------------------------------

    pub async fn list_organizations(&self) -> Result<Vec<Organization>, ServiceError> {
        Ok(self.repo::<Organization>().find_all().await?)
    }

    pub async fn get_organization(&self, id: RecordId) -> Result<Organization, ServiceError> {
        self.get(id).await
    }

    pub async fn create_organization(
        &self,
        mut payload: Organization,
    ) -> Result<Organization, ServiceError> {
        let checker = self.checker();
        ReferentialValidator::new(&checker, self.ids.as_ref())
            .validate_organization(&mut payload, OptionalRefDefault::FreshId)
            .await?;

        payload.id = self.ids.mint();
        payload.created_date = self.clock.now();
        self.repo::<Organization>().insert(&payload).await?;
        info!(id = %payload.id, owner = %payload.owner_id, "organization created");
        Ok(payload)
    }

    /// Full-replace update: every reference check re-runs, then the stored
    /// document is overwritten wholesale. Identifier and created timestamp
    /// are carried over from the stored record.
    pub async fn update_organization(
        &self,
        id: RecordId,
        mut payload: Organization,
    ) -> Result<Organization, ServiceError> {
        let stored: Organization = self.get(id).await?;

        let checker = self.checker();
        ReferentialValidator::new(&checker, self.ids.as_ref())
            .validate_organization(&mut payload, OptionalRefDefault::ZeroId)
            .await?;

        payload.id = stored.id;
        payload.created_date = stored.created_date;
        if !self.repo::<Organization>().replace(&payload).await? {
            return Err(ServiceError::NotFound(EntityKind::Organization));
        }
        Ok(payload)
    }

    pub async fn delete_organization(&self, id: RecordId) -> Result<(), ServiceError> {
        self.delete::<Organization>(id).await
    }

    // ---------------------------------------------------------------------
    // Contacts (full-replace discipline)
    // ---------------------------------------------------------------------

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.repo::<Contact>().find_all().await?)
    }

    pub async fn get_contact(&self, id: RecordId) -> Result<Contact, ServiceError> {
        self.get(id).await
    }

    pub async fn create_contact(&self, mut payload: Contact) -> Result<Contact, ServiceError> {
        let checker = self.checker();
        ReferentialValidator::new(&checker, self.ids.as_ref())
            .validate_contact(&payload)
            .await?;

        let now = self.clock.now();
        payload.id = self.ids.mint();
        payload.created_date = now;
        payload.updated_date = now;
        self.repo::<Contact>().insert(&payload).await?;
        info!(id = %payload.id, organization = %payload.organization_id, "contact created");
        Ok(payload)
    }

    pub async fn update_contact(
        &self,
        id: RecordId,
        mut payload: Contact,
    ) -> Result<Contact, ServiceError> {
        let stored: Contact = self.get(id).await?;

        let checker = self.checker();
        ReferentialValidator::new(&checker, self.ids.as_ref())
            .validate_contact(&payload)
            .await?;

        payload.id = stored.id;
        payload.created_date = stored.created_date;
        payload.updated_date = self.clock.now();
        if !self.repo::<Contact>().replace(&payload).await? {
            return Err(ServiceError::NotFound(EntityKind::Contact));
        }
        Ok(payload)
    }

    pub async fn delete_contact(&self, id: RecordId) -> Result<(), ServiceError> {
        self.delete::<Contact>(id).await
    }

    // ---------------------------------------------------------------------
    // Reaction icons (merge-update discipline, sequential index)
    // ---------------------------------------------------------------------

    pub async fn list_reaction_icons(&self) -> Result<Vec<ReactionIcon>, ServiceError> {
        Ok(self.repo::<ReactionIcon>().find_all().await?)
    }

    pub async fn get_reaction_icon(&self, id: RecordId) -> Result<ReactionIcon, ServiceError> {
        self.get(id).await
    }

    pub async fn create_reaction_icon(
        &self,
        mut payload: ReactionIcon,
    ) -> Result<ReactionIcon, ServiceError> {
        payload.id = self.ids.mint();
        payload.created_date = self.clock.now();
        payload.icon_index = self
            .index_assigner()
            .next_index(EntityKind::ReactionIcon)
            .await?;
        self.repo::<ReactionIcon>().insert(&payload).await?;
        info!(id = %payload.id, index = payload.icon_index, "reaction icon created");
        Ok(payload)
    }

    pub async fn update_reaction_icon(
        &self,
        id: RecordId,
        patch: ReactionIcon,
    ) -> Result<ReactionIcon, ServiceError> {
        let mut stored: ReactionIcon = self.get(id).await?;
        stored.merge_patch(patch, self.clock.now());
        if !self.repo::<ReactionIcon>().replace(&stored).await? {
            return Err(ServiceError::NotFound(EntityKind::ReactionIcon));
        }
        Ok(stored)
    }

    pub async fn delete_reaction_icon(&self, id: RecordId) -> Result<(), ServiceError> {
        self.delete::<ReactionIcon>(id).await
    }
}

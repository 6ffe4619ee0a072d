//! # Driving Ports (API - Inbound)
//!
//! The public surface of the book store. Every mutating method receives the
//! authenticated `caller`; nothing reads identity from anywhere else.

use crate::domain::entities::BookVersion;
use crate::errors::BookStoreError;
use shared_types::{Address, VersionId, U256};

/// Issuance ledger API.
pub trait BookStoreApi {
    // === Configuration ===

    /// Deployer of the store. Only it may rewire the store front.
    fn owner(&self) -> Address;

    /// Store front currently allowed to call `transfer_from_author`.
    fn store_front(&self) -> Option<Address>;

    /// Set the store front. Owner only; may be called again to rewire.
    fn set_store_front(&mut self, store_front: Address, caller: Address)
        -> Result<(), BookStoreError>;

    // === Publishing ===

    /// Publish a new version and mint `quantity` copies to `caller`.
    ///
    /// # Returns
    ///
    /// * `VersionId` - The freshly assigned, sequential version id
    fn publish(
        &mut self,
        quantity: u64,
        price: U256,
        currency: Address,
        caller: Address,
    ) -> Result<VersionId, BookStoreError>;

    /// Full metadata of a published version.
    fn book_version(&self, version_id: VersionId) -> Result<&BookVersion, BookStoreError>;

    /// Price per copy of a version.
    fn book_version_price(&self, version_id: VersionId) -> Result<U256, BookStoreError> {
        self.book_version(version_id).map(|v| v.price)
    }

    /// Payment token of a version.
    fn book_version_currency(&self, version_id: VersionId) -> Result<Address, BookStoreError> {
        self.book_version(version_id).map(|v| v.currency)
    }

    /// Author of a version.
    fn book_version_author(&self, version_id: VersionId) -> Result<Address, BookStoreError> {
        self.book_version(version_id).map(|v| v.author)
    }

    /// Most recently published version, if any.
    fn latest_version_id(&self) -> Option<VersionId>;

    /// Metadata URI of a version.
    fn uri(&self, version_id: VersionId) -> Result<String, BookStoreError>;

    // === Balances ===

    /// Copies held. Zero for unknown holders and versions.
    fn balance_of(&self, holder: Address, version_id: VersionId) -> u64;

    /// Pairwise `balance_of` over two equally long slices.
    fn balance_of_batch(
        &self,
        holders: &[Address],
        version_ids: &[VersionId],
    ) -> Result<Vec<u64>, BookStoreError> {
        if holders.len() != version_ids.len() {
            return Err(BookStoreError::LengthMismatch {
                accounts: holders.len(),
                ids: version_ids.len(),
            });
        }
        Ok(holders
            .iter()
            .zip(version_ids)
            .map(|(holder, id)| self.balance_of(*holder, *id))
            .collect())
    }

    // === Approvals ===

    /// Grant or revoke `operator`'s right to move all of `caller`'s copies.
    fn set_approval_for_all(
        &mut self,
        operator: Address,
        approved: bool,
        caller: Address,
    ) -> Result<(), BookStoreError>;

    /// Whether `operator` is approved for all of `owner`'s copies.
    fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool;

    // === Transfers ===

    /// Move one copy of `version_id` from its author to `to`.
    ///
    /// Store front only. The author must also have approved the store front.
    fn transfer_from_author(
        &mut self,
        to: Address,
        version_id: VersionId,
        caller: Address,
    ) -> Result<(), BookStoreError>;

    /// Holder-initiated transfer. `caller` must be `from` or approved by it.
    fn safe_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        version_id: VersionId,
        amount: u64,
        caller: Address,
    ) -> Result<(), BookStoreError>;
}

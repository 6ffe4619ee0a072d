//! # Driven Ports (SPI - Outbound Dependencies)
//!
//! The two ledgers a purchase touches. Both are addressed explicitly, so one
//! host can serve several book stores and any number of payment tokens.
//! Failures come back as [`Revert`]s carrying the ledger's own reason.

use crate::domain::entities::Listing;
use shared_types::{Address, Revert, VersionId, U256};

/// Access to the issuance ledger.
pub trait BookStoreGateway {
    /// Read the sale terms of `version_id` from the book store at
    /// `book_store`.
    fn listing(&self, book_store: Address, version_id: VersionId) -> Result<Listing, Revert>;

    /// Ask the book store to move one copy from the version's author to
    /// `to`, acting as `caller`.
    fn transfer_from_author(
        &mut self,
        book_store: Address,
        to: Address,
        version_id: VersionId,
        caller: Address,
    ) -> Result<(), Revert>;
}

/// Access to payment ledgers.
pub trait PaymentGateway {
    /// Move `amount` of the token at `token` from `from` to `to`, spending
    /// the allowance `from` granted `spender`.
    ///
    /// Fails when nothing is deployed at `token`.
    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), Revert>;
}

//! # Driving Ports (API - Inbound)

use crate::domain::entities::PurchaseReceipt;
use crate::errors::StoreFrontError;
use crate::ports::outbound::{BookStoreGateway, PaymentGateway};
use shared_types::{Address, VersionId};

/// Storefront mediator API.
pub trait StoreFrontApi {
    /// Address the store front acts under on the ledgers.
    fn address(&self) -> Address;

    /// Deployer of the store front.
    fn owner(&self) -> Address;

    /// Book store this front sells from, if configured.
    fn book_store(&self) -> Option<Address>;

    /// Point the front at a book store. Owner only; may be called again.
    fn set_book_store(&mut self, book_store: Address, caller: Address)
        -> Result<(), StoreFrontError>;

    /// Buy one copy of `version_id` from its author on behalf of `buyer`.
    ///
    /// Pays the author first, then has the book store hand over the copy.
    /// A failure of either leg is returned as-is; undoing the payment leg is
    /// up to the transaction the call runs in.
    ///
    /// # Errors
    ///
    /// * `BookStoreNotSet` - no book store configured
    /// * `BookStore` - unknown version, missing approval, no copies left
    /// * `Payment` - allowance, balance or unknown currency
    fn purchase_from_author<L>(
        &mut self,
        version_id: VersionId,
        buyer: Address,
        ledgers: &mut L,
    ) -> Result<PurchaseReceipt, StoreFrontError>
    where
        L: BookStoreGateway + PaymentGateway;
}

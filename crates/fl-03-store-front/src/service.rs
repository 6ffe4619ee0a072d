//! # Store Front Service
//!
//! Mediates purchases: reads the sale terms from the book store, pulls the
//! price from the buyer to the author, then has the book store release one
//! copy to the buyer. The store front itself never holds copies or tokens.

use crate::domain::entities::PurchaseReceipt;
use crate::errors::StoreFrontError;
use crate::events::StoreFrontEvent;
use crate::ports::inbound::StoreFrontApi;
use crate::ports::outbound::{BookStoreGateway, PaymentGateway};

use shared_types::{Address, VersionId};
use tracing::{info, instrument, warn};

/// The storefront mediator.
#[derive(Clone, Debug)]
pub struct StoreFront {
    /// Own address; the spender and caller identity on the ledgers.
    address: Address,
    /// Deployer.
    owner: Address,
    /// Book store this front sells from.
    book_store: Option<Address>,
    /// Events raised since the last drain.
    pending_events: Vec<StoreFrontEvent>,
}

impl StoreFront {
    /// Create a store front deployed at `address` by `owner`.
    #[must_use]
    pub fn new(address: Address, owner: Address) -> Self {
        Self {
            address,
            owner,
            book_store: None,
            pending_events: Vec::new(),
        }
    }

    /// Drain events raised since the last call.
    pub fn take_events(&mut self) -> Vec<StoreFrontEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

impl StoreFrontApi for StoreFront {
    fn address(&self) -> Address {
        self.address
    }

    fn owner(&self) -> Address {
        self.owner
    }

    fn book_store(&self) -> Option<Address> {
        self.book_store
    }

    #[instrument(skip_all, fields(book_store = %book_store, caller = %caller))]
    fn set_book_store(
        &mut self,
        book_store: Address,
        caller: Address,
    ) -> Result<(), StoreFrontError> {
        if caller != self.owner {
            warn!("Rejected book store update from non-owner");
            return Err(StoreFrontError::NotOwner { caller });
        }

        let previous = self.book_store.replace(book_store);
        self.pending_events.push(StoreFrontEvent::BookStoreUpdated {
            previous,
            current: book_store,
        });
        info!("Book store configured");
        Ok(())
    }

    #[instrument(skip_all, fields(version_id = version_id, buyer = %buyer))]
    fn purchase_from_author<L>(
        &mut self,
        version_id: VersionId,
        buyer: Address,
        ledgers: &mut L,
    ) -> Result<PurchaseReceipt, StoreFrontError>
    where
        L: BookStoreGateway + PaymentGateway,
    {
        let book_store = self.book_store.ok_or(StoreFrontError::BookStoreNotSet)?;

        let listing = ledgers
            .listing(book_store, version_id)
            .map_err(StoreFrontError::BookStore)?;

        // Payment first; the copy transfer re-checks everything on its side.
        ledgers
            .transfer_from(
                listing.currency,
                self.address,
                buyer,
                listing.author,
                listing.price,
            )
            .map_err(StoreFrontError::Payment)?;

        ledgers
            .transfer_from_author(book_store, buyer, version_id, self.address)
            .map_err(StoreFrontError::BookStore)?;

        let receipt = PurchaseReceipt::new(&listing, buyer);
        self.pending_events.push(StoreFrontEvent::CopyPurchased {
            version_id,
            buyer,
            author: receipt.author,
            price: receipt.price,
            currency: receipt.currency,
        });

        info!(author = %receipt.author, price = %receipt.price, "Copy purchased");
        Ok(receipt)
    }
}

// =============================================================================
// TESTS
// =============================================================================

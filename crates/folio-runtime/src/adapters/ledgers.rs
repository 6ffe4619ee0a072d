//! # Ledger Adapter
//!
//! Implements the store front's driven ports over the contracts of the
//! world state. Contract errors are converted to [`Revert`]s with their
//! reason intact.

use std::collections::BTreeMap;

use fl_01_book_store::ports::inbound::BookStoreApi;
use fl_01_book_store::service::BookStore;
use fl_02_purchase_token::ports::inbound::PaymentLedgerApi;
use fl_02_purchase_token::service::PurchaseToken;
use fl_03_store_front::domain::entities::Listing;
use fl_03_store_front::ports::outbound::{BookStoreGateway, PaymentGateway};
use shared_types::{Address, Revert, RevertReason, VersionId, U256};

use crate::errors::{ContractKind, ExecutionError};

/// Book stores and tokens as seen by a store front during one call.
pub struct LedgerAdapter<'a> {
    book_stores: &'a mut BTreeMap<Address, BookStore>,
    tokens: &'a mut BTreeMap<Address, PurchaseToken>,
}

impl<'a> LedgerAdapter<'a> {
    /// Borrow the ledgers of the world state.
    pub fn new(
        book_stores: &'a mut BTreeMap<Address, BookStore>,
        tokens: &'a mut BTreeMap<Address, PurchaseToken>,
    ) -> Self {
        Self {
            book_stores,
            tokens,
        }
    }
}

fn unknown(kind: ContractKind, address: Address) -> Revert {
    ExecutionError::unknown(kind, address).to_revert()
}

impl BookStoreGateway for LedgerAdapter<'_> {
    fn listing(&self, book_store: Address, version_id: VersionId) -> Result<Listing, Revert> {
        let store = self
            .book_stores
            .get(&book_store)
            .ok_or_else(|| unknown(ContractKind::BookStore, book_store))?;
        let version = store.book_version(version_id).map_err(|e| e.to_revert())?;

        Ok(Listing {
            version_id,
            author: version.author,
            price: version.price,
            currency: version.currency,
        })
    }

    fn transfer_from_author(
        &mut self,
        book_store: Address,
        to: Address,
        version_id: VersionId,
        caller: Address,
    ) -> Result<(), Revert> {
        self.book_stores
            .get_mut(&book_store)
            .ok_or_else(|| unknown(ContractKind::BookStore, book_store))?
            .transfer_from_author(to, version_id, caller)
            .map_err(|e| e.to_revert())
    }
}

impl PaymentGateway for LedgerAdapter<'_> {
    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), Revert> {
        self.tokens
            .get_mut(&token)
            .ok_or_else(|| unknown(ContractKind::PurchaseToken, token))?
            .transfer_from(from, to, amount, spender)
            .map_err(|e| e.to_revert())
    }
}

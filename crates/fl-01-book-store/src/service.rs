//! # Book Store Service
//!
//! The issuance ledger: records book versions and who holds their copies.
//!
//! ## Security
//!
//! - `set_store_front` is restricted to the deployer (`owner`)
//! - `transfer_from_author` is restricted to the configured store front AND
//!   requires the author's approval-for-all for that store front
//! - Every check runs before the first write; an error leaves no trace

use crate::domain::balances::CopyLedger;
use crate::domain::entities::{BookStoreConfig, BookVersion};
use crate::domain::invariants::{check_all_invariants, InvariantCheckResult};
use crate::errors::BookStoreError;
use crate::events::BookStoreEvent;
use crate::ports::inbound::BookStoreApi;

use shared_types::{Address, VersionId, U256};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// The issuance ledger.
#[derive(Clone, Debug)]
pub struct BookStore {
    /// Store configuration.
    config: BookStoreConfig,
    /// Deployer; the only account allowed to set the store front.
    owner: Address,
    /// Store front allowed to call `transfer_from_author`.
    store_front: Option<Address>,
    /// Id the next `publish` will assign.
    next_version_id: VersionId,
    /// Published versions by id.
    versions: BTreeMap<VersionId, BookVersion>,
    /// Copy balances and approvals.
    ledger: CopyLedger,
    /// Events raised since the last drain.
    pending_events: Vec<BookStoreEvent>,
}

impl BookStore {
    /// Create an empty store owned by `owner`.
    #[must_use]
    pub fn new(owner: Address, config: BookStoreConfig) -> Self {
        Self {
            config,
            owner,
            store_front: None,
            next_version_id: 1,
            versions: BTreeMap::new(),
            ledger: CopyLedger::new(),
            pending_events: Vec::new(),
        }
    }

    /// Store configuration.
    #[must_use]
    pub fn config(&self) -> &BookStoreConfig {
        &self.config
    }

    /// Number of published versions.
    #[must_use]
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    /// Iterate published versions in id order.
    pub fn versions(&self) -> impl Iterator<Item = &BookVersion> {
        self.versions.values()
    }

    /// Drain events raised since the last call.
    pub fn take_events(&mut self) -> Vec<BookStoreEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check the store's invariants.
    #[must_use]
    pub fn check_invariants(&self) -> InvariantCheckResult {
        check_all_invariants(&self.versions, self.next_version_id, &self.ledger)
    }

    fn version(&self, version_id: VersionId) -> Result<&BookVersion, BookStoreError> {
        self.versions
            .get(&version_id)
            .ok_or(BookStoreError::VersionNotFound(version_id))
    }
}

impl BookStoreApi for BookStore {
    fn owner(&self) -> Address {
        self.owner
    }

    fn store_front(&self) -> Option<Address> {
        self.store_front
    }

    #[instrument(skip_all, fields(store_front = %store_front, caller = %caller))]
    fn set_store_front(
        &mut self,
        store_front: Address,
        caller: Address,
    ) -> Result<(), BookStoreError> {
        if caller != self.owner {
            warn!("Rejected store front change from non-owner");
            return Err(BookStoreError::NotOwner { caller });
        }

        let previous = self.store_front.replace(store_front);
        self.pending_events.push(BookStoreEvent::StoreFrontUpdated {
            previous,
            current: store_front,
        });
        info!(previous = ?previous, "Store front configured");
        Ok(())
    }

    #[instrument(skip_all, fields(author = %caller, quantity = quantity))]
    fn publish(
        &mut self,
        quantity: u64,
        price: U256,
        currency: Address,
        caller: Address,
    ) -> Result<VersionId, BookStoreError> {
        if caller.is_zero() {
            return Err(BookStoreError::MintToZeroAddress);
        }
        if quantity == 0 {
            return Err(BookStoreError::ZeroQuantity);
        }
        if price.is_zero() && !self.config.allow_free_editions {
            return Err(BookStoreError::ZeroPrice);
        }

        let version_id = self.next_version_id;
        self.versions.insert(
            version_id,
            BookVersion {
                id: version_id,
                author: caller,
                price,
                currency,
                supply: quantity,
            },
        );
        self.ledger.mint(caller, version_id, quantity);
        self.next_version_id += 1;

        self.pending_events.push(BookStoreEvent::BookPublished {
            version_id,
            author: caller,
            price,
            currency,
            quantity,
        });
        self.pending_events.push(BookStoreEvent::TransferSingle {
            operator: caller,
            from: Address::ZERO,
            to: caller,
            version_id,
            value: quantity,
        });

        info!(version_id, %price, currency = %currency, "Book version published");
        Ok(version_id)
    }

    fn book_version(&self, version_id: VersionId) -> Result<&BookVersion, BookStoreError> {
        self.version(version_id)
    }

    fn latest_version_id(&self) -> Option<VersionId> {
        self.versions.keys().next_back().copied()
    }

    fn uri(&self, version_id: VersionId) -> Result<String, BookStoreError> {
        self.version(version_id)?;
        Ok(self.config.render_uri(version_id))
    }

    fn balance_of(&self, holder: Address, version_id: VersionId) -> u64 {
        self.ledger.balance_of(holder, version_id)
    }

    #[instrument(skip_all, fields(owner = %caller, operator = %operator))]
    fn set_approval_for_all(
        &mut self,
        operator: Address,
        approved: bool,
        caller: Address,
    ) -> Result<(), BookStoreError> {
        self.ledger.set_approval(caller, operator, approved)?;
        self.pending_events.push(BookStoreEvent::ApprovalForAll {
            owner: caller,
            operator,
            approved,
        });
        debug!(approved, "Approval for all updated");
        Ok(())
    }

    fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.ledger.is_approved_for_all(owner, operator)
    }

    #[instrument(skip_all, fields(version_id = version_id, to = %to, caller = %caller))]
    fn transfer_from_author(
        &mut self,
        to: Address,
        version_id: VersionId,
        caller: Address,
    ) -> Result<(), BookStoreError> {
        // Caller identity first, before anything else is even looked at.
        if self.store_front != Some(caller) {
            warn!("Rejected author transfer from non store front caller");
            return Err(BookStoreError::NotStoreFront { caller });
        }

        let author = self.version(version_id)?.author;
        if to.is_zero() {
            return Err(BookStoreError::TransferToZeroAddress);
        }
        if !self.ledger.is_approved_for_all(author, caller) {
            return Err(BookStoreError::NotApproved {
                owner: author,
                operator: caller,
            });
        }

        self.ledger.move_copies(author, to, version_id, 1)?;
        self.pending_events.push(BookStoreEvent::TransferSingle {
            operator: caller,
            from: author,
            to,
            version_id,
            value: 1,
        });

        debug!(
            author = %author,
            remaining = self.ledger.balance_of(author, version_id),
            "Copy transferred from author"
        );
        Ok(())
    }

    #[instrument(skip_all, fields(version_id = version_id, from = %from, to = %to, caller = %caller))]
    fn safe_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        version_id: VersionId,
        amount: u64,
        caller: Address,
    ) -> Result<(), BookStoreError> {
        if caller != from && !self.ledger.is_approved_for_all(from, caller) {
            return Err(BookStoreError::NotApproved {
                owner: from,
                operator: caller,
            });
        }
        self.version(version_id)?;

        self.ledger.move_copies(from, to, version_id, amount)?;
        self.pending_events.push(BookStoreEvent::TransferSingle {
            operator: caller,
            from,
            to,
            version_id,
            value: amount,
        });

        debug!(amount, "Copies transferred");
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # World State
//!
//! Every deployed contract, keyed by address. Cloning the world state is the
//! transaction snapshot.

use std::collections::{BTreeMap, HashMap};

use fl_01_book_store::service::BookStore;
use fl_02_purchase_token::service::PurchaseToken;
use fl_03_store_front::service::StoreFront;
use shared_types::Address;

use crate::call::{ChainEvent, LogEntry};
use crate::errors::{ContractKind, ExecutionError};

/// All contracts hosted by a chain.
#[derive(Clone, Debug, Default)]
pub struct WorldState {
    pub(crate) book_stores: BTreeMap<Address, BookStore>,
    pub(crate) store_fronts: BTreeMap<Address, StoreFront>,
    pub(crate) tokens: BTreeMap<Address, PurchaseToken>,
    /// Deployments made per deployer.
    pub(crate) nonces: HashMap<Address, u64>,
}

impl WorldState {
    /// Whether any contract lives at `address`.
    #[must_use]
    pub fn is_deployed(&self, address: Address) -> bool {
        self.book_stores.contains_key(&address)
            || self.store_fronts.contains_key(&address)
            || self.tokens.contains_key(&address)
    }

    /// Number of deployed contracts.
    #[must_use]
    pub fn contract_count(&self) -> usize {
        self.book_stores.len() + self.store_fronts.len() + self.tokens.len()
    }

    pub(crate) fn book_store_mut(&mut self, address: Address) -> Result<&mut BookStore, ExecutionError> {
        self.book_stores
            .get_mut(&address)
            .ok_or_else(|| ExecutionError::unknown(ContractKind::BookStore, address))
    }

    pub(crate) fn store_front_mut(
        &mut self,
        address: Address,
    ) -> Result<&mut StoreFront, ExecutionError> {
        self.store_fronts
            .get_mut(&address)
            .ok_or_else(|| ExecutionError::unknown(ContractKind::StoreFront, address))
    }

    pub(crate) fn token_mut(&mut self, address: Address) -> Result<&mut PurchaseToken, ExecutionError> {
        self.tokens
            .get_mut(&address)
            .ok_or_else(|| ExecutionError::unknown(ContractKind::PurchaseToken, address))
    }

    /// Take every buffered event: tokens first, then book stores, then store
    /// fronts, each group in address order.
    pub(crate) fn drain_logs(&mut self) -> Vec<LogEntry> {
        let mut logs = Vec::new();

        for (address, token) in &mut self.tokens {
            logs.extend(token.take_events().into_iter().map(|event| LogEntry {
                address: *address,
                event: ChainEvent::Token(event),
            }));
        }
        for (address, store) in &mut self.book_stores {
            logs.extend(store.take_events().into_iter().map(|event| LogEntry {
                address: *address,
                event: ChainEvent::BookStore(event),
            }));
        }
        for (address, front) in &mut self.store_fronts {
            logs.extend(front.take_events().into_iter().map(|event| LogEntry {
                address: *address,
                event: ChainEvent::StoreFront(event),
            }));
        }

        logs
    }
}

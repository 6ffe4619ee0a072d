//! # Chain
//!
//! Hosts the contracts and executes calls one at a time. Every call is a
//! transaction: the world state is snapshotted first and restored if the
//! call fails, so a failed call leaves no trace.

use std::sync::Arc;

use fl_01_book_store::ports::inbound::BookStoreApi;
use fl_01_book_store::service::BookStore;
use fl_02_purchase_token::domain::entities::TokenConfig;
use fl_02_purchase_token::ports::inbound::PaymentLedgerApi;
use fl_02_purchase_token::service::PurchaseToken;
use fl_03_store_front::ports::inbound::StoreFrontApi;
use fl_03_store_front::service::StoreFront;
use folio_telemetry::{
    metric_inc, register_metrics, time_histogram, CALLS_EXECUTED, CALL_DURATION,
    CONTRACTS_DEPLOYED, COPIES_MINTED, COPIES_PURCHASED, LATEST_VERSION_ID, REVERTS,
    VERSIONS_PUBLISHED,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared_types::{Address, RevertReason, U256};
use tracing::{debug, info, instrument, warn};

use crate::adapters::LedgerAdapter;
use crate::call::{Call, CallOutput, LogEntry, Receipt};
use crate::container::ChainConfig;
use crate::errors::{ContractKind, ExecutionError};
use crate::genesis::compute_contract_address;
use crate::state::WorldState;

/// A chain shared between threads. Hold the lock for the whole call.
pub type SharedChain = Arc<Mutex<Chain>>;

/// Call counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStats {
    /// Calls passed to `execute`.
    pub executed: u64,
    /// Calls that committed.
    pub committed: u64,
    /// Calls that reverted and were rolled back.
    pub reverted: u64,
}

/// The execution environment.
#[derive(Debug)]
pub struct Chain {
    config: ChainConfig,
    state: WorldState,
    stats: ChainStats,
    /// Every committed event, deployments included.
    logs: Vec<LogEntry>,
}

impl Chain {
    /// Create an empty chain.
    pub fn new(config: ChainConfig) -> Self {
        if config.telemetry.metrics_enabled {
            if let Err(e) = register_metrics() {
                warn!(error = %e, "Metrics unavailable");
            }
        }
        info!(chain_id = config.chain_id, "Chain created");

        Self {
            config,
            state: WorldState::default(),
            stats: ChainStats::default(),
            logs: Vec::new(),
        }
    }

    /// Wrap the chain for use from several threads.
    #[must_use]
    pub fn into_shared(self) -> SharedChain {
        Arc::new(Mutex::new(self))
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Call counters.
    #[must_use]
    pub fn stats(&self) -> ChainStats {
        self.stats
    }

    /// Every committed event so far.
    #[must_use]
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// Deployed contracts.
    #[must_use]
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    // =========================================================================
    // DEPLOYMENT
    // =========================================================================

    fn next_address(&mut self, deployer: Address) -> Address {
        let nonce = self.state.nonces.entry(deployer).or_default();
        let address = compute_contract_address(deployer, *nonce);
        *nonce += 1;
        address
    }

    fn record_deployment(&mut self, kind: ContractKind, address: Address, deployer: Address) {
        metric_inc!(CONTRACTS_DEPLOYED, &[kind.as_str()]);
        let logs = self.state.drain_logs();
        self.logs.extend(logs);
        info!(%kind, %address, %deployer, "Contract deployed");
    }

    /// Deploy a book store owned by `deployer`.
    pub fn deploy_book_store(&mut self, deployer: Address) -> Address {
        let address = self.next_address(deployer);
        let store = BookStore::new(deployer, self.config.book_store.clone());
        self.state.book_stores.insert(address, store);
        self.record_deployment(ContractKind::BookStore, address, deployer);
        address
    }

    /// Deploy a store front owned by `deployer`.
    pub fn deploy_store_front(&mut self, deployer: Address) -> Address {
        let address = self.next_address(deployer);
        self.state
            .store_fronts
            .insert(address, StoreFront::new(address, deployer));
        self.record_deployment(ContractKind::StoreFront, address, deployer);
        address
    }

    /// Deploy a purchase token with the configured metadata, minting
    /// `initial_supply` to `deployer`.
    pub fn deploy_purchase_token(
        &mut self,
        deployer: Address,
        initial_supply: U256,
    ) -> Result<Address, ExecutionError> {
        let config = self.config.token.clone();
        self.deploy_purchase_token_with(deployer, config, initial_supply)
    }

    /// Deploy a purchase token with custom metadata.
    pub fn deploy_purchase_token_with(
        &mut self,
        deployer: Address,
        config: TokenConfig,
        initial_supply: U256,
    ) -> Result<Address, ExecutionError> {
        // Build first so a rejected deployment does not consume a nonce.
        let token = PurchaseToken::new(config, initial_supply, deployer)?;
        let address = self.next_address(deployer);
        self.state.tokens.insert(address, token);
        self.record_deployment(ContractKind::PurchaseToken, address, deployer);
        Ok(address)
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Book store at `address`.
    pub fn book_store(&self, address: Address) -> Result<&BookStore, ExecutionError> {
        self.state
            .book_stores
            .get(&address)
            .ok_or_else(|| ExecutionError::unknown(ContractKind::BookStore, address))
    }

    /// Store front at `address`.
    pub fn store_front(&self, address: Address) -> Result<&StoreFront, ExecutionError> {
        self.state
            .store_fronts
            .get(&address)
            .ok_or_else(|| ExecutionError::unknown(ContractKind::StoreFront, address))
    }

    /// Purchase token at `address`.
    pub fn purchase_token(&self, address: Address) -> Result<&PurchaseToken, ExecutionError> {
        self.state
            .tokens
            .get(&address)
            .ok_or_else(|| ExecutionError::unknown(ContractKind::PurchaseToken, address))
    }

    // =========================================================================
    // EXECUTION
    // =========================================================================

    /// Execute `call` as `caller` in its own transaction.
    ///
    /// On success the call's events are committed and returned in the
    /// receipt. On failure the world state is exactly what it was before.
    #[instrument(skip_all, fields(call = call.name(), caller = %caller, target = %call.target()))]
    pub fn execute(&mut self, caller: Address, call: Call) -> Result<Receipt, ExecutionError> {
        let _timer = time_histogram!(CALL_DURATION);
        let sequence = self.stats.executed;
        self.stats.executed += 1;

        // Whole-state snapshot: O(contracts + balances) per call.
        let snapshot = self.state.clone();
        match self.dispatch(caller, &call) {
            Ok(output) => {
                let logs = self.state.drain_logs();
                self.logs.extend(logs.iter().cloned());
                self.stats.committed += 1;
                self.record_commit(&call, &output);

                debug!(logs = logs.len(), "Call committed");
                Ok(Receipt {
                    sequence,
                    caller,
                    target: call.target(),
                    output,
                    logs,
                })
            }
            Err(err) => {
                self.state = snapshot;
                self.stats.reverted += 1;
                let kind = err.kind();
                let kind_label = format!("{kind:?}");
                metric_inc!(CALLS_EXECUTED, &[call.name(), "reverted"]);
                metric_inc!(REVERTS, &[kind_label.as_str()]);

                warn!(%kind, reason = %err, "Call reverted");
                Err(err)
            }
        }
    }

    fn record_commit(&self, call: &Call, output: &CallOutput) {
        metric_inc!(CALLS_EXECUTED, &[call.name(), "committed"]);
        match (call, output) {
            (Call::Publish { quantity, .. }, CallOutput::VersionId(id)) => {
                metric_inc!(VERSIONS_PUBLISHED);
                COPIES_MINTED.inc_by(*quantity as f64);
                LATEST_VERSION_ID.set(*id as f64);
            }
            (_, CallOutput::Purchase(_)) => metric_inc!(COPIES_PURCHASED),
            _ => {}
        }
    }

    fn dispatch(&mut self, caller: Address, call: &Call) -> Result<CallOutput, ExecutionError> {
        match *call {
            // === Book store ===
            Call::SetStoreFront {
                book_store,
                store_front,
            } => {
                self.state
                    .book_store_mut(book_store)?
                    .set_store_front(store_front, caller)?;
                Ok(CallOutput::Unit)
            }
            Call::Publish {
                book_store,
                quantity,
                price,
                currency,
            } => {
                let id = self
                    .state
                    .book_store_mut(book_store)?
                    .publish(quantity, price, currency, caller)?;
                Ok(CallOutput::VersionId(id))
            }
            Call::SetApprovalForAll {
                book_store,
                operator,
                approved,
            } => {
                self.state
                    .book_store_mut(book_store)?
                    .set_approval_for_all(operator, approved, caller)?;
                Ok(CallOutput::Unit)
            }
            Call::SafeTransferFrom {
                book_store,
                from,
                to,
                version_id,
                amount,
            } => {
                self.state
                    .book_store_mut(book_store)?
                    .safe_transfer_from(from, to, version_id, amount, caller)?;
                Ok(CallOutput::Unit)
            }
            Call::TransferFromAuthor {
                book_store,
                to,
                version_id,
            } => {
                self.state
                    .book_store_mut(book_store)?
                    .transfer_from_author(to, version_id, caller)?;
                Ok(CallOutput::Unit)
            }

            // === Store front ===
            Call::SetBookStore {
                store_front,
                book_store,
            } => {
                self.state
                    .store_front_mut(store_front)?
                    .set_book_store(book_store, caller)?;
                Ok(CallOutput::Unit)
            }
            Call::PurchaseFromAuthor {
                store_front,
                version_id,
            } => {
                let WorldState {
                    book_stores,
                    store_fronts,
                    tokens,
                    ..
                } = &mut self.state;
                let front = store_fronts
                    .get_mut(&store_front)
                    .ok_or_else(|| ExecutionError::unknown(ContractKind::StoreFront, store_front))?;
                let mut ledgers = LedgerAdapter::new(book_stores, tokens);
                let receipt = front.purchase_from_author(version_id, caller, &mut ledgers)?;
                Ok(CallOutput::Purchase(receipt))
            }

            // === Purchase token ===
            Call::Transfer { token, to, amount } => {
                self.state.token_mut(token)?.transfer(to, amount, caller)?;
                Ok(CallOutput::Unit)
            }
            Call::Approve {
                token,
                spender,
                amount,
            } => {
                self.state.token_mut(token)?.approve(spender, amount, caller)?;
                Ok(CallOutput::Unit)
            }
            Call::TransferFrom {
                token,
                from,
                to,
                amount,
            } => {
                self.state
                    .token_mut(token)?
                    .transfer_from(from, to, amount, caller)?;
                Ok(CallOutput::Unit)
            }
            Call::IncreaseAllowance {
                token,
                spender,
                added,
            } => {
                self.state
                    .token_mut(token)?
                    .increase_allowance(spender, added, caller)?;
                Ok(CallOutput::Unit)
            }
            Call::DecreaseAllowance {
                token,
                spender,
                subtracted,
            } => {
                self.state
                    .token_mut(token)?
                    .decrease_allowance(spender, subtracted, caller)?;
                Ok(CallOutput::Unit)
            }
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new(ChainConfig::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Folio Runtime
//!
//! The in-process chain that hosts the Folio contracts.
//!
//! ## Responsibilities
//!
//! - **Deployment**: contracts land at `keccak256(rlp([deployer, nonce]))[12..]`
//! - **Dispatch**: [`Call`] names every mutating operation; the caller is
//!   passed alongside and handed to the contract unchanged
//! - **Atomicity**: each call runs against a snapshot of the world state and
//!   is rolled back entirely on failure, including both legs of a purchase
//! - **Adapters**: the store front reaches the book store and the payment
//!   tokens through [`adapters::LedgerAdapter`]
//! - **Observability**: `tracing` spans per call, Prometheus counters from
//!   `folio-telemetry`
//!
//! ## Concurrency
//!
//! `Chain::execute` takes `&mut self`. Hosts that share a chain between
//! threads wrap it in a [`SharedChain`] and hold the lock for the whole call.
//!
//! ## Usage Example
//!
//! ```ignore
//! use folio_runtime::prelude::*;
//!
//! let mut chain = Chain::new(ChainConfig::from_env());
//! let market = deploy_marketplace(&mut chain, owner)?;
//! let token = chain.deploy_purchase_token(buyer, to_wei(1_000_000))?;
//!
//! let receipt = chain.execute(author, Call::Publish {
//!     book_store: market.book_store,
//!     quantity: 100,
//!     price: to_wei(50),
//!     currency: token,
//! })?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod call;
pub mod chain;
pub mod container;
pub mod errors;
pub mod genesis;
pub mod state;
pub mod wiring;

pub use call::{Call, CallOutput, ChainEvent, LogEntry, Receipt};
pub use chain::{Chain, ChainStats, SharedChain};
pub use container::ChainConfig;
pub use errors::{ContractKind, ExecutionError};
pub use wiring::{deploy_marketplace, Marketplace};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::call::{Call, CallOutput, ChainEvent, LogEntry, Receipt};
    pub use crate::chain::{Chain, ChainStats, SharedChain};
    pub use crate::container::ChainConfig;
    pub use crate::errors::{ContractKind, ExecutionError};
    pub use crate::wiring::{deploy_marketplace, Marketplace};
    pub use fl_01_book_store::prelude::{BookStoreApi, BookStoreEvent};
    pub use fl_02_purchase_token::prelude::{PaymentLedgerApi, TokenEvent};
    pub use fl_03_store_front::prelude::{PurchaseReceipt, StoreFrontApi, StoreFrontEvent};
    pub use shared_types::{from_wei, to_wei, Address, ErrorKind, RevertReason, VersionId, U256};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

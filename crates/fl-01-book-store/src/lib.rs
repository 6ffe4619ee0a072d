//! # FL-01 Book Store - Issuance Ledger
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Authoritative record of book versions and copy ownership. Authors publish
//! a version (price, payment token, supply) and receive the whole supply;
//! copies then move only between holders, never burned or re-minted.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Sequential Version Ids | `domain/invariants.rs` - `check_sequential_ids_invariant()` |
//! | INVARIANT-2 | Supply Conservation | `domain/invariants.rs` - `check_supply_invariant()` |
//! | INVARIANT-3 | Author Attribution | `domain/invariants.rs` - `check_author_invariant()` |
//!
//! ## Access Control
//!
//! | Operation | Authorized Caller(s) | Enforcement |
//! |-----------|---------------------|-------------|
//! | `set_store_front` | Deployer (owner) | `service.rs` |
//! | `transfer_from_author` | Configured store front, approved by the author | `service.rs` |
//! | `safe_transfer_from` | Holder or approved operator | `service.rs` |
//!
//! ## Usage Example
//!
//! ```ignore
//! use fl_01_book_store::prelude::*;
//!
//! let mut store = BookStore::new(deployer, BookStoreConfig::default());
//! store.set_store_front(store_front, deployer)?;
//!
//! let version_id = store.publish(100, to_wei(50), currency, author)?;
//! assert_eq!(store.balance_of(author, version_id), 100);
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::entities::{BookStoreConfig, BookVersion};
    pub use crate::domain::invariants::{InvariantCheckResult, InvariantViolation};
    pub use crate::errors::BookStoreError;
    pub use crate::events::BookStoreEvent;
    pub use crate::ports::inbound::BookStoreApi;
    pub use crate::service::BookStore;
    pub use shared_types::{to_wei, Address, VersionId, U256};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Book Store";

// =============================================================================
// TESTS
// =============================================================================

//! # FL-02 Purchase Token - Payment Ledger
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! A standard fungible token with owner-granted allowances. Book versions
//! are priced in one of these; the store front pulls the price from the
//! buyer with `transfer_from` after the buyer approved it.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Supply Conservation | `domain/invariants.rs` - `check_supply_invariant()` |
//!
//! ## Semantics
//!
//! - `transfer_from` checks the allowance before the balance
//! - An allowance of `U256::MAX` is unlimited and never decremented
//! - Zero-address recipients and spenders are rejected

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::entities::TokenConfig;
    pub use crate::errors::TokenError;
    pub use crate::events::TokenEvent;
    pub use crate::ports::inbound::PaymentLedgerApi;
    pub use crate::service::PurchaseToken;
    pub use shared_types::{from_wei, to_wei, Address, U256};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 2;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Purchase Token";

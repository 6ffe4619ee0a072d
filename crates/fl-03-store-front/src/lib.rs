//! # FL-03 Store Front - Storefront Mediator
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Executes purchases. For one copy of a version it pays the author in the
//! version's currency out of the buyer's allowance, then has the book store
//! release the copy to the buyer. The store front holds no balances.
//!
//! ## Access Control
//!
//! | Operation | Authorized Caller(s) | Enforcement |
//! |-----------|---------------------|-------------|
//! | `set_book_store` | Deployer (owner) | `service.rs` |
//! | `purchase_from_author` | Anyone; the buyer pays | `service.rs` |
//!
//! ## Atomicity
//!
//! The two legs of a purchase are not undone here. The host runs every call
//! inside a transaction and discards all of its effects when it fails.
//!
//! ## Dependencies
//!
//! The ledgers are reached only through the driven ports in
//! `ports/outbound.rs`; this crate does not link against them.

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
    pub use crate::domain::entities::{Listing, PurchaseReceipt};
    pub use crate::errors::StoreFrontError;
    pub use crate::events::StoreFrontEvent;
    pub use crate::ports::inbound::StoreFrontApi;
    pub use crate::ports::outbound::{BookStoreGateway, PaymentGateway};
    pub use crate::service::StoreFront;
    pub use shared_types::{Address, VersionId, U256};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 3;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Store Front";

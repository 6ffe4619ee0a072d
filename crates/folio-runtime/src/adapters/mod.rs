//! # Adapters
//!
//! Implementations of contract ports backed by the world state.

pub mod ledgers;

pub use ledgers::LedgerAdapter;

//! # Domain Layer (Inner Hexagon)
//!
//! Pure token accounting: balances, allowances, supply.

pub mod accounts;
pub mod entities;
pub mod invariants;

pub use accounts::*;
pub use entities::*;
pub use invariants::*;

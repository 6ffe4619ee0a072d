//! # Domain Layer (Inner Hexagon)
//!
//! Pure book store logic: versions, copy balances, approvals.
//! NO I/O, NO logging, NO knowledge of the other contracts.

pub mod balances;
pub mod entities;
pub mod invariants;

pub use balances::*;
pub use entities::*;
pub use invariants::*;

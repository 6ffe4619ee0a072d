//! # Domain Layer (Inner Hexagon)
//!
//! Sale terms and purchase receipts. The store front keeps no balances.

pub mod entities;

pub use entities::*;

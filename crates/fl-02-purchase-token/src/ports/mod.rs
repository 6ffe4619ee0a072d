//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Ports (Inbound)**: `PaymentLedgerApi`
//! - Leaf contract: no driven ports.

pub mod inbound;

pub use inbound::*;

//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Ports (Inbound)**: `StoreFrontApi`
//! - **Driven Ports (Outbound)**: `BookStoreGateway`, `PaymentGateway`
//!
//! The store front never links against the ledgers it drives; the host
//! environment implements the driven ports.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;

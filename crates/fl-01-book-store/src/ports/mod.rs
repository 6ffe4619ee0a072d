//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the book store.
//!
//! - **Driving Ports (Inbound)**: `BookStoreApi`
//! - The book store is a leaf: it calls no other contract, so it has no
//!   driven ports.

pub mod inbound;

pub use inbound::*;

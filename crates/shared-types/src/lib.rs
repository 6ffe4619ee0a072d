//! # Shared Types Crate
//!
//! This crate contains the primitives every Folio contract agrees on:
//! addresses, 256-bit amounts, book version identifiers, unit conversion
//! helpers and the error taxonomy used to surface reverts.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-contract types are defined here.
//! - **Caller-Only Identity**: Operations never read identity from payloads;
//!   the authenticated caller is passed alongside every mutating call.
//! - **Verbatim Reverts**: A failure crossing a contract boundary travels as a
//!   [`Revert`] whose reason string is never rewritten.

pub mod entities;
pub mod errors;
pub mod units;

pub use entities::*;
pub use errors::*;
pub use units::*;

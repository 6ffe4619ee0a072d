//! # Deployment
//!
//! Where contracts land when the chain deploys them.

pub mod address;

pub use address::compute_contract_address;

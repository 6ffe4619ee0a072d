//! # Cross-Contract Scenarios
//!
//! Each module drives a wired marketplace through the chain, the way an
//! external account would.

pub mod concurrency;
pub mod publishing;
pub mod purchasing;
pub mod security;

//! # Runtime Container
//!
//! Configuration of the chain and the contracts it hosts.

pub mod config;

pub use config::*;

//! # Folio Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks of chain calls
//! └── src/
//!     ├── fixtures.rs   # Wired marketplace and test accounts
//!     └── integration/  # Cross-contract scenarios
//!         ├── publishing.rs
//!         ├── purchasing.rs
//!         ├── security.rs
//!         ├── atomicity.rs
//!         └── concurrency.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p folio-tests
//!
//! # By category
//! cargo test -p folio-tests integration::security::
//!
//! # Benchmarks
//! cargo bench -p folio-tests
//! ```

pub mod fixtures;
pub mod integration;

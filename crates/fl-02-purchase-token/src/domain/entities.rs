//! # Domain Entities
//!
//! Token metadata.

use serde::{Deserialize, Serialize};
use shared_types::ETHER_DECIMALS;

/// Token metadata fixed at deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Human-readable name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Number of decimals in one whole token.
    pub decimals: u32,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: "Purchase Token".to_string(),
            symbol: "PURCH".to_string(),
            decimals: ETHER_DECIMALS,
        }
    }
}

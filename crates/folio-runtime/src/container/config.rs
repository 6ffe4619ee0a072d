//! # Chain Configuration
//!
//! Unified configuration for the contracts and the runtime. Every value has
//! a default; `from_env` overrides them from `FOLIO_*` variables.

use std::env;

use fl_01_book_store::domain::entities::BookStoreConfig;
use fl_02_purchase_token::domain::entities::TokenConfig;
use folio_telemetry::{parse_flag, TelemetryConfig};

/// Default chain id, shared with common local development chains.
pub const DEFAULT_CHAIN_ID: u64 = 31_337;

/// Complete chain configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Chain identifier reported in logs.
    pub chain_id: u64,
    /// Configuration handed to every deployed book store.
    pub book_store: BookStoreConfig,
    /// Default metadata of deployed purchase tokens.
    pub token: TokenConfig,
    /// Logging and metrics.
    pub telemetry: TelemetryConfig,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            book_store: BookStoreConfig::default(),
            token: TokenConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl ChainConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FOLIO_CHAIN_ID`: Chain id (default: 31337)
    /// - `FOLIO_BOOK_URI`: Metadata URI template, `{id}` is substituted
    /// - `FOLIO_ALLOW_FREE_EDITIONS`: Accept zero-price versions (default: false)
    /// - `FOLIO_TOKEN_NAME` / `FOLIO_TOKEN_SYMBOL`: Default token metadata
    /// - Telemetry variables, see [`TelemetryConfig::from_env`]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let book_store = BookStoreConfig {
            uri_template: lookup("FOLIO_BOOK_URI").unwrap_or(defaults.book_store.uri_template),
            allow_free_editions: lookup("FOLIO_ALLOW_FREE_EDITIONS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.book_store.allow_free_editions),
        };

        let token = TokenConfig {
            name: lookup("FOLIO_TOKEN_NAME").unwrap_or(defaults.token.name),
            symbol: lookup("FOLIO_TOKEN_SYMBOL").unwrap_or(defaults.token.symbol),
            decimals: defaults.token.decimals,
        };

        Self {
            chain_id: lookup("FOLIO_CHAIN_ID")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.chain_id),
            book_store,
            token,
            telemetry: TelemetryConfig::from_lookup(&lookup),
        }
    }
}

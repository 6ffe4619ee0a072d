//! # Error Types
//!
//! Defines the error taxonomy shared across contracts and the [`Revert`]
//! value that carries a failure from one contract to another.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of every failure a contract call can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Caller identity failed a privileged-operation check.
    AccessDenied,
    /// A query or purchase referenced something that does not exist.
    NotFound,
    /// Copy balance, token balance or allowance too low.
    InsufficientBalance,
    /// Argument rejected before any state was touched.
    InvalidArgument,
    /// The call was addressed to an address with no matching contract.
    UnknownContract,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AccessDenied => "access denied",
            Self::NotFound => "not found",
            Self::InsufficientBalance => "insufficient balance",
            Self::InvalidArgument => "invalid argument",
            Self::UnknownContract => "unknown contract",
        };
        f.write_str(name)
    }
}

/// A failed call as seen from outside the contract that raised it.
///
/// `Display` prints the reason and nothing else, so a revert forwarded
/// through any number of contracts reads exactly as it was raised.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{reason}")]
pub struct Revert {
    /// Failure class.
    pub kind: ErrorKind,
    /// Human-readable reason string.
    pub reason: String,
}

impl Revert {
    /// Create a new revert.
    pub fn new(kind: ErrorKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

/// Implemented by every contract error so it can be classified and
/// converted into a [`Revert`].
pub trait RevertReason: std::error::Error {
    /// Failure class of this error.
    fn kind(&self) -> ErrorKind;

    /// Convert into a revert carrying this error's display string.
    fn to_revert(&self) -> Revert {
        Revert::new(self.kind(), self.to_string())
    }
}

impl RevertReason for Revert {
    fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn to_revert(&self) -> Revert {
        self.clone()
    }
}

/// Errors parsing an address from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    /// Input is not valid hex.
    #[error("Invalid address hex: {0}")]
    InvalidHex(String),

    /// Input decoded to the wrong number of bytes.
    #[error("Invalid address length: expected 20 bytes, got {0}")]
    InvalidLength(usize),
}

/// Errors converting between whole-unit and base-unit amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    /// Input is not a decimal number.
    #[error("Invalid decimal amount: {0:?}")]
    InvalidNumber(String),

    /// More fractional digits than the token has decimals.
    #[error("Too many decimal places: {found} > {decimals}")]
    TooPrecise { found: usize, decimals: u32 },

    /// Result does not fit in 256 bits.
    #[error("Amount overflows 256 bits")]
    Overflow,

    /// Scale factor `10^decimals` does not fit in 256 bits.
    #[error("Unsupported decimals: {decimals} > 77")]
    DecimalsOutOfRange { decimals: u32 },
}

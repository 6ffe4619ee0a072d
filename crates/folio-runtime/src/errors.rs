//! # Execution Errors
//!
//! Why a call did not commit. Contract errors are wrapped unchanged and
//! display their own revert reason.

use fl_01_book_store::errors::BookStoreError;
use fl_02_purchase_token::errors::TokenError;
use fl_03_store_front::errors::StoreFrontError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, ErrorKind, RevertReason};
use std::fmt;
use thiserror::Error;

/// The contract types the chain can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractKind {
    /// Issuance ledger.
    BookStore,
    /// Storefront mediator.
    StoreFront,
    /// Payment ledger.
    PurchaseToken,
}

impl ContractKind {
    /// Metric label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BookStore => "book_store",
            Self::StoreFront => "store_front",
            Self::PurchaseToken => "purchase_token",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BookStore => "book store",
            Self::StoreFront => "store front",
            Self::PurchaseToken => "purchase token",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`crate::Chain::execute`] and the deploy methods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// No contract of the expected kind lives at the address.
    #[error("Folio: no {kind} deployed at {address}")]
    UnknownContract {
        /// Expected contract type.
        kind: ContractKind,
        /// Addressed account.
        address: Address,
    },

    /// The book store reverted.
    #[error(transparent)]
    BookStore(#[from] BookStoreError),

    /// A purchase token reverted.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// The store front reverted.
    #[error(transparent)]
    StoreFront(#[from] StoreFrontError),
}

impl ExecutionError {
    /// Shorthand for [`ExecutionError::UnknownContract`].
    #[must_use]
    pub fn unknown(kind: ContractKind, address: Address) -> Self {
        Self::UnknownContract { kind, address }
    }
}

impl RevertReason for ExecutionError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownContract { .. } => ErrorKind::UnknownContract,
            Self::BookStore(e) => e.kind(),
            Self::Token(e) => e.kind(),
            Self::StoreFront(e) => e.kind(),
        }
    }
}

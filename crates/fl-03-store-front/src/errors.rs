//! # Error Types
//!
//! Store front errors. Failures raised by the ledgers it drives are carried
//! as [`Revert`]s and displayed exactly as the ledger raised them.

use shared_types::{Address, ErrorKind, Revert, RevertReason};
use thiserror::Error;

/// Errors that can occur during store front operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreFrontError {
    /// Only the deployer may rewire the book store.
    #[error("StoreFront: Only contract owner can set bookStore")]
    NotOwner { caller: Address },

    /// Purchase attempted before the book store was configured.
    #[error("StoreFront: bookStore not set")]
    BookStoreNotSet,

    /// The book store rejected a read or the copy transfer.
    #[error("{0}")]
    BookStore(Revert),

    /// The payment token rejected the payment.
    #[error("{0}")]
    Payment(Revert),
}

impl RevertReason for StoreFrontError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotOwner { .. } => ErrorKind::AccessDenied,
            Self::BookStoreNotSet => ErrorKind::InvalidArgument,
            Self::BookStore(revert) | Self::Payment(revert) => revert.kind,
        }
    }
}

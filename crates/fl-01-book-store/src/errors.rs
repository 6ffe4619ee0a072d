//! # Error Types
//!
//! All error types raised by the book store. The display strings are the
//! revert reasons callers see.

use shared_types::{Address, ErrorKind, RevertReason, VersionId};
use thiserror::Error;

/// Errors that can occur during book store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookStoreError {
    /// Only the deployer may rewire the store front.
    #[error("BookStore: Only contract owner can set storeFront")]
    NotOwner { caller: Address },

    /// Only the configured store front may move copies out of an author's supply.
    #[error("Method can only be called by Store Front contract.")]
    NotStoreFront { caller: Address },

    /// Operator has no approval-for-all from the holder.
    #[error("ERC1155: caller is not token owner or approved")]
    NotApproved { owner: Address, operator: Address },

    /// Version id was never published.
    #[error("BookStore: unknown book version {0}")]
    VersionNotFound(VersionId),

    /// Holder does not have enough copies.
    #[error("ERC1155: insufficient balance for transfer")]
    InsufficientCopies {
        holder: Address,
        version_id: VersionId,
        required: u64,
        available: u64,
    },

    /// Publishing zero copies.
    #[error("BookStore: quantity must be greater than zero")]
    ZeroQuantity,

    /// Publishing a free edition while free editions are disabled.
    #[error("BookStore: price must be greater than zero")]
    ZeroPrice,

    /// Publishing with the zero address as author.
    #[error("ERC1155: mint to the zero address")]
    MintToZeroAddress,

    /// Copies sent to the zero address.
    #[error("ERC1155: transfer to the zero address")]
    TransferToZeroAddress,

    /// Holder tried to approve themselves.
    #[error("ERC1155: setting approval status for self")]
    SelfApproval,

    /// Batch query with differently sized inputs.
    #[error("ERC1155: accounts and ids length mismatch")]
    LengthMismatch { accounts: usize, ids: usize },
}

impl RevertReason for BookStoreError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotOwner { .. } | Self::NotStoreFront { .. } | Self::NotApproved { .. } => {
                ErrorKind::AccessDenied
            }
            Self::VersionNotFound(_) => ErrorKind::NotFound,
            Self::InsufficientCopies { .. } => ErrorKind::InsufficientBalance,
            Self::ZeroQuantity
            | Self::ZeroPrice
            | Self::MintToZeroAddress
            | Self::TransferToZeroAddress
            | Self::SelfApproval
            | Self::LengthMismatch { .. } => ErrorKind::InvalidArgument,
        }
    }
}

//! # Error Types
//!
//! Errors raised by the purchase token. Messages follow the ERC-20 revert
//! strings wallets and front ends already recognise.

use shared_types::{Address, ErrorKind, RevertReason, U256};
use thiserror::Error;

/// Errors that can occur during token operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Sender balance too low.
    #[error("ERC20: transfer amount exceeds balance")]
    InsufficientBalance {
        owner: Address,
        required: U256,
        available: U256,
    },

    /// Spender allowance too low.
    #[error("ERC20: insufficient allowance")]
    InsufficientAllowance {
        owner: Address,
        spender: Address,
        required: U256,
        available: U256,
    },

    /// Allowance decrease larger than the current allowance.
    #[error("ERC20: decreased allowance below zero")]
    AllowanceUnderflow { current: U256, decrease: U256 },

    /// Allowance increase overflowing 256 bits.
    #[error("ERC20: allowance overflow")]
    AllowanceOverflow,

    /// Mint pushing the total supply past 256 bits.
    #[error("ERC20: total supply overflow")]
    SupplyOverflow,

    /// Tokens sent to the zero address.
    #[error("ERC20: transfer to the zero address")]
    TransferToZeroAddress,

    /// Tokens sent from the zero address.
    #[error("ERC20: transfer from the zero address")]
    TransferFromZeroAddress,

    /// Allowance granted to the zero address.
    #[error("ERC20: approve to the zero address")]
    ApproveToZeroAddress,
}

impl RevertReason for TokenError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientBalance { .. } | Self::InsufficientAllowance { .. } => {
                ErrorKind::InsufficientBalance
            }
            Self::AllowanceUnderflow { .. }
            | Self::AllowanceOverflow
            | Self::SupplyOverflow
            | Self::TransferToZeroAddress
            | Self::TransferFromZeroAddress
            | Self::ApproveToZeroAddress => ErrorKind::InvalidArgument,
        }
    }
}

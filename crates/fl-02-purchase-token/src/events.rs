//! # Event Schema
//!
//! Standard ERC-20 events, buffered until the enclosing call commits.

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// Token events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    /// Tokens moved. Mints use the zero address as `from`.
    Transfer {
        /// Debited account.
        from: Address,
        /// Credited account.
        to: Address,
        /// Amount in base units.
        value: U256,
    },

    /// Allowance set.
    Approval {
        /// Token holder.
        owner: Address,
        /// Approved spender.
        spender: Address,
        /// New allowance.
        value: U256,
    },
}

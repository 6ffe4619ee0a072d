//! # Event Schema
//!
//! Store front events, buffered until the enclosing call commits.

use serde::{Deserialize, Serialize};
use shared_types::{Address, VersionId, U256};

/// Store front events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreFrontEvent {
    /// The book store this front sells from changed.
    BookStoreUpdated {
        /// Previous book store, if any.
        previous: Option<Address>,
        /// New book store.
        current: Address,
    },

    /// A buyer paid an author and received one copy.
    CopyPurchased {
        /// Version bought.
        version_id: VersionId,
        /// Paying account.
        buyer: Address,
        /// Receiving author.
        author: Address,
        /// Amount paid in base units.
        price: U256,
        /// Token paid in.
        currency: Address,
    },
}

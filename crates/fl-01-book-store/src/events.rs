//! # Event Schema
//!
//! Events emitted by the book store. They are buffered inside the store and
//! drained by the host once the enclosing call commits, so a reverted call
//! never leaks an event.

use shared_types::{Address, VersionId, U256};
use serde::{Deserialize, Serialize};

/// Book store events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStoreEvent {
    /// A new version was published and its supply minted to the author.
    BookPublished {
        /// New version id.
        version_id: VersionId,
        /// Publishing account.
        author: Address,
        /// Price per copy in base units of `currency`.
        price: U256,
        /// Payment token address.
        currency: Address,
        /// Copies minted.
        quantity: u64,
    },

    /// Copies moved between holders. Mints use the zero address as `from`.
    TransferSingle {
        /// Account that initiated the move.
        operator: Address,
        /// Previous holder.
        from: Address,
        /// New holder.
        to: Address,
        /// Version moved.
        version_id: VersionId,
        /// Number of copies.
        value: u64,
    },

    /// Blanket approval granted or revoked.
    ApprovalForAll {
        /// Holder.
        owner: Address,
        /// Operator.
        operator: Address,
        /// New approval status.
        approved: bool,
    },

    /// The store front authorised for author transfers changed.
    StoreFrontUpdated {
        /// Previous store front, if any.
        previous: Option<Address>,
        /// New store front.
        current: Address,
    },
}

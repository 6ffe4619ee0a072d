//! # Domain Entities
//!
//! What the store front reads before a sale and reports after it.

use serde::{Deserialize, Serialize};
use shared_types::{Address, VersionId, U256};

/// Sale terms of a version, as read from the book store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Version on sale.
    pub version_id: VersionId,
    /// Seller; receives the payment and gives up one copy.
    pub author: Address,
    /// Price in base units of `currency`.
    pub price: U256,
    /// Payment token.
    pub currency: Address,
}

/// Outcome of a completed purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// Version bought.
    pub version_id: VersionId,
    /// Paying account, now holding one more copy.
    pub buyer: Address,
    /// Paid account, now holding one copy fewer.
    pub author: Address,
    /// Amount paid.
    pub price: U256,
    /// Token paid in.
    pub currency: Address,
}

impl PurchaseReceipt {
    /// Receipt for buying `listing` as `buyer`.
    #[must_use]
    pub fn new(listing: &Listing, buyer: Address) -> Self {
        Self {
            version_id: listing.version_id,
            buyer,
            author: listing.author,
            price: listing.price,
            currency: listing.currency,
        }
    }
}

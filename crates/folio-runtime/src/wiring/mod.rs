//! # Marketplace Wiring
//!
//! Deploys a book store and a store front and points each at the other.
//!
//! ```text
//!   owner ──deploy──► BookStore ◄──set_book_store── StoreFront
//!                        │                              ▲
//!                        └──────set_store_front─────────┘
//! ```
//!
//! Authors still have to approve the store front on the book store
//! (`set_approval_for_all`) before their copies can be sold.

use serde::{Deserialize, Serialize};
use shared_types::Address;
use tracing::info;

use crate::call::Call;
use crate::chain::Chain;
use crate::errors::ExecutionError;

/// Addresses of a wired marketplace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marketplace {
    /// Account that deployed and owns both contracts.
    pub owner: Address,
    /// Issuance ledger.
    pub book_store: Address,
    /// Storefront mediator.
    pub store_front: Address,
}

/// Deploy and cross-wire a book store and a store front owned by `owner`.
pub fn deploy_marketplace(chain: &mut Chain, owner: Address) -> Result<Marketplace, ExecutionError> {
    let book_store = chain.deploy_book_store(owner);
    let store_front = chain.deploy_store_front(owner);

    chain.execute(
        owner,
        Call::SetStoreFront {
            book_store,
            store_front,
        },
    )?;
    chain.execute(
        owner,
        Call::SetBookStore {
            store_front,
            book_store,
        },
    )?;

    info!(%book_store, %store_front, "Marketplace wired");
    Ok(Marketplace {
        owner,
        book_store,
        store_front,
    })
}

//! # Calls and Receipts
//!
//! Every state-changing operation of the hosted contracts, addressed to a
//! contract, plus what a committed call returns.

use fl_01_book_store::events::BookStoreEvent;
use fl_02_purchase_token::events::TokenEvent;
use fl_03_store_front::domain::entities::PurchaseReceipt;
use fl_03_store_front::events::StoreFrontEvent;
use serde::{Deserialize, Serialize};
use shared_types::{Address, VersionId, U256};

/// A mutating call. The caller is supplied separately to
/// [`crate::Chain::execute`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Call {
    // === Book store ===
    /// `BookStore::set_store_front`
    SetStoreFront {
        /// Target book store.
        book_store: Address,
        /// Store front to authorise.
        store_front: Address,
    },
    /// `BookStore::publish`
    Publish {
        /// Target book store.
        book_store: Address,
        /// Copies to mint.
        quantity: u64,
        /// Price per copy.
        price: U256,
        /// Payment token.
        currency: Address,
    },
    /// `BookStore::set_approval_for_all`
    SetApprovalForAll {
        /// Target book store.
        book_store: Address,
        /// Operator to (dis)approve.
        operator: Address,
        /// New status.
        approved: bool,
    },
    /// `BookStore::safe_transfer_from`
    SafeTransferFrom {
        /// Target book store.
        book_store: Address,
        /// Holder.
        from: Address,
        /// Recipient.
        to: Address,
        /// Version moved.
        version_id: VersionId,
        /// Copies moved.
        amount: u64,
    },
    /// `BookStore::transfer_from_author`. Only ever succeeds when issued by
    /// the store front itself.
    TransferFromAuthor {
        /// Target book store.
        book_store: Address,
        /// Recipient.
        to: Address,
        /// Version moved.
        version_id: VersionId,
    },

    // === Store front ===
    /// `StoreFront::set_book_store`
    SetBookStore {
        /// Target store front.
        store_front: Address,
        /// Book store to sell from.
        book_store: Address,
    },
    /// `StoreFront::purchase_from_author`; the caller is the buyer.
    PurchaseFromAuthor {
        /// Target store front.
        store_front: Address,
        /// Version to buy.
        version_id: VersionId,
    },

    // === Purchase token ===
    /// `PurchaseToken::transfer`
    Transfer {
        /// Target token.
        token: Address,
        /// Recipient.
        to: Address,
        /// Amount.
        amount: U256,
    },
    /// `PurchaseToken::approve`
    Approve {
        /// Target token.
        token: Address,
        /// Spender.
        spender: Address,
        /// New allowance.
        amount: U256,
    },
    /// `PurchaseToken::transfer_from`
    TransferFrom {
        /// Target token.
        token: Address,
        /// Debited account.
        from: Address,
        /// Credited account.
        to: Address,
        /// Amount.
        amount: U256,
    },
    /// `PurchaseToken::increase_allowance`
    IncreaseAllowance {
        /// Target token.
        token: Address,
        /// Spender.
        spender: Address,
        /// Increment.
        added: U256,
    },
    /// `PurchaseToken::decrease_allowance`
    DecreaseAllowance {
        /// Target token.
        token: Address,
        /// Spender.
        spender: Address,
        /// Decrement.
        subtracted: U256,
    },
}

impl Call {
    /// Operation name, used in logs and metric labels.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetStoreFront { .. } => "set_store_front",
            Self::Publish { .. } => "publish",
            Self::SetApprovalForAll { .. } => "set_approval_for_all",
            Self::SafeTransferFrom { .. } => "safe_transfer_from",
            Self::TransferFromAuthor { .. } => "transfer_from_author",
            Self::SetBookStore { .. } => "set_book_store",
            Self::PurchaseFromAuthor { .. } => "purchase_from_author",
            Self::Transfer { .. } => "transfer",
            Self::Approve { .. } => "approve",
            Self::TransferFrom { .. } => "transfer_from",
            Self::IncreaseAllowance { .. } => "increase_allowance",
            Self::DecreaseAllowance { .. } => "decrease_allowance",
        }
    }

    /// Contract the call is addressed to.
    #[must_use]
    pub fn target(&self) -> Address {
        match *self {
            Self::SetStoreFront { book_store, .. }
            | Self::Publish { book_store, .. }
            | Self::SetApprovalForAll { book_store, .. }
            | Self::SafeTransferFrom { book_store, .. }
            | Self::TransferFromAuthor { book_store, .. } => book_store,
            Self::SetBookStore { store_front, .. } | Self::PurchaseFromAuthor { store_front, .. } => {
                store_front
            }
            Self::Transfer { token, .. }
            | Self::Approve { token, .. }
            | Self::TransferFrom { token, .. }
            | Self::IncreaseAllowance { token, .. }
            | Self::DecreaseAllowance { token, .. } => token,
        }
    }
}

/// Return value of a committed call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOutput {
    /// Nothing returned.
    Unit,
    /// Id assigned by `publish`.
    VersionId(VersionId),
    /// Completed purchase.
    Purchase(PurchaseReceipt),
}

/// An event raised by one of the hosted contracts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainEvent {
    /// Raised by a book store.
    BookStore(BookStoreEvent),
    /// Raised by a purchase token.
    Token(TokenEvent),
    /// Raised by a store front.
    StoreFront(StoreFrontEvent),
}

/// A committed event with the contract that raised it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Emitting contract.
    pub address: Address,
    /// Event payload.
    pub event: ChainEvent,
}

/// Result of a committed call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Position of the call among all calls the chain executed.
    pub sequence: u64,
    /// Authenticated caller.
    pub caller: Address,
    /// Contract the call was addressed to.
    pub target: Address,
    /// Return value.
    pub output: CallOutput,
    /// Events, grouped per contract: tokens, then book stores, then store
    /// fronts.
    pub logs: Vec<LogEntry>,
}

impl Receipt {
    /// Version id, when the call was a publish.
    #[must_use]
    pub fn version_id(&self) -> Option<VersionId> {
        match self.output {
            CallOutput::VersionId(id) => Some(id),
            _ => None,
        }
    }

    /// Purchase receipt, when the call was a purchase.
    #[must_use]
    pub fn purchase(&self) -> Option<&PurchaseReceipt> {
        match &self.output {
            CallOutput::Purchase(receipt) => Some(receipt),
            _ => None,
        }
    }
}

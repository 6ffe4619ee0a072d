//! # Copy Ledger
//!
//! Per-holder copy balances and operator approvals.
//!
//! Every mutating method validates first and writes second, so a returned
//! error always means nothing changed.

use crate::errors::BookStoreError;
use shared_types::{Address, VersionId};
use std::collections::{HashMap, HashSet};

/// Copy balances keyed by (holder, version) plus approval-for-all grants.
#[derive(Clone, Debug, Default)]
pub struct CopyLedger {
    balances: HashMap<(Address, VersionId), u64>,
    approvals: HashSet<(Address, Address)>,
}

impl CopyLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of `version_id` held by `holder` (zero if never touched).
    #[must_use]
    pub fn balance_of(&self, holder: Address, version_id: VersionId) -> u64 {
        self.balances
            .get(&(holder, version_id))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all balances of one version.
    #[must_use]
    pub fn circulating(&self, version_id: VersionId) -> u64 {
        self.balances
            .iter()
            .filter(|((_, id), _)| *id == version_id)
            .map(|(_, amount)| *amount)
            .sum()
    }

    /// Credit freshly minted copies. Only called once per version.
    pub(crate) fn mint(&mut self, to: Address, version_id: VersionId, amount: u64) {
        *self.balances.entry((to, version_id)).or_insert(0) += amount;
    }

    /// Move copies between holders.
    pub(crate) fn move_copies(
        &mut self,
        from: Address,
        to: Address,
        version_id: VersionId,
        amount: u64,
    ) -> Result<(), BookStoreError> {
        if to.is_zero() {
            return Err(BookStoreError::TransferToZeroAddress);
        }
        let available = self.balance_of(from, version_id);
        if available < amount {
            return Err(BookStoreError::InsufficientCopies {
                holder: from,
                version_id,
                required: amount,
                available,
            });
        }

        self.balances.insert((from, version_id), available - amount);
        // Cannot overflow: all balances of a version sum to its minted supply.
        *self.balances.entry((to, version_id)).or_insert(0) += amount;
        Ok(())
    }

    /// Whether `operator` may move every copy `owner` holds.
    #[must_use]
    pub fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.approvals.contains(&(owner, operator))
    }

    /// Grant or revoke blanket approval. Idempotent.
    pub(crate) fn set_approval(
        &mut self,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), BookStoreError> {
        if owner == operator {
            return Err(BookStoreError::SelfApproval);
        }
        if approved {
            self.approvals.insert((owner, operator));
        } else {
            self.approvals.remove(&(owner, operator));
        }
        Ok(())
    }
}

//! # Domain Invariants
//!
//! - INVARIANT-1: Supply Conservation (balances always sum to total supply)

use crate::domain::accounts::TokenAccounts;

/// INVARIANT-1: Supply Conservation
///
/// Transfers move value, never create or destroy it.
#[must_use]
pub fn check_supply_invariant(accounts: &TokenAccounts) -> bool {
    accounts.balance_sum() == accounts.total_supply()
}

//! # Token Accounts
//!
//! Balances, allowances and total supply. Methods check before they write.

use crate::errors::TokenError;
use shared_types::{Address, U256};
use std::collections::HashMap;

/// Balance and allowance tables of one token.
#[derive(Clone, Debug, Default)]
pub struct TokenAccounts {
    total_supply: U256,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
}

impl TokenAccounts {
    /// Create empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all balances.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Balance of `owner` (zero if unknown).
    #[must_use]
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).copied().unwrap_or_default()
    }

    /// Remaining allowance of `spender` over `owner`'s tokens.
    #[must_use]
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// Sum of balances, recomputed from the table.
    #[must_use]
    pub fn balance_sum(&self) -> U256 {
        self.balances
            .values()
            .fold(U256::zero(), |acc, b| acc.saturating_add(*b))
    }

    /// Create `amount` new tokens for `to`.
    pub(crate) fn mint(&mut self, to: Address, amount: U256) -> Result<(), TokenError> {
        if to.is_zero() {
            return Err(TokenError::TransferToZeroAddress);
        }
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::SupplyOverflow)?;
        self.total_supply = supply;
        // Cannot overflow: every balance is bounded by the total supply.
        *self.balances.entry(to).or_default() += amount;
        Ok(())
    }

    /// Move `amount` from `from` to `to`.
    pub(crate) fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if from.is_zero() {
            return Err(TokenError::TransferFromZeroAddress);
        }
        if to.is_zero() {
            return Err(TokenError::TransferToZeroAddress);
        }
        let available = self.balance_of(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                owner: from,
                required: amount,
                available,
            });
        }

        self.balances.insert(from, available - amount);
        *self.balances.entry(to).or_default() += amount;
        Ok(())
    }

    /// Overwrite an allowance.
    pub(crate) fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if spender.is_zero() {
            return Err(TokenError::ApproveToZeroAddress);
        }
        self.allowances.insert((owner, spender), amount);
        Ok(())
    }

    /// Check that `spender` may take `amount` from `owner`.
    ///
    /// Returns the allowance left afterwards; `U256::MAX` is unlimited and
    /// never decreases.
    pub(crate) fn check_spend(
        &self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<U256, TokenError> {
        let current = self.allowance(owner, spender);
        if current == U256::MAX {
            return Ok(current);
        }
        if current < amount {
            return Err(TokenError::InsufficientAllowance {
                owner,
                spender,
                required: amount,
                available: current,
            });
        }
        Ok(current - amount)
    }
}

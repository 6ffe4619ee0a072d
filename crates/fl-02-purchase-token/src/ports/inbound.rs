//! # Driving Ports (API - Inbound)
//!
//! The payment ledger surface the store front relies on: balances,
//! owner-granted allowances and a transfer primitive that honours them.

use crate::errors::TokenError;
use shared_types::{Address, U256};

/// ERC-20 style payment ledger API.
pub trait PaymentLedgerApi {
    /// Token name.
    fn name(&self) -> &str;

    /// Token symbol.
    fn symbol(&self) -> &str;

    /// Decimals of one whole token.
    fn decimals(&self) -> u32;

    /// Total tokens in existence.
    fn total_supply(&self) -> U256;

    /// Balance of `owner`.
    fn balance_of(&self, owner: Address) -> U256;

    /// Remaining amount `spender` may move on behalf of `owner`.
    fn allowance(&self, owner: Address, spender: Address) -> U256;

    /// Move `amount` from `caller` to `to`.
    fn transfer(&mut self, to: Address, amount: U256, caller: Address) -> Result<(), TokenError>;

    /// Set `spender`'s allowance over `caller`'s tokens.
    fn approve(&mut self, spender: Address, amount: U256, caller: Address)
        -> Result<(), TokenError>;

    /// Move `amount` from `from` to `to`, spending `caller`'s allowance.
    ///
    /// # Errors
    ///
    /// * `InsufficientAllowance` - checked first
    /// * `InsufficientBalance` - checked second
    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
        caller: Address,
    ) -> Result<(), TokenError>;

    /// Raise `spender`'s allowance by `added`.
    fn increase_allowance(
        &mut self,
        spender: Address,
        added: U256,
        caller: Address,
    ) -> Result<(), TokenError> {
        let current = self.allowance(caller, spender);
        let updated = current
            .checked_add(added)
            .ok_or(TokenError::AllowanceOverflow)?;
        self.approve(spender, updated, caller)
    }

    /// Lower `spender`'s allowance by `subtracted`.
    fn decrease_allowance(
        &mut self,
        spender: Address,
        subtracted: U256,
        caller: Address,
    ) -> Result<(), TokenError> {
        let current = self.allowance(caller, spender);
        let updated = current
            .checked_sub(subtracted)
            .ok_or(TokenError::AllowanceUnderflow {
                current,
                decrease: subtracted,
            })?;
        self.approve(spender, updated, caller)
    }
}

//! # Purchase Token Service
//!
//! A fungible payment ledger with owner-granted allowances. The whole initial
//! supply is minted to the deployer.

use crate::domain::accounts::TokenAccounts;
use crate::domain::entities::TokenConfig;
use crate::domain::invariants::check_supply_invariant;
use crate::errors::TokenError;
use crate::events::TokenEvent;
use crate::ports::inbound::PaymentLedgerApi;

use shared_types::{Address, U256};
use tracing::{debug, instrument};

/// The payment ledger.
#[derive(Clone, Debug)]
pub struct PurchaseToken {
    /// Token metadata.
    config: TokenConfig,
    /// Balances and allowances.
    accounts: TokenAccounts,
    /// Events raised since the last drain.
    pending_events: Vec<TokenEvent>,
}

impl PurchaseToken {
    /// Deploy a token, minting `initial_supply` to `deployer`.
    pub fn new(
        config: TokenConfig,
        initial_supply: U256,
        deployer: Address,
    ) -> Result<Self, TokenError> {
        let mut accounts = TokenAccounts::new();
        accounts.mint(deployer, initial_supply)?;

        Ok(Self {
            config,
            accounts,
            pending_events: vec![TokenEvent::Transfer {
                from: Address::ZERO,
                to: deployer,
                value: initial_supply,
            }],
        })
    }

    /// Drain events raised since the last call.
    pub fn take_events(&mut self) -> Vec<TokenEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Whether balances still add up to the total supply.
    #[must_use]
    pub fn supply_is_conserved(&self) -> bool {
        check_supply_invariant(&self.accounts)
    }
}

impl PaymentLedgerApi for PurchaseToken {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn symbol(&self) -> &str {
        &self.config.symbol
    }

    fn decimals(&self) -> u32 {
        self.config.decimals
    }

    fn total_supply(&self) -> U256 {
        self.accounts.total_supply()
    }

    fn balance_of(&self, owner: Address) -> U256 {
        self.accounts.balance_of(owner)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.accounts.allowance(owner, spender)
    }

    #[instrument(skip_all, fields(from = %caller, to = %to, amount = %amount))]
    fn transfer(&mut self, to: Address, amount: U256, caller: Address) -> Result<(), TokenError> {
        self.accounts.transfer(caller, to, amount)?;
        self.pending_events.push(TokenEvent::Transfer {
            from: caller,
            to,
            value: amount,
        });
        debug!("Tokens transferred");
        Ok(())
    }

    #[instrument(skip_all, fields(owner = %caller, spender = %spender, amount = %amount))]
    fn approve(
        &mut self,
        spender: Address,
        amount: U256,
        caller: Address,
    ) -> Result<(), TokenError> {
        self.accounts.approve(caller, spender, amount)?;
        self.pending_events.push(TokenEvent::Approval {
            owner: caller,
            spender,
            value: amount,
        });
        debug!("Allowance set");
        Ok(())
    }

    #[instrument(skip_all, fields(spender = %caller, from = %from, to = %to, amount = %amount))]
    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
        caller: Address,
    ) -> Result<(), TokenError> {
        let remaining = self.accounts.check_spend(from, caller, amount)?;
        self.accounts.transfer(from, to, amount)?;

        if remaining != self.accounts.allowance(from, caller) {
            self.accounts.approve(from, caller, remaining)?;
            self.pending_events.push(TokenEvent::Approval {
                owner: from,
                spender: caller,
                value: remaining,
            });
        }
        self.pending_events.push(TokenEvent::Transfer {
            from,
            to,
            value: amount,
        });

        debug!(%remaining, "Tokens transferred on allowance");
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Test Fixtures
//!
//! A wired marketplace on a fresh chain plus the accounts the scenarios use.
//! Account 0 deploys the marketplace, account 1 is the usual buyer, account
//! 5 the usual author.

use std::sync::Once;

use folio_runtime::prelude::*;
use folio_telemetry::{init_tracing, TelemetryConfig};
use shared_types::keccak256;

/// USDC on Ethereum mainnet; a currency nothing is deployed at.
pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

/// Mainnet USDC address parsed.
pub fn usdc() -> Address {
    USDC.parse().expect("USDC address is valid hex")
}

/// Deterministic test account `index`.
pub fn account(index: u64) -> Address {
    let hash = keccak256(&index.to_be_bytes());
    Address::from_slice(&hash[12..]).expect("keccak suffix is 20 bytes")
}

/// Install a quiet subscriber once per test binary.
pub fn init_test_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let config = TelemetryConfig {
            log_level: "warn".to_string(),
            metrics_enabled: false,
            ..Default::default()
        };
        // Another test binary harness may already own the global subscriber.
        let _ = init_tracing(&config);
    });
}

/// A chain with a wired book store and store front.
pub struct TestMarket {
    /// The chain.
    pub chain: Chain,
    /// Deployed addresses.
    pub market: Marketplace,
}

impl TestMarket {
    /// Deploy with the default configuration.
    pub fn new() -> Result<Self, ExecutionError> {
        Self::with_config(ChainConfig::default())
    }

    /// Deploy with `config`.
    pub fn with_config(config: ChainConfig) -> Result<Self, ExecutionError> {
        init_test_tracing();
        let mut chain = Chain::new(config);
        let market = deploy_marketplace(&mut chain, account(0))?;
        Ok(Self { chain, market })
    }

    /// Deploy a purchase token minting `whole` tokens to `holder`.
    pub fn deploy_token(&mut self, holder: Address, whole: u64) -> Result<Address, ExecutionError> {
        self.chain.deploy_purchase_token(holder, to_wei(whole))
    }

    /// Publish as `author`, returning the new version id.
    pub fn publish(
        &mut self,
        author: Address,
        quantity: u64,
        price: U256,
        currency: Address,
    ) -> Result<VersionId, ExecutionError> {
        let receipt = self.chain.execute(
            author,
            Call::Publish {
                book_store: self.market.book_store,
                quantity,
                price,
                currency,
            },
        )?;
        Ok(receipt
            .version_id()
            .expect("publish receipt carries the new version id"))
    }

    /// Let the store front move `author`'s copies.
    pub fn approve_store_front(&mut self, author: Address) -> Result<Receipt, ExecutionError> {
        self.chain.execute(
            author,
            Call::SetApprovalForAll {
                book_store: self.market.book_store,
                operator: self.market.store_front,
                approved: true,
            },
        )
    }

    /// Let the store front spend `amount` of `buyer`'s `token`.
    pub fn approve_payment(
        &mut self,
        token: Address,
        buyer: Address,
        amount: U256,
    ) -> Result<Receipt, ExecutionError> {
        self.chain.execute(
            buyer,
            Call::Approve {
                token,
                spender: self.market.store_front,
                amount,
            },
        )
    }

    /// Move `amount` of `token` from `from` to `to`.
    pub fn transfer_tokens(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<Receipt, ExecutionError> {
        self.chain.execute(from, Call::Transfer { token, to, amount })
    }

    /// Buy one copy as `buyer`.
    pub fn purchase(&mut self, buyer: Address, version_id: VersionId) -> Result<Receipt, ExecutionError> {
        self.chain.execute(
            buyer,
            Call::PurchaseFromAuthor {
                store_front: self.market.store_front,
                version_id,
            },
        )
    }

    /// Copies of `version_id` held by `holder`.
    pub fn copies(&self, holder: Address, version_id: VersionId) -> u64 {
        self.chain
            .book_store(self.market.book_store)
            .map(|store| store.balance_of(holder, version_id))
            .expect("marketplace book store is deployed")
    }

    /// Balance of `holder` in `token`.
    pub fn token_balance(&self, token: Address, holder: Address) -> U256 {
        self.chain
            .purchase_token(token)
            .map(|t| t.balance_of(holder))
            .expect("token is deployed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_are_distinct_and_non_zero() {
        let accounts: Vec<_> = (0..10).map(account).collect();
        for (i, a) in accounts.iter().enumerate() {
            assert!(!a.is_zero());
            assert!(!accounts[i + 1..].contains(a));
        }
    }

    #[test]
    #[should_panic(expected = "token is deployed")]
    fn test_balance_of_missing_token_panics() {
        let market = TestMarket::new().unwrap();
        market.token_balance(account(42), account(1));
    }

    #[test]
    fn test_usdc_parses() {
        assert_eq!(usdc().to_hex(), USDC);
    }
}

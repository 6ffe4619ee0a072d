//! # Concurrent Buyers
//!
//! Several threads share one chain behind a lock. Every purchase holds the
//! lock for both legs, so copies are never oversold and no payment is lost.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use crate::fixtures::{account, TestMarket};
    use folio_runtime::prelude::*;

    #[test]
    fn test_copies_are_never_oversold() {
        let mut market = TestMarket::new().unwrap();
        let author = account(5);
        let buyers: Vec<Address> = (20..24).map(account).collect();
        let token = market.deploy_token(account(1), 1_000).unwrap();
        for buyer in &buyers {
            market
                .transfer_tokens(token, account(1), *buyer, to_wei(100))
                .unwrap();
            market.approve_payment(token, *buyer, U256::MAX).unwrap();
        }
        let id = market.publish(author, 10, to_wei(3), token).unwrap();
        market.approve_store_front(author).unwrap();

        let store_front = market.market.store_front;
        let book_store = market.market.book_store;
        let shared = market.chain.into_shared();

        let handles: Vec<_> = buyers
            .iter()
            .map(|buyer| {
                let shared: SharedChain = Arc::clone(&shared);
                let buyer = *buyer;
                thread::spawn(move || {
                    let mut bought = 0u64;
                    for _ in 0..5 {
                        let result = shared.lock().execute(
                            buyer,
                            Call::PurchaseFromAuthor {
                                store_front,
                                version_id: id,
                            },
                        );
                        if result.is_ok() {
                            bought += 1;
                        }
                    }
                    bought
                })
            })
            .collect();

        let total: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 10);

        let chain = shared.lock();
        let store = chain.book_store(book_store).unwrap();
        assert_eq!(store.balance_of(author, id), 0);
        let ledger = chain.purchase_token(token).unwrap();
        assert_eq!(ledger.balance_of(author), to_wei(30));
        assert!(ledger.supply_is_conserved());

        let stats = chain.stats();
        assert_eq!(stats.executed, stats.committed + stats.reverted);
        assert_eq!(stats.reverted, 10);
    }
}

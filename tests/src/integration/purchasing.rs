//! # Purchasing From the Author
//!
//! A purchase pays the author in the version's currency and moves one copy
//! to the buyer.

#[cfg(test)]
mod tests {
    use crate::fixtures::{account, TestMarket};
    use fl_01_book_store::events::BookStoreEvent;
    use fl_02_purchase_token::events::TokenEvent;
    use fl_03_store_front::events::StoreFrontEvent;
    use folio_runtime::prelude::*;

    /// Market with a funded buyer (account 1) and an approving author
    /// (account 5) who published `quantity` copies at `price` whole tokens.
    fn setup(quantity: u64, price: u64) -> (TestMarket, Address, VersionId) {
        let mut market = TestMarket::new().unwrap();
        let buyer = account(1);
        let author = account(5);

        let token = market.deploy_token(buyer, 1_000_000).unwrap();
        assert_eq!(from_wei(market.token_balance(token, buyer)), "1000000");
        market
            .approve_payment(token, buyer, to_wei(1_000_000))
            .unwrap();

        let id = market.publish(author, quantity, to_wei(price), token).unwrap();
        market.approve_store_front(author).unwrap();
        (market, token, id)
    }

    #[test]
    fn test_purchase_pays_the_author() {
        let (mut market, token, id) = setup(10, 5_000);

        market.purchase(account(1), id).unwrap();

        assert_eq!(from_wei(market.token_balance(token, account(5))), "5000");
        assert_eq!(from_wei(market.token_balance(token, account(1))), "995000");
    }

    #[test]
    fn test_purchase_moves_one_copy_to_each_buyer() {
        let (mut market, token, id) = setup(100, 50);
        let (buyer, second_buyer, author) = (account(1), account(9), account(5));

        market
            .transfer_tokens(token, buyer, second_buyer, to_wei(500_000))
            .unwrap();
        market
            .approve_payment(token, second_buyer, to_wei(1_000_000))
            .unwrap();

        market.purchase(buyer, id).unwrap();
        assert_eq!(market.copies(buyer, id), 1);
        assert_eq!(market.copies(author, id), 99);

        market.purchase(second_buyer, id).unwrap();
        assert_eq!(market.copies(second_buyer, id), 1);
        assert_eq!(market.copies(author, id), 98);

        assert_eq!(from_wei(market.token_balance(token, author)), "100");
        assert_eq!(from_wei(market.token_balance(token, buyer)), "499950");
        assert_eq!(from_wei(market.token_balance(token, second_buyer)), "499950");
    }

    #[test]
    fn test_example_balances_after_one_purchase() {
        let (mut market, token, id) = setup(100, 50);
        let (buyer, author) = (account(1), account(5));
        let buyer_before = market.token_balance(token, buyer);

        market.purchase(buyer, id).unwrap();

        assert_eq!(market.copies(author, id), 99);
        assert_eq!(market.copies(buyer, id), 1);
        assert_eq!(market.token_balance(token, author), to_wei(50));
        assert_eq!(market.token_balance(token, buyer), buyer_before - to_wei(50));
    }

    #[test]
    fn test_purchase_receipt() {
        let (mut market, token, id) = setup(100, 50);
        let receipt = market.purchase(account(1), id).unwrap();

        assert_eq!(receipt.target, market.market.store_front);
        assert_eq!(receipt.caller, account(1));
        let purchase = receipt.purchase().unwrap();
        assert_eq!(purchase.version_id, id);
        assert_eq!(purchase.buyer, account(1));
        assert_eq!(purchase.author, account(5));
        assert_eq!(purchase.price, to_wei(50));
        assert_eq!(purchase.currency, token);
    }

    #[test]
    fn test_purchase_logs_both_legs_in_order() {
        let (mut market, token, id) = setup(100, 50);
        let (buyer, author) = (account(1), account(5));
        let store_front = market.market.store_front;
        let book_store = market.market.book_store;

        let receipt = market.purchase(buyer, id).unwrap();
        let logs: Vec<_> = receipt
            .logs
            .iter()
            .map(|log| (log.address, log.event.clone()))
            .collect();

        assert_eq!(
            logs,
            vec![
                (
                    token,
                    ChainEvent::Token(TokenEvent::Approval {
                        owner: buyer,
                        spender: store_front,
                        value: to_wei(1_000_000 - 50),
                    })
                ),
                (
                    token,
                    ChainEvent::Token(TokenEvent::Transfer {
                        from: buyer,
                        to: author,
                        value: to_wei(50),
                    })
                ),
                (
                    book_store,
                    ChainEvent::BookStore(BookStoreEvent::TransferSingle {
                        operator: store_front,
                        from: author,
                        to: buyer,
                        version_id: id,
                        value: 1,
                    })
                ),
                (
                    store_front,
                    ChainEvent::StoreFront(StoreFrontEvent::CopyPurchased {
                        version_id: id,
                        buyer,
                        author,
                        price: to_wei(50),
                        currency: token,
                    })
                ),
            ]
        );
    }

    #[test]
    fn test_allowance_is_spent_by_purchases() {
        let (mut market, token, id) = setup(100, 50);
        market.purchase(account(1), id).unwrap();
        market.purchase(account(1), id).unwrap();

        let allowance = market
            .chain
            .purchase_token(token)
            .unwrap()
            .allowance(account(1), market.market.store_front);
        assert_eq!(allowance, to_wei(1_000_000 - 100));
        assert_eq!(market.copies(account(1), id), 2);
    }

    #[test]
    fn test_unlimited_allowance_is_never_spent() {
        let (mut market, token, id) = setup(100, 50);
        market.approve_payment(token, account(1), U256::MAX).unwrap();

        let receipt = market.purchase(account(1), id).unwrap();

        let allowance = market
            .chain
            .purchase_token(token)
            .unwrap()
            .allowance(account(1), market.market.store_front);
        assert_eq!(allowance, U256::MAX);
        assert!(!receipt.logs.iter().any(|log| matches!(
            log.event,
            ChainEvent::Token(TokenEvent::Approval { .. })
        )));
    }

    #[test]
    fn test_purchased_copy_can_be_given_away() {
        let (mut market, _token, id) = setup(100, 50);
        market.purchase(account(1), id).unwrap();

        market
            .chain
            .execute(
                account(1),
                Call::SafeTransferFrom {
                    book_store: market.market.book_store,
                    from: account(1),
                    to: account(2),
                    version_id: id,
                    amount: 1,
                },
            )
            .unwrap();

        assert_eq!(market.copies(account(1), id), 0);
        assert_eq!(market.copies(account(2), id), 1);
    }

    #[test]
    fn test_versions_priced_in_different_tokens() {
        let mut market = TestMarket::new().unwrap();
        let (buyer, author) = (account(1), account(5));
        let pages = market.deploy_token(buyer, 1_000).unwrap();
        let coins = market.deploy_token(buyer, 1_000).unwrap();
        market.approve_payment(pages, buyer, U256::MAX).unwrap();
        market.approve_payment(coins, buyer, U256::MAX).unwrap();

        let cheap = market.publish(author, 5, to_wei(1), pages).unwrap();
        let dear = market.publish(author, 5, to_wei(300), coins).unwrap();
        market.approve_store_front(author).unwrap();

        market.purchase(buyer, cheap).unwrap();
        market.purchase(buyer, dear).unwrap();

        assert_eq!(market.token_balance(pages, author), to_wei(1));
        assert_eq!(market.token_balance(coins, author), to_wei(300));
        assert_eq!(market.copies(buyer, cheap), 1);
        assert_eq!(market.copies(buyer, dear), 1);
    }
}

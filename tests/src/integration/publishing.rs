//! # Publishing
//!
//! Authors mint versions; ids are sequential across authors and the sale
//! terms read back exactly as published.

#[cfg(test)]
mod tests {
    use crate::fixtures::{account, usdc, TestMarket};
    use fl_01_book_store::events::BookStoreEvent;
    use folio_runtime::prelude::*;

    fn price_of(market: &TestMarket, version_id: VersionId) -> U256 {
        market
            .chain
            .book_store(market.market.book_store)
            .unwrap()
            .book_version_price(version_id)
            .unwrap()
    }

    #[test]
    fn test_author_receives_every_copy() {
        let mut market = TestMarket::new().unwrap();
        let author = account(5);

        let id = market.publish(author, 100, to_wei(50), usdc()).unwrap();

        assert_eq!(id, 1);
        assert_eq!(market.copies(author, 1), 100);
        assert_eq!(market.copies(account(1), 1), 0);
    }

    #[test]
    fn test_version_ids_increase() {
        let mut market = TestMarket::new().unwrap();
        let author = account(3);

        market.publish(author, 75, to_wei(50), usdc()).unwrap();
        market.publish(author, 50, to_wei(50), usdc()).unwrap();

        assert_eq!(market.copies(author, 1), 75);
        assert_eq!(market.copies(author, 2), 50);
    }

    #[test]
    fn test_ids_are_shared_between_authors() {
        let mut market = TestMarket::new().unwrap();

        assert_eq!(market.publish(account(3), 1, to_wei(1), usdc()).unwrap(), 1);
        assert_eq!(market.publish(account(5), 1, to_wei(1), usdc()).unwrap(), 2);
        assert_eq!(market.publish(account(3), 1, to_wei(1), usdc()).unwrap(), 3);

        let store = market.chain.book_store(market.market.book_store).unwrap();
        assert_eq!(store.book_version_author(2).unwrap(), account(5));
        assert_eq!(store.latest_version_id(), Some(3));
    }

    #[test]
    fn test_price_and_currency_read_back() {
        let mut market = TestMarket::new().unwrap();
        let author = account(5);

        market.publish(author, 100, to_wei(50), usdc()).unwrap();
        assert_eq!(from_wei(price_of(&market, 1)), "50");

        market.publish(author, 100, to_wei(100), usdc()).unwrap();
        assert_eq!(from_wei(price_of(&market, 2)), "100");

        let currency = market
            .chain
            .book_store(market.market.book_store)
            .unwrap()
            .book_version_currency(2)
            .unwrap();
        assert_eq!(
            currency.to_checksum(),
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
        );
    }

    #[test]
    fn test_unknown_version_is_not_found() {
        let market = TestMarket::new().unwrap();
        let store = market.chain.book_store(market.market.book_store).unwrap();
        let err = store.book_version_price(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(store.balance_of(account(5), 1), 0);
    }

    #[test]
    fn test_empty_or_free_editions_rejected_by_default() {
        let mut market = TestMarket::new().unwrap();

        let err = market.publish(account(5), 0, to_wei(50), usdc()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = market.publish(account(5), 10, U256::zero(), usdc()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        // Nothing was assigned.
        assert_eq!(market.publish(account(5), 10, to_wei(1), usdc()).unwrap(), 1);
    }

    #[test]
    fn test_free_editions_when_configured() {
        let mut config = ChainConfig::default();
        config.book_store.allow_free_editions = true;
        let mut market = TestMarket::with_config(config).unwrap();

        let id = market.publish(account(5), 10, U256::zero(), usdc()).unwrap();
        assert_eq!(market.copies(account(5), id), 10);
    }

    #[test]
    fn test_publish_logs() {
        let mut market = TestMarket::new().unwrap();
        let author = account(5);
        let receipt = market
            .chain
            .execute(
                author,
                Call::Publish {
                    book_store: market.market.book_store,
                    quantity: 100,
                    price: to_wei(50),
                    currency: usdc(),
                },
            )
            .unwrap();

        let events: Vec<_> = receipt.logs.iter().map(|log| log.event.clone()).collect();
        assert_eq!(
            events,
            vec![
                ChainEvent::BookStore(BookStoreEvent::BookPublished {
                    version_id: 1,
                    author,
                    price: to_wei(50),
                    currency: usdc(),
                    quantity: 100,
                }),
                ChainEvent::BookStore(BookStoreEvent::TransferSingle {
                    operator: author,
                    from: Address::ZERO,
                    to: author,
                    version_id: 1,
                    value: 100,
                }),
            ]
        );
        assert!(receipt
            .logs
            .iter()
            .all(|log| log.address == market.market.book_store));
    }

    #[test]
    fn test_metadata_uri() {
        let mut market = TestMarket::new().unwrap();
        market.publish(account(5), 1, to_wei(1), usdc()).unwrap();
        let uri = market
            .chain
            .book_store(market.market.book_store)
            .unwrap()
            .uri(1)
            .unwrap();
        assert_eq!(uri, format!("folio://versions/{:064x}.json", 1));
    }
}

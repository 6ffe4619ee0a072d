//! # Security
//!
//! Privileged operations reject every caller but the one they are meant for,
//! with the exact revert reasons external clients match on.

#[cfg(test)]
mod tests {
    use crate::fixtures::{account, init_test_tracing, usdc, TestMarket};
    use folio_runtime::prelude::*;

    #[test]
    fn test_only_store_front_may_transfer_from_author() {
        let mut market = TestMarket::new().unwrap();
        market.publish(account(5), 100, to_wei(50), usdc()).unwrap();

        let err = market
            .chain
            .execute(
                account(3),
                Call::TransferFromAuthor {
                    book_store: market.market.book_store,
                    to: account(3),
                    version_id: 1,
                },
            )
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Method can only be called by Store Front contract."
        );
        assert_eq!(err.kind(), ErrorKind::AccessDenied);
        assert_eq!(market.copies(account(3), 1), 0);
        assert_eq!(market.copies(account(5), 1), 100);
    }

    #[test]
    fn test_author_cannot_bypass_store_front_either() {
        let mut market = TestMarket::new().unwrap();
        market.publish(account(5), 100, to_wei(50), usdc()).unwrap();
        market.approve_store_front(account(5)).unwrap();

        let err = market
            .chain
            .execute(
                account(5),
                Call::TransferFromAuthor {
                    book_store: market.market.book_store,
                    to: account(3),
                    version_id: 1,
                },
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessDenied);
    }

    #[test]
    fn test_only_owner_sets_store_front() {
        init_test_tracing();
        let mut chain = Chain::default();
        let owner = account(0);
        let store_front = chain.deploy_store_front(owner);
        let book_store = chain.deploy_book_store(owner);
        chain
            .execute(
                owner,
                Call::SetBookStore {
                    store_front,
                    book_store,
                },
            )
            .unwrap();

        let err = chain
            .execute(
                account(7),
                Call::SetStoreFront {
                    book_store,
                    store_front,
                },
            )
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "BookStore: Only contract owner can set storeFront"
        );
        assert_eq!(err.kind(), ErrorKind::AccessDenied);
        assert_eq!(chain.book_store(book_store).unwrap().store_front(), None);
    }

    #[test]
    fn test_only_owner_sets_book_store() {
        init_test_tracing();
        let mut chain = Chain::default();
        let store_front = chain.deploy_store_front(account(0));
        let book_store = chain.deploy_book_store(account(0));

        let err = chain
            .execute(
                account(7),
                Call::SetBookStore {
                    store_front,
                    book_store,
                },
            )
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "StoreFront: Only contract owner can set bookStore"
        );
        assert_eq!(chain.store_front(store_front).unwrap().book_store(), None);
    }

    #[test]
    fn test_owner_can_rewire_store_front() {
        let mut market = TestMarket::new().unwrap();
        let (buyer, author) = (account(1), account(5));
        let token = market.deploy_token(buyer, 1_000).unwrap();
        let id = market.publish(author, 10, to_wei(1), token).unwrap();
        market.approve_store_front(author).unwrap();
        market.approve_payment(token, buyer, U256::MAX).unwrap();

        // A second front takes over; the old one loses its privilege.
        let old_front = market.market.store_front;
        let new_front = market.chain.deploy_store_front(account(0));
        market
            .chain
            .execute(
                account(0),
                Call::SetBookStore {
                    store_front: new_front,
                    book_store: market.market.book_store,
                },
            )
            .unwrap();
        market
            .chain
            .execute(
                account(0),
                Call::SetStoreFront {
                    book_store: market.market.book_store,
                    store_front: new_front,
                },
            )
            .unwrap();

        let err = market.purchase(buyer, id).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Method can only be called by Store Front contract."
        );
        assert_eq!(market.token_balance(token, author), U256::zero());

        // The new front still needs its own approvals.
        market.market.store_front = new_front;
        let err = market.purchase(buyer, id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientBalance);

        market.approve_payment(token, buyer, U256::MAX).unwrap();
        let err = market.purchase(buyer, id).unwrap_err();
        assert_eq!(err.to_string(), "ERC1155: caller is not token owner or approved");

        market.approve_store_front(author).unwrap();
        market.purchase(buyer, id).unwrap();
        assert_eq!(market.copies(buyer, id), 1);
        assert_ne!(old_front, new_front);
    }

    #[test]
    fn test_purchase_needs_author_approval() {
        let mut market = TestMarket::new().unwrap();
        let (buyer, author) = (account(1), account(5));
        let token = market.deploy_token(buyer, 1_000).unwrap();
        market.approve_payment(token, buyer, U256::MAX).unwrap();
        let id = market.publish(author, 10, to_wei(1), token).unwrap();

        let err = market.purchase(buyer, id).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::AccessDenied);
        assert_eq!(market.copies(author, id), 10);
        assert_eq!(market.token_balance(token, author), U256::zero());
    }

    #[test]
    fn test_approval_can_be_revoked() {
        let mut market = TestMarket::new().unwrap();
        let (buyer, author) = (account(1), account(5));
        let token = market.deploy_token(buyer, 1_000).unwrap();
        market.approve_payment(token, buyer, U256::MAX).unwrap();
        let id = market.publish(author, 10, to_wei(1), token).unwrap();
        market.approve_store_front(author).unwrap();
        market.purchase(buyer, id).unwrap();

        market
            .chain
            .execute(
                author,
                Call::SetApprovalForAll {
                    book_store: market.market.book_store,
                    operator: market.market.store_front,
                    approved: false,
                },
            )
            .unwrap();

        assert!(market.purchase(buyer, id).is_err());
        assert_eq!(market.copies(buyer, id), 1);
    }

    #[test]
    fn test_self_approval_rejected() {
        let mut market = TestMarket::new().unwrap();
        let err = market
            .chain
            .execute(
                account(5),
                Call::SetApprovalForAll {
                    book_store: market.market.book_store,
                    operator: account(5),
                    approved: true,
                },
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "ERC1155: setting approval status for self");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_strangers_cannot_move_copies() {
        let mut market = TestMarket::new().unwrap();
        market.publish(account(5), 10, to_wei(1), usdc()).unwrap();

        let err = market
            .chain
            .execute(
                account(7),
                Call::SafeTransferFrom {
                    book_store: market.market.book_store,
                    from: account(5),
                    to: account(7),
                    version_id: 1,
                    amount: 1,
                },
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessDenied);
        assert_eq!(market.copies(account(7), 1), 0);
    }
}

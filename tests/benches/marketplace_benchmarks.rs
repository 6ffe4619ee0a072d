//! # Folio Marketplace Benchmarks
//!
//! | Operation | What dominates |
//! |-----------|----------------|
//! | publish | Version insert and mint |
//! | purchase | World-state snapshot plus both legs |
//! | reverted purchase | Snapshot restore |

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use folio_runtime::genesis::compute_contract_address;
use folio_runtime::prelude::*;
use folio_tests::fixtures::{account, usdc, TestMarket};

fn bench_address_derivation(c: &mut Criterion) {
    let deployer = account(0);
    c.bench_function("compute_contract_address", |b| {
        b.iter(|| black_box(compute_contract_address(deployer, black_box(1_000))))
    });
}

fn bench_publish(c: &mut Criterion) {
    let mut group = c.benchmark_group("book-store");
    group.bench_function("publish", |b| {
        b.iter_batched(
            || TestMarket::new().unwrap(),
            |mut market| black_box(market.publish(account(5), 100, to_wei(50), usdc()).unwrap()),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

/// Market with `versions` published versions and a buyer ready to buy.
fn funded_market(versions: u64) -> (TestMarket, VersionId) {
    let mut market = TestMarket::new().unwrap();
    let token = market.deploy_token(account(1), 1_000_000).unwrap();
    market.approve_payment(token, account(1), U256::MAX).unwrap();
    let mut last = 0;
    for _ in 0..versions {
        last = market.publish(account(5), 1_000, to_wei(1), token).unwrap();
    }
    market.approve_store_front(account(5)).unwrap();
    (market, last)
}

fn bench_purchase(c: &mut Criterion) {
    let mut group = c.benchmark_group("store-front");

    // Snapshot cost grows with the state.
    for versions in [1u64, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("purchase", versions),
            &versions,
            |b, &versions| {
                let (mut market, id) = funded_market(versions);
                b.iter(|| black_box(market.purchase(account(1), id).is_ok()))
            },
        );
    }

    group.bench_function("purchase_reverted", |b| {
        let (mut market, _) = funded_market(10);
        b.iter(|| black_box(market.purchase(account(2), 1).is_err()))
    });

    group.finish();
}

criterion_group!(benches, bench_address_derivation, bench_publish, bench_purchase);
criterion_main!(benches);

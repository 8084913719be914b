//! Benchmarks for feed ranking
//!
//! Run with: cargo bench --package ranker

use catalog::{mock_catalog, LikedIds, UserPreferences};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ranker::FeedRanker;

const CATALOG_SIZE: usize = 5_000;

fn bench_cold_start(c: &mut Criterion) {
    let catalog = mock_catalog(CATALOG_SIZE, 42);
    let ranker = FeedRanker::new();

    let mut preferences = UserPreferences::default();
    preferences.styles.insert("minimal".to_string());
    preferences.colors.insert("navy".to_string());
    preferences.brands.insert("COS".to_string());
    let liked_ids = LikedIds::new();

    c.bench_function("rank_cold_start", |b| {
        b.iter(|| {
            let feed = ranker.rank(
                black_box(&preferences),
                black_box(&liked_ids),
                black_box(&catalog),
            );
            black_box(feed)
        })
    });
}

fn bench_warm_start(c: &mut Criterion) {
    let catalog = mock_catalog(CATALOG_SIZE, 42);
    let ranker = FeedRanker::new();

    let preferences = UserPreferences::default();
    // Every 50th product liked
    let liked_ids: LikedIds = (1..=CATALOG_SIZE).step_by(50).map(|i| i.to_string()).collect();

    c.bench_function("rank_warm_start", |b| {
        b.iter(|| {
            let feed = ranker.rank(
                black_box(&preferences),
                black_box(&liked_ids),
                black_box(&catalog),
            );
            black_box(feed)
        })
    });
}

criterion_group!(benches, bench_cold_start, bench_warm_start);
criterion_main!(benches);

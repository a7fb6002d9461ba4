//! Benchmarks for one dashboard interaction
//!
//! Run with: cargo bench --package query-engine
//!
//! Uses a synthetic dataset roughly the size of the cleaned movie CSV
//! (~10k rows), so no data file is needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{CategoryValue, Dataset, Movie};
use query_engine::{filter, rank, ExploreSettings, QueryEngine, Selection};
use std::sync::Arc;

const GENRES: [&str; 5] = ["Action", "Animation", "Comedy", "Drama", "Horror"];
const VOTES: [&str; 4] = ["average", "below_avg", "not_popular", "popular"];

fn synthetic_dataset(rows: usize) -> Dataset {
    let movies = (0..rows)
        .map(|i| Movie {
            title: format!("Movie {i}"),
            genre: Some(GENRES[i % GENRES.len()].to_string()),
            release_date: Some(CategoryValue::Integer(1990 + (i % 33) as i64)),
            vote_average: Some(CategoryValue::from(VOTES[i % VOTES.len()])),
            popularity: ((i * 7919) % 5000) as f64 + 0.5,
            vote_count: Some((i % 1000) as u64),
        })
        .collect();
    Dataset::from_movies(movies)
}

fn bench_filter(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    let selection = Selection::new("Action", 2020i64, "popular");

    c.bench_function("filter_selection", |b| {
        b.iter(|| {
            let view = filter(black_box(&dataset), black_box(&selection));
            black_box(view.len())
        })
    });
}

fn bench_rank_all(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    let view = query_engine::FilterPipeline::new().apply(&dataset);

    c.bench_function("rank_all_rows", |b| {
        b.iter(|| {
            let ranked = rank(black_box(&view));
            black_box(ranked.len())
        })
    });
}

fn bench_explore(c: &mut Criterion) {
    let engine = QueryEngine::new(Arc::new(synthetic_dataset(10_000)));
    let selection = Selection::new("Drama", 2010i64, "average");
    let settings = ExploreSettings::default().with_top(10);

    c.bench_function("explore_selection", |b| {
        b.iter(|| {
            let exploration = engine.explore(black_box(&selection), &settings);
            black_box(exploration.top.len())
        })
    });
}

criterion_group!(benches, bench_filter, bench_rank_all, bench_explore);
criterion_main!(benches);

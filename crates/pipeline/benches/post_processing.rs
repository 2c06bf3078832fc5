//! Benchmarks for result post-processing
//!
//! Run with: cargo bench --package pipeline
//!
//! Simulates the generic search path: one text search page plus a handful
//! of keyword discovery pages with heavy overlap.

use catalog::MovieRecord;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{FilterPipeline, merge_unique, rank_by_popularity};

fn source_lists() -> Vec<Vec<MovieRecord>> {
    (0..6u64)
        .map(|page| {
            (0..20u64)
                .map(|i| {
                    let id = page * 10 + i;
                    let record = MovieRecord::new(id, format!("Movie {id}"))
                        .with_popularity((id * 37 % 101) as f64);
                    if id % 7 == 0 {
                        record
                    } else {
                        record.with_poster(format!("/{id}.jpg"))
                    }
                })
                .collect()
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let lists = source_lists();

    c.bench_function("merge_unique", |b| {
        b.iter(|| black_box(merge_unique(black_box(lists.clone()))))
    });
}

fn bench_full_post_processing(c: &mut Criterion) {
    let lists = source_lists();
    let pipeline = FilterPipeline::displayable();

    c.bench_function("merge_filter_rank", |b| {
        b.iter(|| {
            let merged = merge_unique(black_box(lists.clone()));
            black_box(rank_by_popularity(pipeline.apply(merged), 20))
        })
    });
}

criterion_group!(benches, bench_merge, bench_full_post_processing);
criterion_main!(benches);

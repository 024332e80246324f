use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use perc_search::{SearchGraph, Searcher};
use std::time::{Duration, Instant};

fn bench_structural_key(c: &mut Criterion) {
    let mut g = c.benchmark_group("perc_search_canonical");
    for &k in &[8u32, 32u32] {
        let graph = perc_bench::colored_fixture(0xBEEF, k, 0.3);
        g.bench_with_input(BenchmarkId::new("capture_and_key", k), &graph, |b, graph| {
            b.iter(|| {
                let snapshot = SearchGraph::capture(black_box(graph));
                black_box(snapshot.structural_key())
            })
        });
    }
    g.finish();
}

fn bench_removal_search(c: &mut Criterion) {
    let mut g = c.benchmark_group("perc_search_expectimax");
    // Small enough to solve exactly inside the measurement loop.
    for &k in &[2u32, 3u32] {
        let graph = perc_bench::colored_fixture(0xBEEF, k, 0.4);
        g.bench_with_input(BenchmarkId::new("best_removal_move", k), &graph, |b, graph| {
            b.iter(|| {
                let mut searcher = Searcher::new();
                let deadline = Instant::now() + Duration::from_secs(30);
                black_box(searcher.best_removal_move(black_box(graph), 0, deadline).unwrap())
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_structural_key, bench_removal_search);
criterion_main!(benches);

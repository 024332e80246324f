//! perc-bench: criterion micro-benchmarks plus shared fixture helpers.

use perc_core::{binomial_random_graph, Color, Graph};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// Deterministic benchmark fixture: a random graph with `2k` vertices and
/// alternating colors.
pub fn colored_fixture(seed: u64, k: u32, p: f64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = binomial_random_graph(&mut rng, k, p);
    let indices: Vec<u32> = graph.vertices().iter().map(|v| v.index).collect();
    for (i, index) in indices.into_iter().enumerate() {
        graph.set_color(index, Color::Owned((i % 2) as u8));
    }
    graph
}

/// Same generator, all vertices left uncolored.
pub fn uncolored_fixture(seed: u64, k: u32, p: f64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    binomial_random_graph(&mut rng, k, p)
}

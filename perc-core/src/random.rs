//! Binomial random graphs for the benchmark harness.

use crate::graph::{Color, Edge, Graph, Vertex};
use rand::Rng;

/// Generate a binomial random graph with `2k` vertices, including each
/// unordered pair as an edge independently with probability `p`.
pub fn binomial_random_graph(rng: &mut impl Rng, k: u32, p: f64) -> Graph {
    let n = 2 * k;
    let verts: Vec<Vertex> = (0..n)
        .map(|index| Vertex {
            index,
            color: Color::Uncolored,
        })
        .collect();

    let mut edges = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen::<f64>() < p {
                edges.push(Edge::ordered(a, b));
            }
        }
    }

    Graph::from_parts(verts, edges)
}

//! Percolation: vertex removal plus the one-level isolation cascade.

use crate::graph::{Graph, VertexId};
use std::collections::HashSet;

/// Remove `v`, every edge incident to it, and then every remaining vertex
/// whose incident-edge count has dropped to zero, i.e. every vertex that had
/// `v` as its only neighbor.
///
/// A single sweep is enough: deleting `v`'s edges is the only new source of
/// isolation, so the cascade never needs to iterate to a fixpoint. Vertices
/// that were already isolated before the move are left alone; their edge
/// count did not change.
pub fn percolate(graph: &mut Graph, v: VertexId) {
    let neighbors: HashSet<VertexId> = graph.incident_edges(v).map(|e| e.other(v)).collect();

    graph.edges.retain(|e| !e.touches(v));
    graph.verts.retain(|u| u.index != v);

    let connected: HashSet<VertexId> = graph
        .edges
        .iter()
        .flat_map(|e| [e.a(), e.b()])
        .collect();
    graph
        .verts
        .retain(|u| !neighbors.contains(&u.index) || connected.contains(&u.index));
}

//! Canonical immutable positions: search values and transposition-cache keys.

use perc_core::{Color, Graph, Player, VertexId};
use std::hash::{Hash, Hasher};

/// Immutable snapshot of a position in canonical order: vertices ascending by
/// index with their colors, edges ascending by normalized endpoint pair.
///
/// All move operations are pure and return a new graph, so cached entries
/// stay valid while sibling branches are explored. Equality is structural.
/// Hashing goes through [`structural_key`], so two distinct positions may
/// share a hash bucket; the map resolves that with the structural comparison.
///
/// [`structural_key`]: SearchGraph::structural_key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraph {
    verts: Vec<(VertexId, Color)>,
    edges: Vec<(VertexId, VertexId)>,
}

impl SearchGraph {
    /// Snapshot the live graph.
    pub fn capture(graph: &Graph) -> Self {
        let verts = graph
            .vertices()
            .iter()
            .map(|v| (v.index, v.color))
            .collect();
        let edges = graph.edges().iter().map(|e| (e.a(), e.b())).collect();
        Self { verts, edges }
    }

    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    pub fn uncolored(&self) -> Vec<VertexId> {
        self.verts
            .iter()
            .filter(|(_, c)| c.is_uncolored())
            .map(|&(v, _)| v)
            .collect()
    }

    pub fn owned_by(&self, player: Player) -> Vec<VertexId> {
        self.verts
            .iter()
            .filter(|&&(_, c)| c == Color::Owned(player))
            .map(|&(v, _)| v)
            .collect()
    }

    /// New graph with `v` claimed by `player`.
    pub fn with_color(&self, v: VertexId, player: Player) -> Self {
        let verts = self
            .verts
            .iter()
            .map(|&(u, c)| {
                if u == v {
                    (u, Color::Owned(player))
                } else {
                    (u, c)
                }
            })
            .collect();
        Self {
            verts,
            edges: self.edges.clone(),
        }
    }

    /// Pure percolation: new graph without `v`, its incident edges, and every
    /// vertex those deletions left with no edges. Same one-pass cascade rule
    /// as the live operator; the input is untouched.
    pub fn percolate(&self, v: VertexId) -> Self {
        let neighbors: Vec<VertexId> = self
            .edges
            .iter()
            .filter(|&&(a, b)| a == v || b == v)
            .map(|&(a, b)| if a == v { b } else { a })
            .collect();
        let edges: Vec<(VertexId, VertexId)> = self
            .edges
            .iter()
            .copied()
            .filter(|&(a, b)| a != v && b != v)
            .collect();
        let verts = self
            .verts
            .iter()
            .copied()
            .filter(|&(u, _)| u != v)
            .filter(|&(u, _)| {
                !neighbors.contains(&u) || edges.iter().any(|&(a, b)| a == u || b == u)
            })
            .collect();
        Self { verts, edges }
    }

    /// 64-bit structural key. Vertex colors fold in base 3 in index order,
    /// and each edge contributes one rotated bit derived from its endpoint
    /// pair, so the key reacts to any color flip or edge change.
    pub fn structural_key(&self) -> u64 {
        let n = self.verts.len() as u64;

        let mut vertex_acc = 0u64;
        for &(_, color) in &self.verts {
            vertex_acc = vertex_acc.wrapping_mul(3).wrapping_add(color.trit());
        }

        let mut edge_acc = 0u64;
        for &(a, b) in &self.edges {
            let exp = (a as u64).wrapping_add(n.wrapping_mul(b as u64));
            edge_acc = edge_acc.wrapping_add(1u64.rotate_left((exp % 64) as u32));
        }

        let scale = 3u64.wrapping_pow(self.verts.len() as u32 + 1);
        vertex_acc.wrapping_add(edge_acc.wrapping_mul(scale))
    }
}

impl Hash for SearchGraph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_key());
    }
}

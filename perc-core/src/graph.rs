//! Live graph model: vertices, edges, and the mutable match graph.
//!
//! The live graph is what the rules engine mutates during a match (coloring
//! writes colors, percolation deletes vertices and edges). Vertices and edges
//! are created once at construction and only ever removed afterwards.

use thiserror::Error;

/// Stable vertex identity, assigned at graph construction.
pub type VertexId = u32;

/// Player index, 0 or 1.
pub type Player = u8;

/// Tri-state vertex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Uncolored,
    Owned(Player),
}

impl Color {
    pub fn is_uncolored(self) -> bool {
        matches!(self, Color::Uncolored)
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Color::Owned(p) => Some(p),
            Color::Uncolored => None,
        }
    }

    /// Trit used by the canonical structural key: uncolored=0, player 0=1, player 1=2.
    pub fn trit(self) -> u64 {
        match self {
            Color::Uncolored => 0,
            Color::Owned(p) => 1 + p as u64,
        }
    }
}

/// Graph construction errors. These are fatal: a malformed graph is rejected
/// before any match begins.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("self-loop on vertex {v}")]
    SelfLoop { v: VertexId },
    #[error("duplicate vertex index {v}")]
    DuplicateVertex { v: VertexId },
    #[error("duplicate edge {{{a}, {b}}}")]
    DuplicateEdge { a: VertexId, b: VertexId },
    #[error("edge endpoint {v} is not in the vertex set")]
    MissingEndpoint { v: VertexId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub index: VertexId,
    pub color: Color,
}

/// Unordered vertex pair. Endpoints are stored normalized (`a < b`), so
/// `Edge::new(a, b) == Edge::new(b, a)` holds for derived equality and hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId) -> Result<Self, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop { v: a });
        }
        Ok(Self::ordered(a, b))
    }

    pub(crate) fn ordered(a: VertexId, b: VertexId) -> Self {
        debug_assert_ne!(a, b);
        if a < b {
            Edge { a, b }
        } else {
            Edge { a: b, b: a }
        }
    }

    pub fn a(&self) -> VertexId {
        self.a
    }

    pub fn b(&self) -> VertexId {
        self.b
    }

    pub fn touches(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }

    /// The endpoint opposite `v`.
    pub fn other(&self, v: VertexId) -> VertexId {
        if self.a == v {
            self.b
        } else {
            self.a
        }
    }
}

/// Mutable match graph. Vertices are kept sorted by index, edges by their
/// normalized endpoint pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub(crate) verts: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
}

impl Graph {
    /// Build and validate a graph. All vertices start uncolored.
    pub fn new(
        vertices: impl IntoIterator<Item = VertexId>,
        edge_pairs: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self, GraphError> {
        let mut verts: Vec<Vertex> = vertices
            .into_iter()
            .map(|index| Vertex {
                index,
                color: Color::Uncolored,
            })
            .collect();
        verts.sort_by_key(|v| v.index);
        if let Some(w) = verts.windows(2).find(|w| w[0].index == w[1].index) {
            return Err(GraphError::DuplicateVertex { v: w[0].index });
        }

        let mut edges = Vec::new();
        for (a, b) in edge_pairs {
            let e = Edge::new(a, b)?;
            for v in [e.a, e.b] {
                if verts.binary_search_by_key(&v, |u| u.index).is_err() {
                    return Err(GraphError::MissingEndpoint { v });
                }
            }
            edges.push(e);
        }
        edges.sort_by_key(|e| (e.a, e.b));
        if let Some(w) = edges.windows(2).find(|w| w[0] == w[1]) {
            return Err(GraphError::DuplicateEdge {
                a: w[0].a,
                b: w[0].b,
            });
        }

        Ok(Self { verts, edges })
    }

    /// Internal constructor for generators that uphold the invariants
    /// themselves.
    pub(crate) fn from_parts(mut verts: Vec<Vertex>, mut edges: Vec<Edge>) -> Self {
        verts.sort_by_key(|v| v.index);
        edges.sort_by_key(|e| (e.a, e.b));
        Self { verts, edges }
    }

    pub fn vertex(&self, index: VertexId) -> Option<&Vertex> {
        self.verts
            .binary_search_by_key(&index, |v| v.index)
            .ok()
            .map(|i| &self.verts[i])
    }

    /// Vertices in ascending index order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.verts
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    pub fn incident_edges(&self, v: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.touches(v))
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.incident_edges(v).count()
    }

    pub fn uncolored_count(&self) -> usize {
        self.verts.iter().filter(|v| v.color.is_uncolored()).count()
    }

    pub fn owned_count(&self, player: Player) -> usize {
        self.verts
            .iter()
            .filter(|v| v.color == Color::Owned(player))
            .count()
    }

    /// Set a vertex color. Returns false if the index is absent.
    pub fn set_color(&mut self, index: VertexId, color: Color) -> bool {
        match self.verts.binary_search_by_key(&index, |v| v.index) {
            Ok(i) => {
                self.verts[i].color = color;
                true
            }
            Err(_) => false,
        }
    }
}

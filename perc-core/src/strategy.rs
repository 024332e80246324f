//! Strategy interface and the random/greedy baseline players.

use crate::graph::{Color, Graph, Player, VertexId};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("no legal move for player {player}")]
    NoLegalMove { player: Player },
}

/// A decision-maker for one seat of a match.
///
/// Implementations must be total over any graph/player pair with at least one
/// legal move; the engine never calls a strategy when no legal move exists.
/// The graph argument is the engine's deep copy — mutating it has no effect
/// on the match.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Pick an uncolored vertex to claim.
    fn choose_vertex_to_color(
        &mut self,
        graph: Graph,
        player: Player,
    ) -> Result<VertexId, StrategyError>;

    /// Pick one of the player's own colored vertices to percolate.
    fn choose_vertex_to_remove(
        &mut self,
        graph: Graph,
        player: Player,
    ) -> Result<VertexId, StrategyError>;
}

/// Plays a legal move uniformly at random.
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, legal: Vec<VertexId>, player: Player) -> Result<VertexId, StrategyError> {
        if legal.is_empty() {
            return Err(StrategyError::NoLegalMove { player });
        }
        Ok(legal[self.rng.gen_range(0..legal.len())])
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_vertex_to_color(
        &mut self,
        graph: Graph,
        player: Player,
    ) -> Result<VertexId, StrategyError> {
        let legal: Vec<VertexId> = graph
            .vertices()
            .iter()
            .filter(|v| v.color.is_uncolored())
            .map(|v| v.index)
            .collect();
        self.pick(legal, player)
    }

    fn choose_vertex_to_remove(
        &mut self,
        graph: Graph,
        player: Player,
    ) -> Result<VertexId, StrategyError> {
        let legal: Vec<VertexId> = graph
            .vertices()
            .iter()
            .filter(|v| v.color == Color::Owned(player))
            .map(|v| v.index)
            .collect();
        self.pick(legal, player)
    }
}

/// Weighting for the removal heuristic: score a vertex as
/// `offense * cross_edges - defense * same_edges`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicWeights {
    pub offense: f64,
    pub defense: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            offense: 1.0,
            defense: 0.0,
        }
    }
}

/// Highest-degree uncolored vertex; ties break to the lowest index.
pub fn greedy_color_choice(graph: &Graph, _player: Player) -> Option<VertexId> {
    let mut best: Option<(usize, VertexId)> = None;
    for v in graph.vertices().iter().filter(|v| v.color.is_uncolored()) {
        let d = graph.degree(v.index);
        if best.map_or(true, |(bd, _)| d > bd) {
            best = Some((d, v.index));
        }
    }
    best.map(|(_, v)| v)
}

/// Own vertex maximizing the offense/defense edge score; ties break to the
/// lowest index.
pub fn greedy_removal_choice(
    graph: &Graph,
    player: Player,
    weights: &HeuristicWeights,
) -> Option<VertexId> {
    let mut best: Option<(f64, VertexId)> = None;
    for v in graph
        .vertices()
        .iter()
        .filter(|v| v.color == Color::Owned(player))
    {
        let mut cross = 0usize;
        let mut same = 0usize;
        for e in graph.incident_edges(v.index) {
            let other = graph.vertex(e.other(v.index));
            if other.map(|u| u.color) == Some(Color::Owned(player)) {
                same += 1;
            } else {
                cross += 1;
            }
        }
        let score = weights.offense * cross as f64 - weights.defense * same as f64;
        if best.map_or(true, |(bs, _)| score > bs) {
            best = Some((score, v.index));
        }
    }
    best.map(|(_, v)| v)
}

/// Degree/offense heuristic player, no recursion.
pub struct GreedyStrategy {
    weights: HeuristicWeights,
}

impl GreedyStrategy {
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }
}

impl Default for GreedyStrategy {
    fn default() -> Self {
        Self::new(HeuristicWeights::default())
    }
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose_vertex_to_color(
        &mut self,
        graph: Graph,
        player: Player,
    ) -> Result<VertexId, StrategyError> {
        greedy_color_choice(&graph, player).ok_or(StrategyError::NoLegalMove { player })
    }

    fn choose_vertex_to_remove(
        &mut self,
        graph: Graph,
        player: Player,
    ) -> Result<VertexId, StrategyError> {
        greedy_removal_choice(&graph, player, &self.weights)
            .ok_or(StrategyError::NoLegalMove { player })
    }
}

//! Memoized expectimax over the percolation game tree.
//!
//! Values are win probabilities in `[0, 1]` for the searching player. The
//! searcher maximizes; the opponent is modeled as playing uniformly at
//! random, so opponent nodes take the arithmetic mean of their children
//! rather than the minimum. Keep that averaging in mind when reading the
//! recursion: it is the intended opponent model, not a weaker minimax.
//!
//! The recursion runs entirely on immutable [`SearchGraph`] values, so an
//! aborted search leaves no partial mutation behind and cache entries stay
//! valid while sibling branches are explored.

use crate::canonical::SearchGraph;
use perc_core::{Graph, Player, VertexId};
use rustc_hash::FxHashMap;
use std::time::Instant;
use thiserror::Error;

/// The wall-clock deadline passed before the search finished.
#[derive(Debug, Error)]
#[error("search deadline exceeded")]
pub struct DeadlineExceeded;

/// Counters accumulated across all searches run by one [`Searcher`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    pub nodes: u64,
    pub cache_hits: u64,
}

/// Expectimax searcher with a transposition cache.
///
/// The cache maps a canonical position plus the searching player to its
/// searcher-to-move value, in both phases. One map is sound for both: a
/// position's colored-vertex count determines whose turn it is, so a key
/// never means two different things. The cache persists across calls, so
/// later decisions in the same match reuse positions evaluated earlier.
pub struct Searcher {
    cache: FxHashMap<(SearchGraph, Player), f64>,
    pub stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            cache: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Best coloring move for `player` with its expected value, or `None`
    /// when no vertex is uncolored.
    pub fn best_coloring_move(
        &mut self,
        graph: &Graph,
        player: Player,
        deadline: Instant,
    ) -> Result<Option<(VertexId, f64)>, DeadlineExceeded> {
        self.coloring_best(&SearchGraph::capture(graph), player, deadline)
    }

    /// Best removal move for `player` with its expected value, or `None`
    /// when `player` owns no vertex.
    pub fn best_removal_move(
        &mut self,
        graph: &Graph,
        player: Player,
        deadline: Instant,
    ) -> Result<Option<(VertexId, f64)>, DeadlineExceeded> {
        self.removal_best(&SearchGraph::capture(graph), player, deadline)
    }

    /// Searcher to move in the coloring phase. Cached: different coloring
    /// orders transpose into the same position.
    fn coloring_value(
        &mut self,
        graph: &SearchGraph,
        player: Player,
        deadline: Instant,
    ) -> Result<f64, DeadlineExceeded> {
        check_deadline(deadline)?;
        self.stats.nodes += 1;
        if graph.uncolored().is_empty() {
            return self.removal_value(graph, player, deadline);
        }

        let key = (graph.clone(), player);
        if let Some(&value) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return Ok(value);
        }

        let value = self
            .coloring_best(graph, player, deadline)?
            .map_or(0.0, |(_, value)| value);
        self.cache.insert(key, value);
        Ok(value)
    }

    fn coloring_best(
        &mut self,
        graph: &SearchGraph,
        player: Player,
        deadline: Instant,
    ) -> Result<Option<(VertexId, f64)>, DeadlineExceeded> {
        check_deadline(deadline)?;
        let mut best: Option<(VertexId, f64)> = None;
        for v in graph.uncolored() {
            let after = graph.with_color(v, player);
            let value = self.opponent_coloring(&after, player, deadline)?;
            // Strictly greater, so ties keep the lowest vertex index.
            if best.map_or(true, |(_, bv)| value > bv) {
                best = Some((v, value));
            }
        }
        Ok(best)
    }

    /// Opponent to move in the coloring phase: mean over their choices.
    fn opponent_coloring(
        &mut self,
        graph: &SearchGraph,
        player: Player,
        deadline: Instant,
    ) -> Result<f64, DeadlineExceeded> {
        check_deadline(deadline)?;
        self.stats.nodes += 1;
        let opponent = 1 - player;
        let replies = graph.uncolored();
        if replies.is_empty() {
            return self.opponent_removal(graph, player, deadline);
        }

        let mut total = 0.0;
        for &v in &replies {
            let after = graph.with_color(v, opponent);
            total += self.coloring_value(&after, player, deadline)?;
        }
        Ok(total / replies.len() as f64)
    }

    /// Searcher to move in the removal phase. Cached.
    fn removal_value(
        &mut self,
        graph: &SearchGraph,
        player: Player,
        deadline: Instant,
    ) -> Result<f64, DeadlineExceeded> {
        check_deadline(deadline)?;
        self.stats.nodes += 1;
        if graph.owned_by(player).is_empty() {
            return Ok(0.0);
        }

        let key = (graph.clone(), player);
        if let Some(&value) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return Ok(value);
        }

        let value = self
            .removal_best(graph, player, deadline)?
            .map_or(0.0, |(_, value)| value);
        self.cache.insert(key, value);
        Ok(value)
    }

    fn removal_best(
        &mut self,
        graph: &SearchGraph,
        player: Player,
        deadline: Instant,
    ) -> Result<Option<(VertexId, f64)>, DeadlineExceeded> {
        check_deadline(deadline)?;
        let opponent = 1 - player;

        let mut best: Option<(VertexId, f64)> = None;
        for v in graph.owned_by(player) {
            let after = graph.percolate(v);
            if after.is_empty() || after.owned_by(opponent).is_empty() {
                // Opponent is wiped out; nothing beats a certain win.
                return Ok(Some((v, 1.0)));
            }
            let value = self.opponent_removal(&after, player, deadline)?;
            if best.map_or(true, |(_, bv)| value > bv) {
                best = Some((v, value));
            }
        }
        Ok(best)
    }

    /// Opponent to move in the removal phase: mean over their removals, or a
    /// sure win for the searcher if they have none.
    fn opponent_removal(
        &mut self,
        graph: &SearchGraph,
        player: Player,
        deadline: Instant,
    ) -> Result<f64, DeadlineExceeded> {
        check_deadline(deadline)?;
        self.stats.nodes += 1;
        let opponent = 1 - player;
        let replies = graph.owned_by(opponent);
        if replies.is_empty() {
            return Ok(1.0);
        }

        let mut total = 0.0;
        for &v in &replies {
            let after = graph.percolate(v);
            total += self.removal_value(&after, player, deadline)?;
        }
        Ok(total / replies.len() as f64)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

fn check_deadline(deadline: Instant) -> Result<(), DeadlineExceeded> {
    if Instant::now() >= deadline {
        Err(DeadlineExceeded)
    } else {
        Ok(())
    }
}

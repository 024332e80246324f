//! Deadline-bounded search strategy with a greedy fallback.

use crate::expectimax::{DeadlineExceeded, Searcher};
use perc_core::{
    greedy_color_choice, greedy_removal_choice, Graph, HeuristicWeights, Player, SearchConfig,
    Strategy, StrategyError, VertexId,
};
use std::time::{Duration, Instant};

/// Full expectimax inside a wall-clock budget per decision. If the deadline
/// fires mid-search the strategy answers with the greedy heuristic instead,
/// so running out of time costs search quality, never the match.
pub struct SearchStrategy {
    budget: Duration,
    weights: HeuristicWeights,
    searcher: Searcher,
}

impl SearchStrategy {
    pub fn new(budget: Duration, weights: HeuristicWeights) -> Self {
        Self {
            budget,
            weights,
            searcher: Searcher::new(),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(
            Duration::from_millis(config.budget_ms),
            HeuristicWeights {
                offense: config.offense_weight,
                defense: config.defense_weight,
            },
        )
    }

    pub fn stats(&self) -> crate::expectimax::SearchStats {
        self.searcher.stats
    }
}

impl Default for SearchStrategy {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl Strategy for SearchStrategy {
    fn name(&self) -> &'static str {
        "search"
    }

    fn choose_vertex_to_color(
        &mut self,
        graph: Graph,
        player: Player,
    ) -> Result<VertexId, StrategyError> {
        let deadline = Instant::now() + self.budget;
        match self.searcher.best_coloring_move(&graph, player, deadline) {
            Ok(Some((v, _))) => Ok(v),
            Ok(None) => Err(StrategyError::NoLegalMove { player }),
            Err(DeadlineExceeded) => {
                greedy_color_choice(&graph, player).ok_or(StrategyError::NoLegalMove { player })
            }
        }
    }

    fn choose_vertex_to_remove(
        &mut self,
        graph: Graph,
        player: Player,
    ) -> Result<VertexId, StrategyError> {
        let deadline = Instant::now() + self.budget;
        match self.searcher.best_removal_move(&graph, player, deadline) {
            Ok(Some((v, _))) => Ok(v),
            Ok(None) => Err(StrategyError::NoLegalMove { player }),
            Err(DeadlineExceeded) => greedy_removal_choice(&graph, player, &self.weights)
                .ok_or(StrategyError::NoLegalMove { player }),
        }
    }
}

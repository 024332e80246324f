//! perc-core: graph model, percolation rules, match engine, and strategies.

pub mod config;
pub mod engine;
pub mod graph;
pub mod percolate;
pub mod random;
pub mod strategy;

pub use config::{BenchConfig, Config, ConfigError, SearchConfig};
pub use engine::{play_match, Forfeit, ForfeitReason, MatchOutcome};
pub use graph::{Color, Edge, Graph, GraphError, Player, Vertex, VertexId};
pub use percolate::percolate;
pub use random::binomial_random_graph;
pub use strategy::{
    greedy_color_choice, greedy_removal_choice, GreedyStrategy, HeuristicWeights, RandomStrategy,
    Strategy, StrategyError,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod graph_tests;

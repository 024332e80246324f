//! perc-search: memoized expectimax with a wall-clock budget.

pub mod canonical;
pub mod expectimax;
pub mod strategy;

pub use canonical::SearchGraph;
pub use expectimax::{DeadlineExceeded, SearchStats, Searcher};
pub use strategy::SearchStrategy;

#[cfg(test)]
mod canonical_tests;
#[cfg(test)]
mod expectimax_tests;

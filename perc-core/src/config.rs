//! Unified configuration schema for the benchmark harness and search.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Benchmark harness settings.
    #[serde(default)]
    pub bench: BenchConfig,
    /// Search strategy settings.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Benchmark harness configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BenchConfig {
    /// Number of random graphs to play. Each graph is played twice, with the
    /// seats swapped.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Base RNG seed for graph generation and the random strategies.
    #[serde(default)]
    pub seed: u64,
    /// Number of worker threads. Matches share no state, so workers only
    /// synchronize when win counts are merged at the end.
    #[serde(default = "default_parallel")]
    pub parallel: u32,
    /// Graphs have `2k` vertices with `k` drawn from `min_k..=max_k`.
    #[serde(default = "default_min_k")]
    pub min_k: u32,
    #[serde(default = "default_max_k")]
    pub max_k: u32,
    /// Fixed edge probability. If absent, each graph draws `p` uniformly
    /// from `[0, 1)`.
    #[serde(default)]
    pub edge_prob: Option<f64>,
}

fn default_iterations() -> u32 {
    50
}

fn default_parallel() -> u32 {
    1
}

fn default_min_k() -> u32 {
    1
}

fn default_max_k() -> u32 {
    20
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            seed: 0,
            parallel: default_parallel(),
            min_k: default_min_k(),
            max_k: default_max_k(),
            edge_prob: None,
        }
    }
}

/// Search strategy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Wall-clock budget per decision, in milliseconds. Exceeding it falls
    /// back to the greedy heuristic; it never forfeits the turn.
    #[serde(default = "default_budget_ms")]
    pub budget_ms: u64,
    /// Removal heuristic weight on edges to differently-colored neighbors.
    #[serde(default = "default_offense_weight")]
    pub offense_weight: f64,
    /// Removal heuristic weight on edges to same-colored neighbors.
    #[serde(default)]
    pub defense_weight: f64,
}

fn default_budget_ms() -> u64 {
    490
}

fn default_offense_weight() -> f64 {
    1.0
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget_ms: default_budget_ms(),
            offense_weight: default_offense_weight(),
            defense_weight: 0.0,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

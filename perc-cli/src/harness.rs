//! Benchmark harness: seeded random graphs played from both seats.

use crate::report::MatchEventV1;
use perc_core::{
    binomial_random_graph, play_match, Config, GreedyStrategy, HeuristicWeights, RandomStrategy,
    Strategy,
};
use perc_search::SearchStrategy;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use std::str::FromStr;
use std::time::Instant;

/// Selectable strategy implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Random,
    Greedy,
    Search,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Greedy => "greedy",
            StrategyKind::Search => "search",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "greedy" => Ok(Self::Greedy),
            "search" => Ok(Self::Search),
            other => Err(format!(
                "unknown strategy `{other}` (expected random|greedy|search)"
            )),
        }
    }
}

/// Instantiate one strategy slot. Greedy and search take their weights and
/// budget from the config; random is seeded.
pub fn make_strategy(kind: StrategyKind, seed: u64, config: &Config) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Random => Box::new(RandomStrategy::seeded(seed)),
        StrategyKind::Greedy => Box::new(GreedyStrategy::new(HeuristicWeights {
            offense: config.search.offense_weight,
            defense: config.search.defense_weight,
        })),
        StrategyKind::Search => Box::new(SearchStrategy::from_config(&config.search)),
    }
}

/// Merged result of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchOutcome {
    /// Wins per strategy slot, not per seat.
    pub wins: [u32; 2],
    pub forfeits: u32,
    pub matches_played: u32,
    pub elapsed_ms: u64,
    pub events: Vec<MatchEventV1>,
}

struct IterationResult {
    wins: [u32; 2],
    forfeits: u32,
    events: Vec<MatchEventV1>,
}

/// Per-iteration seed spacing.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// One iteration: generate a graph, then play it once with each strategy
/// seated first. Fresh strategy instances per match, so nothing leaks across
/// matches but the search cache still persists within one.
fn run_iteration(iteration: u32, config: &Config, kinds: [StrategyKind; 2]) -> IterationResult {
    let graph_seed = config.bench.seed ^ (iteration as u64).wrapping_mul(SEED_STRIDE);
    let mut rng = ChaCha8Rng::seed_from_u64(graph_seed);
    let max_k = config.bench.max_k.max(config.bench.min_k);
    let k = rng.gen_range(config.bench.min_k..=max_k);
    let edge_prob = config.bench.edge_prob.unwrap_or_else(|| rng.gen::<f64>());
    let graph = binomial_random_graph(&mut rng, k, edge_prob);

    let mut wins = [0u32; 2];
    let mut forfeits = 0u32;
    let mut events = Vec::with_capacity(2);

    for (first_slot, order) in [(0u8, [0usize, 1usize]), (1u8, [1usize, 0usize])] {
        let mut p0 = make_strategy(kinds[order[0]], graph_seed ^ 0xC0FFEE, config);
        let mut p1 = make_strategy(kinds[order[1]], graph_seed ^ 0xBADC0DE, config);
        let outcome = play_match(graph.clone(), p0.as_mut(), p1.as_mut());
        let winner_slot = order[outcome.winner as usize] as u8;
        wins[winner_slot as usize] += 1;
        if outcome.forfeit.is_some() {
            forfeits += 1;
        }
        events.push(MatchEventV1 {
            event: "match",
            iteration,
            k,
            edge_prob,
            first_slot,
            winner_slot,
            forfeit: outcome
                .forfeit
                .as_ref()
                .map(|f| f.reason.as_str().to_string()),
            coloring_moves: outcome.coloring_moves,
            removal_moves: outcome.removal_moves,
        });
    }

    IterationResult {
        wins,
        forfeits,
        events,
    }
}

/// Run the full benchmark. With `bench.parallel > 1` iterations are striped
/// across scoped worker threads; results are merged and events re-sorted, so
/// the output is identical to a serial run with the same seed.
pub fn run_benchmark(config: &Config, kinds: [StrategyKind; 2]) -> BenchOutcome {
    let start = Instant::now();
    let iterations = config.bench.iterations;
    let workers = config.bench.parallel.max(1);

    let mut wins = [0u32; 2];
    let mut forfeits = 0u32;
    let mut events: Vec<MatchEventV1> = Vec::with_capacity(iterations as usize * 2);

    let results: Vec<IterationResult> = if workers <= 1 {
        (0..iterations)
            .map(|iteration| run_iteration(iteration, config, kinds))
            .collect()
    } else {
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(|w| {
                    s.spawn(move || {
                        let mut out = Vec::new();
                        let mut iteration = w;
                        while iteration < iterations {
                            out.push(run_iteration(iteration, config, kinds));
                            iteration += workers;
                        }
                        out
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().expect("bench worker panicked"))
                .collect()
        })
    };

    for r in results {
        wins[0] += r.wins[0];
        wins[1] += r.wins[1];
        forfeits += r.forfeits;
        events.extend(r.events);
    }
    events.sort_by_key(|e| (e.iteration, e.first_slot));

    BenchOutcome {
        wins,
        forfeits,
        matches_played: iterations * 2,
        elapsed_ms: start.elapsed().as_millis() as u64,
        events,
    }
}

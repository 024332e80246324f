//! perc-cli: benchmark harness and reporting for the percolation game.

pub mod harness;
pub mod report;

pub use harness::{run_benchmark, BenchOutcome, StrategyKind};
pub use report::{
    hash_config_bytes, now_ms, read_report, write_report_atomic, BenchReportV1, MatchEventV1,
    NdjsonError, NdjsonWriter, REPORT_VERSION,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

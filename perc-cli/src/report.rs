//! NDJSON match events and the versioned benchmark report.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Benchmark report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Final summary of one benchmark run, written as pretty JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReportV1 {
    pub report_version: u32,
    pub tool_version: String,
    pub created_ts_ms: u64,

    /// blake3 hex of the config file bytes, when one was loaded.
    pub config_hash: Option<String>,

    pub strategies: [String; 2],
    pub seed: u64,
    pub iterations: u32,
    /// Two seats per graph, so this is `2 * iterations` for a full run.
    pub matches_played: u32,

    /// Wins per strategy slot, not per seat.
    pub wins: [u32; 2],
    pub forfeits: u32,
    pub elapsed_ms: u64,
}

/// One completed match, appended to the NDJSON event log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchEventV1 {
    pub event: &'static str,
    pub iteration: u32,

    pub k: u32,
    pub edge_prob: f64,

    /// Strategy slot seated as the first player for this match.
    pub first_slot: u8,
    /// Winning strategy slot (0 or 1), regardless of seating.
    pub winner_slot: u8,
    pub forfeit: Option<String>,

    pub coloring_moves: u32,
    pub removal_moves: u32,
}

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

pub fn hash_config_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

#[derive(Debug)]
pub enum NdjsonError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl From<io::Error> for NdjsonError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NdjsonError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        Ok(())
    }
}

/// Write a report as pretty JSON via temp file + rename, so a crash never
/// leaves a truncated report behind.
pub fn write_report_atomic(path: impl AsRef<Path>, report: &BenchReportV1) -> Result<(), NdjsonError> {
    let path = path.as_ref();
    let tmp = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(report)?;
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

pub fn read_report(path: impl AsRef<Path>) -> Result<BenchReportV1, NdjsonError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice::<BenchReportV1>(&bytes)?)
}

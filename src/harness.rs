//! Benchmark records: one line per algorithm per board, in the CSV layout
//! `timestamp,algorithm,elapsed_ms,steps` under the header
//! `n,algorithm,time,states`.

use crate::engine::Board;
use crate::solver::Algorithm;
use std::fmt;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Header row printed before the records.
pub const CSV_HEADER: &str = "n,algorithm,time,states";

/// Number of random boards the benchmark runs by default.
pub const DEFAULT_RUNS: usize = 100;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// Result of running one algorithm on one board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchRecord {
    /// Wall-clock time when the run finished.
    pub timestamp_ms: u64,
    pub algorithm: Algorithm,
    pub elapsed_ms: u64,
    /// Step at which the goal was found, `None` if the budget ran out.
    pub steps: Option<usize>,
}

impl fmt::Display for BenchRecord {
    /// Formats the record as a CSV line; a missing step count prints as `-1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},",
            self.timestamp_ms,
            self.algorithm.name(),
            self.elapsed_ms
        )?;
        match self.steps {
            Some(steps) => write!(f, "{}", steps),
            None => write!(f, "-1"),
        }
    }
}

/// Runs `algorithm` on its own copy of `board` and times it.
pub fn run_timed(algorithm: Algorithm, board: &Board, max: usize) -> BenchRecord {
    let start = Instant::now();
    let report = algorithm.run(board, max);
    let elapsed_ms = start.elapsed().as_millis() as u64;
    BenchRecord {
        timestamp_ms: now_ms(),
        algorithm,
        elapsed_ms,
        steps: report.steps(),
    }
}

/// Aggregate over every record of one algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    pub runs: usize,
    pub found: usize,
    /// Mean step count over the runs that found the goal.
    pub mean_steps: Option<f64>,
    pub mean_elapsed_ms: f64,
}

/// Summarizes `records` per algorithm, in the order each algorithm first
/// appears.
pub fn summarize(records: &[BenchRecord]) -> Vec<AlgorithmSummary> {
    let mut algorithms: Vec<Algorithm> = Vec::new();
    for record in records {
        if !algorithms.contains(&record.algorithm) {
            algorithms.push(record.algorithm);
        }
    }

    algorithms
        .into_iter()
        .map(|algorithm| {
            let runs: Vec<&BenchRecord> = records
                .iter()
                .filter(|r| r.algorithm == algorithm)
                .collect();
            let found_steps: Vec<usize> = runs.iter().filter_map(|r| r.steps).collect();
            let total_elapsed: u64 = runs.iter().map(|r| r.elapsed_ms).sum();

            AlgorithmSummary {
                algorithm,
                runs: runs.len(),
                found: found_steps.len(),
                mean_steps: if found_steps.is_empty() {
                    None
                } else {
                    Some(found_steps.iter().sum::<usize>() as f64 / found_steps.len() as f64)
                },
                mean_elapsed_ms: total_elapsed as f64 / runs.len() as f64,
            }
        })
        .collect()
}

//! Counters and timings surfaced after a detection pass.
//!
//! The original pipeline pushed these into process-wide performance
//! counters; here they are plain values carried on the report so callers
//! can log, serialize, or ignore them.

use serde::{Deserialize, Serialize};

/// Voting statistics of one detection pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteCounters {
    /// Accumulator cells examined by the harvester.
    pub num_possible_lines: usize,
    /// Cells that cleared the vote threshold.
    pub num_lines_with_min_votes: usize,
    /// Candidates folded into an existing segment instead of being admitted.
    pub num_duplicate_lines: usize,
    /// Segments surviving the final filter.
    pub num_lines: usize,
}

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for the detector run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The benchmark input: signed integers loaded once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Samples {
    values: Vec<i32>,
}

impl Samples {
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<i32>> for Samples {
    fn from(values: Vec<i32>) -> Self {
        Self { values }
    }
}

/// Which maximum-subarray definition the loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Running sum resets at zero; all-negative input yields 0.
    #[default]
    Clamped,
    /// Best non-empty contiguous sum, negative when every element is.
    Classic,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Clamped => f.write_str("clamped"),
            Algorithm::Classic => f.write_str("classic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    None,
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub algorithm: Algorithm,
    pub input_size: usize,
    pub iterations: u64,
    /// Result of the final invocation; `None` when nothing ran or the
    /// classic variant saw an empty input.
    pub result: Option<i64>,
    #[serde(skip)]
    pub elapsed: Duration,
    pub elapsed_secs: f64,
    pub ns_per_iteration: f64,
    pub started_at: DateTime<Utc>,
}

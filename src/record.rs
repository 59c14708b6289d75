/// One entry of a JMH `-rf json` result file.
///
/// Only the fields the report reads are modeled; JMH emits many more
/// (`mode`, `threads`, `secondaryMetrics`, ...) and serde skips them.
use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    /// Fully qualified benchmark method, e.g. `com.foo.BarBenchmark.method`.
    pub benchmark: String,
    pub params: Params,
    pub primary_metric: PrimaryMetric,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Params {
    pub instance: String,
    /// Legacy: older result files name the machine the suite ran on.
    #[serde(default)]
    pub system: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryMetric {
    pub score: f64,
    pub score_error: ScoreError,
}

/// JMH writes the error margin as a number, or as the string `"NaN"` when
/// a run had too few iterations to compute one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScoreError {
    Value(f64),
    Text(String),
}

impl ScoreError {
    /// The margin as a number; `"NaN"` means no margin was reported and
    /// reads as zero. Any other string is `None`.
    pub fn margin(&self) -> Option<f64> {
        match self {
            ScoreError::Value(v) => Some(*v),
            ScoreError::Text(s) if s == "NaN" => Some(0.0),
            ScoreError::Text(_) => None,
        }
    }
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Value(v) => write!(f, "{v}"),
            ScoreError::Text(s) => f.write_str(s),
        }
    }
}

impl BenchmarkRecord {
    pub fn simple_name(&self) -> &str {
        simple_name(&self.benchmark)
    }
}

/// Last two dot-separated segments of a benchmark identifier:
/// `a.b.C.method` → `C.method`. Identifiers with fewer segments are
/// returned whole.
pub fn simple_name(benchmark: &str) -> &str {
    match benchmark.rmatch_indices('.').nth(1) {
        Some((idx, _)) => &benchmark[idx + 1..],
        None => benchmark,
    }
}

//! Pivot benchmark results into an instance × benchmark grid.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::record::BenchmarkRecord;

/// Score and error margin of one (instance, benchmark) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub score: f64,
    pub error: f64,
}

impl fmt::Display for Measurement {
    /// `score ± error`, both with the formatter's precision (default 2).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        write!(f, "{:.p$} ± {:.p$}", self.score, self.error)
    }
}

/// What to put in a cell when an instance has no result for a benchmark
/// that other instances ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    #[default]
    Error,
    Blank,
}

/// Regex filters on simple benchmark names and instance names.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub benchmark: Option<Regex>,
    pub instance: Option<Regex>,
}

impl Filters {
    fn keeps(&self, instance: &str, benchmark: &str) -> bool {
        self.benchmark.as_ref().is_none_or(|re| re.is_match(benchmark))
            && self.instance.as_ref().is_none_or(|re| re.is_match(instance))
    }
}

/// Results grouped by instance, then by simple benchmark name.
///
/// Both levels are ordered maps, so iteration yields the sorted row and
/// column order directly. Inserting a pair that already exists replaces
/// the earlier measurement.
#[derive(Debug, Default)]
pub struct Aggregation {
    filters: Filters,
    seen_any: bool,
    system: Option<String>,
    benchmarks: BTreeSet<String>,
    instances: BTreeMap<String, BTreeMap<String, Measurement>>,
}

impl Aggregation {
    pub fn new(filters: Filters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a BenchmarkRecord>) -> Result<Self> {
        let mut agg = Self::default();
        agg.extend(records)?;
        Ok(agg)
    }

    pub fn extend<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a BenchmarkRecord>,
    ) -> Result<()> {
        records.into_iter().try_for_each(|r| self.insert(r))
    }

    pub fn insert(&mut self, record: &BenchmarkRecord) -> Result<()> {
        // Only the very first record decides the heading, filtered or not.
        if !self.seen_any {
            self.seen_any = true;
            self.system = record.params.system.clone();
        }

        let instance = record.params.instance.as_str();
        let benchmark = record.simple_name();
        if !self.filters.keeps(instance, benchmark) {
            trace!(instance, benchmark, "filtered out");
            return Ok(());
        }

        let error = record
            .primary_metric
            .score_error
            .margin()
            .ok_or_else(|| Error::ScoreError {
                instance: instance.to_string(),
                benchmark: benchmark.to_string(),
                value: record.primary_metric.score_error.to_string(),
            })?;
        let measurement = Measurement {
            score: record.primary_metric.score,
            error,
        };

        if !self.benchmarks.contains(benchmark) {
            self.benchmarks.insert(benchmark.to_string());
        }
        let previous = self
            .instances
            .entry(instance.to_string())
            .or_default()
            .insert(benchmark.to_string(), measurement);
        if let Some(previous) = previous {
            debug!(
                instance,
                benchmark,
                %previous,
                current = %measurement,
                "later result replaces earlier one"
            );
        }
        Ok(())
    }

    /// The legacy `system` parameter of the first record, if it had one.
    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    /// Distinct simple benchmark names, sorted.
    pub fn benchmarks(&self) -> impl Iterator<Item = &str> {
        self.benchmarks.iter().map(String::as_str)
    }

    /// Distinct instance names, sorted.
    pub fn instances(&self) -> impl Iterator<Item = &str> {
        self.instances.keys().map(String::as_str)
    }

    pub fn get(&self, instance: &str, benchmark: &str) -> Option<Measurement> {
        self.instances.get(instance)?.get(benchmark).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// `instance` followed by the sorted benchmark names.
    pub fn header(&self) -> Vec<String> {
        std::iter::once("instance".to_string())
            .chain(self.benchmarks.iter().cloned())
            .collect()
    }

    /// One row per instance: its name, then one formatted cell per
    /// benchmark column.
    pub fn grid(&self, precision: usize, missing: MissingPolicy) -> Result<Vec<Vec<Option<String>>>> {
        let rows = self
            .instances
            .iter()
            .map(|(instance, results)| {
                let mut row = Vec::with_capacity(self.benchmarks.len() + 1);
                row.push(Some(instance.clone()));
                for benchmark in &self.benchmarks {
                    let cell = match (results.get(benchmark), missing) {
                        (Some(m), _) => Some(format!("{m:.precision$}")),
                        (None, MissingPolicy::Blank) => None,
                        (None, MissingPolicy::Error) => {
                            return Err(Error::MissingResult {
                                instance: instance.clone(),
                                benchmark: benchmark.clone(),
                            });
                        }
                    };
                    row.push(cell);
                }
                Ok(row)
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            rows = rows.len(),
            columns = self.benchmarks.len() + 1,
            "built result grid"
        );
        Ok(rows)
    }
}

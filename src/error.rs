//! Error taxonomy for reading, aggregating, and rendering benchmark results.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be opened, read, or decompressed.
    #[error("failed to read {source_name}")]
    Read {
        source_name: String,
        #[source]
        cause: std::io::Error,
    },

    #[error("failed to parse JSON in {source_name}")]
    Json {
        source_name: String,
        #[source]
        cause: serde_json::Error,
    },

    #[error("expected a JSON array of benchmark results in {source_name}, found {found}")]
    NotAnArray {
        source_name: String,
        found: &'static str,
    },

    #[error("no benchmark results in {source_name}")]
    NoRecords { source_name: String },

    /// A record is missing one of the fields the report reads, or has it
    /// with the wrong type.
    #[error("invalid benchmark result #{index} in {source_name}")]
    Record {
        source_name: String,
        index: usize,
        #[source]
        cause: serde_json::Error,
    },

    #[error("invalid scoreError {value:?} for {benchmark} on {instance}")]
    ScoreError {
        instance: String,
        benchmark: String,
        value: String,
    },

    #[error("failed to write report")]
    Write(#[source] std::io::Error),

    #[error("instance {instance:?} has no result for benchmark {benchmark:?}")]
    MissingResult { instance: String, benchmark: String },
}

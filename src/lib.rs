//! Render JMH benchmark results as a markdown table: one row per instance,
//! one column per benchmark, each cell `score ± error`.

pub mod aggregate;
pub mod decompress;
pub mod error;
pub mod input;
pub mod record;
pub mod report;
pub mod table;
pub mod telemetry;

pub use aggregate::{Aggregation, Filters, Measurement, MissingPolicy};
pub use error::{Error, Result};
pub use record::BenchmarkRecord;
pub use report::ReportConfig;

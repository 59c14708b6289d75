//! Input loading: reading result files (or stdin), BOM stripping, and
//! decoding the JSON array into `BenchmarkRecord`s.

use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use crate::decompress;
use crate::error::{Error, Result};
use crate::record::BenchmarkRecord;

/// Where a result file comes from. `-` on the command line means stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Read the whole input, decompressing files by extension and
    /// stripping a leading BOM.
    pub fn read(&self) -> Result<Vec<u8>> {
        let read = match self {
            InputSource::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buf).map(|_| buf)
            }
            InputSource::File(path) => decompress::read_file(path),
        };
        let mut buf = read.map_err(|cause| Error::Read {
            source_name: self.to_string(),
            cause,
        })?;
        strip_bom(&mut buf);
        debug!(source = %self, bytes = buf.len(), "read input");
        Ok(buf)
    }

    /// Read and decode all benchmark results from this source.
    pub fn load(&self) -> Result<Vec<BenchmarkRecord>> {
        let buf = self.read()?;
        parse_records(&buf, &self.to_string())
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Strip UTF-8 BOM (U+FEFF, bytes EF BB BF) from the beginning of a buffer.
pub fn strip_bom(buf: &mut Vec<u8>) {
    if buf.starts_with(&[0xEF, 0xBB, 0xBF]) {
        buf.drain(..3);
    }
}

/// Decode a JSON array of benchmark results.
///
/// The document is parsed to a `serde_json::Value` first so a record that
/// lacks a field is reported with its position in the array.
pub fn parse_records(buf: &[u8], source_name: &str) -> Result<Vec<BenchmarkRecord>> {
    let doc: serde_json::Value = serde_json::from_slice(buf).map_err(|cause| Error::Json {
        source_name: source_name.to_string(),
        cause,
    })?;
    let items = match doc {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(Error::NotAnArray {
                source_name: source_name.to_string(),
                found: json_type_name(&other),
            });
        }
    };
    if items.is_empty() {
        return Err(Error::NoRecords {
            source_name: source_name.to_string(),
        });
    }

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|cause| Error::Record {
                source_name: source_name.to_string(),
                index,
                cause,
            })
        })
        .collect::<Result<Vec<BenchmarkRecord>>>()?;
    debug!(source = source_name, records = records.len(), "parsed benchmark results");
    Ok(records)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

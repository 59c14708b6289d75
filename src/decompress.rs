//! Transparent decompression for gzip and zstd compressed result files.
//!
//! Detects compression by file extension (.gz → gzip, .zst/.zstd → zstd).
//! Decompresses entire file to an in-memory buffer for further processing.

use std::io::{self, Read};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Zstd,
}

impl Compression {
    /// Compression implied by the path's extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "gz" | "gzip" => Some(Compression::Gzip),
            "zst" | "zstd" => Some(Compression::Zstd),
            _ => None,
        }
    }
}

/// Read `path` fully, decompressing it first when its extension says so.
pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let Some(compression) = Compression::from_path(path) else {
        return std::fs::read(path);
    };
    let file = std::fs::File::open(path)?;
    let mut buf = Vec::new();
    match compression {
        Compression::Gzip => {
            flate2::read::GzDecoder::new(file).read_to_end(&mut buf)?;
        }
        Compression::Zstd => {
            zstd::Decoder::new(file)?.read_to_end(&mut buf)?;
        }
    }
    Ok(buf)
}

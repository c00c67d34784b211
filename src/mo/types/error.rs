//! Custom error types for the mo-dump crate.

use std::path::PathBuf;
use thiserror::Error;

/// Which of the two descriptor tables a bounds failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Original,
    Translated,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::Original => f.write_str("original"),
            TableKind::Translated => f.write_str("translated"),
        }
    }
}

/// The primary error type for all operations in this crate.
///
/// The first five variants are structural validation failures raised by the
/// parser, one per validation gate. The remaining ones belong to file loading.
#[derive(Debug, Error)]
pub enum MoError {
    /// The buffer cannot even hold the fixed-size header.
    #[error("content too small: {size} bytes found, expected {expected} at least")]
    TooSmall { size: usize, expected: usize },

    /// The first four bytes are not a gettext magic number in either byte order.
    #[error(
        "magic number mismatch: found {found:#010x}, expected {expected:#010x} \
         (or 0xde120495 for big-endian files)"
    )]
    BadMagic { found: u32, expected: u32 },

    /// The format revision is neither 0 nor 1.
    #[error("header version is wrong (not 0 or 1): {0}")]
    UnsupportedVersion(u32),

    /// A descriptor table extends past the end of the buffer.
    #[error(
        "header indicates more messages than file has space for: {table} table at offset {offset} \
         needs {entry_count} descriptors, but file is {size} bytes"
    )]
    TruncatedTableHeader {
        table: TableKind,
        offset: u32,
        entry_count: u32,
        size: usize,
    },

    /// A string referenced by descriptor `index` runs past the end of the buffer.
    #[error(
        "file ended prematurely at entry {index}: {table} string at offset {offset} \
         with length {length} exceeds file size {size}"
    )]
    TruncatedString {
        index: u32,
        table: TableKind,
        offset: u32,
        length: u32,
        size: usize,
    },

    /// The catalog file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The catalog file exists but could not be opened or read.
    #[error("could not read file {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MoError {
    /// Returns `true` for structural validation failures raised while parsing
    /// a buffer, as opposed to failures acquiring the buffer in the first place.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, MoError::FileNotFound { .. } | MoError::FileUnreadable { .. })
    }

    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => MoError::FileNotFound { path },
            _ => MoError::FileUnreadable { path, source },
        }
    }
}

/// A convenience `Result` type alias using the crate's `MoError` type.
pub type Result<T> = std::result::Result<T, MoError>;

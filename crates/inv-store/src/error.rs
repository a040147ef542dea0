//! Whole-operation failures for saving and loading.
//!
//! Per-row problems are not errors; see [`crate::RejectReason`].

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that abort a save or a load.
#[derive(Debug)]
pub enum StoreError {
    /// The file to load does not exist.
    NotFound(PathBuf),
    /// The header row is not exactly `name,price,quantity`.
    HeaderMismatch { found: Vec<String> },
    /// Open, read, write or flush failed.
    Io(String),
    /// The CSV layer failed (e.g. invalid UTF-8 in a record).
    Csv(String),
}

impl StoreError {
    /// Short stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "not_found",
            StoreError::HeaderMismatch { .. } => "header_mismatch",
            StoreError::Io(_) => "io",
            StoreError::Csv(_) => "csv",
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(path) => write!(f, "inventory file not found: {}", path.display()),
            StoreError::HeaderMismatch { found } => write!(
                f,
                "invalid inventory header: expected 'name,price,quantity', found '{}'",
                found.join(",")
            ),
            StoreError::Io(msg) => write!(f, "inventory io error: {msg}"),
            StoreError::Csv(msg) => write!(f, "inventory csv error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

impl From<csv::Error> for StoreError {
    fn from(e: csv::Error) -> Self {
        match e.kind() {
            csv::ErrorKind::Io(io_err) => StoreError::Io(io_err.to_string()),
            _ => StoreError::Csv(e.to_string()),
        }
    }
}

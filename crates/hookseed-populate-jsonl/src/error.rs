//! Error types for the JSONL store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing JSONL files.
#[derive(Error, Debug)]
pub enum JsonlStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized for writing.
    #[error("Failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    /// The record kind cannot be used as a file stem.
    #[error("Invalid record kind for a JSONL file name: {0:?}")]
    InvalidRecordKind(String),

    /// A stored line is not a valid record.
    #[error("{}:{line}: invalid record: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

//! Error types for highlighting.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HighlightError {
    /// The highlighting backend failed.
    #[error("Highlighter failed: {0}")]
    Backend(String),
}

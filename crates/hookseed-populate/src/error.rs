//! Error types for seeding.

use hookseed_generator::GeneratorError;
use thiserror::Error;

/// Errors that can occur during a seed run.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Record generation failed.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// The record store rejected a bulk operation.
    #[error("{store} store error: {source}")]
    Store {
        store: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A generated body could not be read back for the summary.
    #[error("Record body is not a valid event: {0}")]
    Body(#[from] serde_json::Error),
}

impl SeedError {
    pub fn store<E>(store: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store {
            store,
            source: Box::new(source),
        }
    }
}

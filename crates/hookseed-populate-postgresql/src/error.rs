//! Error types for the PostgreSQL store.

use thiserror::Error;

/// Errors that can occur while talking to PostgreSQL.
#[derive(Error, Debug)]
pub enum PostgreSQLStoreError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// A record value does not fit its column.
    #[error("Value for column '{column}' out of range: {value}")]
    OutOfRange { column: &'static str, value: u64 },
}

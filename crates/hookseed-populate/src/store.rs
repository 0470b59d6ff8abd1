//! The record store contract.

use async_trait::async_trait;
use hookseed_core::RequestLogRecord;

/// A persistent collection of request log records.
///
/// The seeder only relies on bulk operations. `record_kind` names the
/// collection (a table, a file stem, a map key).
#[async_trait]
pub trait RecordStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short backend name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Remove every record of `record_kind`, returning how many were removed.
    async fn delete_all(&self, record_kind: &str) -> Result<u64, Self::Error>;

    /// Append `records` to `record_kind`, returning how many were written.
    async fn insert_many(
        &self,
        record_kind: &str,
        records: &[RequestLogRecord],
    ) -> Result<u64, Self::Error>;

    /// Replace the contents of `record_kind` with `records`.
    ///
    /// The default runs [`delete_all`](Self::delete_all) then
    /// [`insert_many`](Self::insert_many) with no atomicity between them.
    /// Backends that support transactions override this.
    async fn replace_all(
        &self,
        record_kind: &str,
        records: &[RequestLogRecord],
    ) -> Result<u64, Self::Error> {
        self.delete_all(record_kind).await?;
        self.insert_many(record_kind, records).await
    }

    /// Number of records currently stored under `record_kind`.
    async fn count(&self, record_kind: &str) -> Result<u64, Self::Error>;
}

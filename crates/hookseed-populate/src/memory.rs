//! In-memory record store.

use crate::store::RecordStore;
use async_trait::async_trait;
use hookseed_core::RequestLogRecord;
use std::collections::HashMap;
use std::convert::Infallible;
use tokio::sync::Mutex;

/// Record store backed by a map of vectors. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<RequestLogRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records stored under `record_kind`.
    pub async fn records(&self, record_kind: &str) -> Vec<RequestLogRecord> {
        self.collections
            .lock()
            .await
            .get(record_kind)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    type Error = Infallible;

    fn name(&self) -> &'static str {
        "memory"
    }

    async fn delete_all(&self, record_kind: &str) -> Result<u64, Self::Error> {
        let removed = self
            .collections
            .lock()
            .await
            .remove(record_kind)
            .map(|records| records.len() as u64)
            .unwrap_or(0);
        Ok(removed)
    }

    async fn insert_many(
        &self,
        record_kind: &str,
        records: &[RequestLogRecord],
    ) -> Result<u64, Self::Error> {
        self.collections
            .lock()
            .await
            .entry(record_kind.to_string())
            .or_default()
            .extend_from_slice(records);
        Ok(records.len() as u64)
    }

    async fn count(&self, record_kind: &str) -> Result<u64, Self::Error> {
        Ok(self
            .collections
            .lock()
            .await
            .get(record_kind)
            .map(|records| records.len() as u64)
            .unwrap_or(0))
    }
}

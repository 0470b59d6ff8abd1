//! JSONL record store.

use crate::error::JsonlStoreError;
use async_trait::async_trait;
use hookseed_core::RequestLogRecord;
use hookseed_populate::RecordStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Record store writing one JSONL file per record kind.
pub struct JsonlStore {
    output_dir: PathBuf,
    /// Serializes file access between concurrent callers.
    lock: Mutex<()>,
}

impl JsonlStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the file backing `record_kind`.
    ///
    /// The record kind becomes a file stem inside `output_dir`, so empty
    /// names, path separators and `.`/`..` are rejected.
    pub fn path_for(&self, record_kind: &str) -> Result<PathBuf, JsonlStoreError> {
        let invalid = record_kind.is_empty()
            || record_kind == "."
            || record_kind == ".."
            || record_kind.contains(['/', '\\', '\0']);
        if invalid {
            return Err(JsonlStoreError::InvalidRecordKind(record_kind.to_string()));
        }
        Ok(self.output_dir.join(format!("{record_kind}.jsonl")))
    }

    /// Read back every record stored under `record_kind`.
    pub async fn read_all(
        &self,
        record_kind: &str,
    ) -> Result<Vec<RequestLogRecord>, JsonlStoreError> {
        let _guard = self.lock.lock().await;
        let path = self.path_for(record_kind)?;
        let Some(contents) = read_if_exists(&path).await? else {
            return Ok(Vec::new());
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|source| JsonlStoreError::Malformed {
                    path: path.clone(),
                    line: idx + 1,
                    source,
                })
            })
            .collect()
    }
}

async fn read_if_exists(path: &Path) -> Result<Option<String>, JsonlStoreError> {
    match fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn count_lines(contents: &str) -> u64 {
    contents.lines().filter(|line| !line.trim().is_empty()).count() as u64
}

#[async_trait]
impl RecordStore for JsonlStore {
    type Error = JsonlStoreError;

    fn name(&self) -> &'static str {
        "jsonl"
    }

    async fn delete_all(&self, record_kind: &str) -> Result<u64, Self::Error> {
        let _guard = self.lock.lock().await;
        let path = self.path_for(record_kind)?;

        let removed = read_if_exists(&path)
            .await?
            .map(|contents| count_lines(&contents))
            .unwrap_or(0);

        fs::create_dir_all(&self.output_dir).await?;
        fs::File::create(&path).await?;

        info!("Truncated '{}' ({} records removed)", path.display(), removed);
        Ok(removed)
    }

    async fn insert_many(
        &self,
        record_kind: &str,
        records: &[RequestLogRecord],
    ) -> Result<u64, Self::Error> {
        let _guard = self.lock.lock().await;
        let path = self.path_for(record_kind)?;

        fs::create_dir_all(&self.output_dir).await?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        for record in records {
            let mut line = serde_json::to_vec(record)?;
            line.push(b'\n');
            writer.write_all(&line).await?;
        }
        writer.flush().await?;

        debug!("Appended {} records to '{}'", records.len(), path.display());
        Ok(records.len() as u64)
    }

    async fn count(&self, record_kind: &str) -> Result<u64, Self::Error> {
        let _guard = self.lock.lock().await;
        Ok(read_if_exists(&self.path_for(record_kind)?)
            .await?
            .map(|contents| count_lines(&contents))
            .unwrap_or(0))
    }
}

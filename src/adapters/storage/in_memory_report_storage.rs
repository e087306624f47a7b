//! In-Memory Report Storage Adapter
//!
//! Keeps rendered reports in memory. Used by tests and embedders that post-process reports.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::sha256_hex;
use crate::ports::{ExportedReport, ReportStorage, StorageError, StoredReport};

/// In-memory storage for exported reports, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportStorage {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryReportStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored reports.
    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }

    /// Stored file names, sorted.
    pub async fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.files.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl ReportStorage for InMemoryReportStorage {
    async fn store(&self, report: &ExportedReport) -> Result<StoredReport, StorageError> {
        let mut files = self.files.write().await;
        files.insert(report.file_name.clone(), report.content.clone());
        Ok(StoredReport::new(
            self.path_for(&report.file_name),
            report.format,
            report.size_bytes(),
            sha256_hex(&report.content),
        ))
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        self.files
            .read()
            .await
            .get(file_name)
            .cloned()
            .ok_or_else(|| StorageError::not_found(file_name))
    }

    async fn exists(&self, file_name: &str) -> Result<bool, StorageError> {
        Ok(self.files.read().await.contains_key(file_name))
    }

    async fn checksum(&self, file_name: &str) -> Result<String, StorageError> {
        let content = self.read(file_name).await?;
        Ok(sha256_hex(&content))
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        PathBuf::from(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;

    #[tokio::test]
    async fn store_then_read() {
        let storage = InMemoryReportStorage::new();
        let report = ExportedReport::new(b"{}".to_vec(), ExportFormat::Json, "2024-03-01");

        let stored = storage.store(&report).await.unwrap();

        assert_eq!(stored.size_bytes, 2);
        assert_eq!(storage.read(&report.file_name).await.unwrap(), b"{}");
        assert_eq!(
            storage.file_names().await,
            vec!["stress-assessment-2024-03-01.json".to_string()]
        );
    }

    #[tokio::test]
    async fn missing_report_is_not_found() {
        let storage = InMemoryReportStorage::new();
        assert!(storage.is_empty().await);
        assert!(matches!(
            storage.read("nope.csv").await,
            Err(StorageError::NotFound { .. })
        ));
    }
}

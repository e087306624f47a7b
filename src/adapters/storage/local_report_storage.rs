//! Local Filesystem Storage Adapter - Implementation of ReportStorage.
//!
//! Writes rendered reports into a single output directory.
//! Uses atomic writes and SHA-256 checksums for data integrity.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::sha256_hex;
use crate::ports::{ExportedReport, ReportStorage, StorageError, StoredReport};

/// Maximum report size allowed (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Local filesystem storage for exported reports.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{file_name}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{file_name}`
#[derive(Debug, Clone)]
pub struct LocalReportStorage {
    /// Directory all reports are written to.
    base_path: PathBuf,
}

impl LocalReportStorage {
    /// Creates storage rooted at `base_path`. The directory is created on
    /// first write.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolves a file name inside the output directory.
    fn resolve(&self, file_name: &str) -> Result<PathBuf, StorageError> {
        let plain = Path::new(file_name)
            .file_name()
            .map(|n| n == std::ffi::OsStr::new(file_name))
            .unwrap_or(false);
        if file_name.is_empty() || !plain {
            return Err(StorageError::invalid_file_name(file_name));
        }
        Ok(self.base_path.join(file_name))
    }

    async fn ensure_base_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create output directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl ReportStorage for LocalReportStorage {
    async fn store(&self, report: &ExportedReport) -> Result<StoredReport, StorageError> {
        let size = report.size_bytes();
        if size > MAX_FILE_SIZE_BYTES {
            return Err(StorageError::io(format!(
                "Report too large: {} bytes (max: {})",
                size, MAX_FILE_SIZE_BYTES
            )));
        }

        let final_path = self.resolve(&report.file_name)?;
        let temp_path = self.base_path.join(format!("{}.tmp", report.file_name));
        self.ensure_base_dir().await?;

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| StorageError::from_io(&e, "create", &temp_path))?;
        file.write_all(&report.content)
            .await
            .map_err(|e| StorageError::from_io(&e, "write", &temp_path))?;
        file.sync_all()
            .await
            .map_err(|e| StorageError::from_io(&e, "sync", &temp_path))?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        let checksum = sha256_hex(&report.content);
        tracing::info!(
            path = %final_path.display(),
            format = %report.format,
            size_bytes = size,
            "Report written"
        );

        Ok(StoredReport::new(final_path, report.format, size, checksum))
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(file_name)?;
        fs::read(&path)
            .await
            .map_err(|e| StorageError::from_io(&e, "read", &path))
    }

    async fn exists(&self, file_name: &str) -> Result<bool, StorageError> {
        let path = self.resolve(file_name)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    async fn checksum(&self, file_name: &str) -> Result<String, StorageError> {
        let content = self.read(file_name).await?;
        Ok(sha256_hex(&content))
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;
    use tempfile::TempDir;

    fn test_report(content: &str) -> ExportedReport {
        ExportedReport::new(content.as_bytes().to_vec(), ExportFormat::Csv, "2024-03-01")
    }

    fn create_storage() -> (LocalReportStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(temp_dir.path().join("reports"));
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn store_creates_directory_and_file() {
        let (storage, _temp) = create_storage();

        let stored = storage.store(&test_report("a,b\n")).await.unwrap();

        assert!(stored.path().exists());
        assert!(storage.base_path().is_dir());
        assert_eq!(
            stored.path().file_name().unwrap(),
            "stress-assessment-2024-03-01.csv"
        );
        assert_eq!(stored.size_bytes, 4);
    }

    #[tokio::test]
    async fn store_leaves_no_temp_file() {
        let (storage, _temp) = create_storage();
        storage.store(&test_report("x")).await.unwrap();

        let temp = storage.path_for("stress-assessment-2024-03-01.csv.tmp");
        assert!(!temp.exists());
    }

    #[tokio::test]
    async fn read_returns_stored_content() {
        let (storage, _temp) = create_storage();
        let report = test_report("Question ID,Question,Rating\n");
        storage.store(&report).await.unwrap();

        let content = storage.read(&report.file_name).await.unwrap();
        assert_eq!(content, report.content);
    }

    #[tokio::test]
    async fn store_overwrites_same_file_name() {
        let (storage, _temp) = create_storage();
        storage.store(&test_report("first")).await.unwrap();
        let report = test_report("second");
        storage.store(&report).await.unwrap();

        assert_eq!(storage.read(&report.file_name).await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn checksum_matches_stored_receipt() {
        let (storage, _temp) = create_storage();
        let report = test_report("hello");
        let stored = storage.store(&report).await.unwrap();

        let checksum = storage.checksum(&report.file_name).await.unwrap();
        assert_eq!(checksum, stored.checksum);
        assert_eq!(
            checksum,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[tokio::test]
    async fn read_missing_file_is_not_found() {
        let (storage, _temp) = create_storage();
        let err = storage.read("missing.csv").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
        assert!(!storage.exists("missing.csv").await.unwrap());
    }

    #[tokio::test]
    async fn rejects_paths_outside_output_directory() {
        let (storage, _temp) = create_storage();
        for name in ["../escape.csv", "nested/file.csv", ""] {
            let err = storage.read(name).await.unwrap_err();
            assert!(matches!(err, StorageError::InvalidFileName { .. }), "{}", name);
        }
    }
}

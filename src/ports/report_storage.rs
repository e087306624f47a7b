//! Report Storage Port - Where rendered exports are written.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{ExportFormat, ExportedReport};

/// Port for persisting rendered reports.
///
/// # Contract
///
/// Implementations must:
/// - Support atomic writes (no partial content on failure)
/// - Compute SHA-256 checksums for integrity verification
/// - Overwrite an earlier report with the same file name
#[async_trait]
pub trait ReportStorage: Send + Sync {
    /// Writes a rendered report and returns where it landed.
    async fn store(&self, report: &ExportedReport) -> Result<StoredReport, StorageError>;

    /// Reads a stored report back.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the file doesn't exist.
    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError>;

    /// Check if a report with this file name exists.
    async fn exists(&self, file_name: &str) -> Result<bool, StorageError>;

    /// Hex-encoded SHA-256 checksum of a stored report.
    async fn checksum(&self, file_name: &str) -> Result<String, StorageError>;

    /// Full path a report with this file name is stored at.
    fn path_for(&self, file_name: &str) -> PathBuf;
}

/// Receipt for a stored report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReport {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub size_bytes: u64,
    /// Hex-encoded SHA-256 of the content.
    pub checksum: String,
}

impl StoredReport {
    pub fn new(
        path: impl Into<PathBuf>,
        format: ExportFormat,
        size_bytes: u64,
        checksum: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            format,
            size_bytes,
            checksum: checksum.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Errors that can occur during report storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// File was not found.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },

    /// File name would escape the output directory.
    #[error("Invalid report file name: {file_name}")]
    InvalidFileName { file_name: String },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an invalid file name error.
    pub fn invalid_file_name(file_name: impl Into<String>) -> Self {
        Self::InvalidFileName {
            file_name: file_name.into(),
        }
    }

    /// Maps an IO error on `path` to the matching variant.
    pub fn from_io(err: &std::io::Error, action: &str, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                Self::permission_denied(path.display().to_string())
            }
            _ => Self::io(format!("Failed to {} {}: {}", action, path.display(), err)),
        }
    }
}

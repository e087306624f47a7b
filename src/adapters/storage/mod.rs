//! Storage Adapters
//!
//! Implementations of the ReportStorage port.
//!
//! ## Available Adapters
//!
//! - **LocalReportStorage** - Writes reports into an output directory
//! - **InMemoryReportStorage** - Keeps reports in memory (testing)

mod in_memory_report_storage;
mod local_report_storage;

pub use in_memory_report_storage::InMemoryReportStorage;
pub use local_report_storage::LocalReportStorage;

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `content`.
pub(crate) fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

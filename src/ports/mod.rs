//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentPrompter` - Shows questions and collects ratings
//! - `ReportRenderer` - Turns a finished report into CSV, PDF, Markdown or JSON
//! - `ReportStorage` - Persists rendered reports

mod assessment_prompter;
mod report_renderer;
mod report_storage;

pub use assessment_prompter::{AssessmentPrompter, PromptError};
pub use report_renderer::{ExportError, ExportFormat, ExportedReport, ReportRenderer};
pub use report_storage::{ReportStorage, StorageError, StoredReport};

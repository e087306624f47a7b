//! Report Renderer Port - Format conversion interface.
//!
//! Renderers turn a finished [`AssessmentReport`] into bytes for one export
//! format. They never mutate the report and never touch the filesystem;
//! persisting the bytes is the job of [`ReportStorage`](super::ReportStorage).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::scoring::AssessmentReport;

/// Port for rendering an assessment report into one export format.
///
/// # Contract
///
/// Implementations must:
/// - Produce the same bytes for the same report
/// - Include every answered question with its rating
/// - Report clear errors for rendering failures
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn ReportRenderer = &CsvReportRenderer::new();
/// let exported = renderer.export(&report)?;
/// std::fs::write(&exported.file_name, &exported.content)?;
/// ```
pub trait ReportRenderer: Send + Sync {
    /// The format this renderer produces.
    fn format(&self) -> ExportFormat;

    /// Renders the report to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::RenderFailed` if the output cannot be built.
    fn render(&self, report: &AssessmentReport) -> Result<Vec<u8>, ExportError>;

    /// Renders and wraps the bytes with a file name and content type.
    fn export(&self, report: &AssessmentReport) -> Result<ExportedReport, ExportError> {
        let content = self.render(report)?;
        Ok(ExportedReport::new(content, self.format(), &report.date_stamp()))
    }
}

/// Export formats supported by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Spreadsheet-friendly answers and summary.
    Csv,
    /// Printable report.
    Pdf,
    /// Markdown summary.
    Markdown,
    /// Machine-readable snapshot.
    Json,
}

impl ExportFormat {
    /// All formats in a stable order.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::Pdf,
        ExportFormat::Markdown,
        ExportFormat::Json,
    ];

    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }

    /// Download file name for a report completed on `date` (`YYYY-MM-DD`).
    pub fn file_name(&self, date: &str) -> String {
        match self {
            ExportFormat::Pdf => format!("CCSSS-Report-{}.pdf", date),
            other => format!("stress-assessment-{}.{}", date, other.extension()),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Rendered report with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    /// The rendered content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested file name.
    pub file_name: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedReport {
    /// Create a new exported report.
    pub fn new(content: Vec<u8>, format: ExportFormat, date: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            file_name: format.file_name(date),
            format,
        }
    }

    /// Size of the rendered content in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Errors that can occur while rendering a report.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Building the output failed.
    #[error("{format} rendering failed: {message}")]
    RenderFailed {
        format: ExportFormat,
        message: String,
    },
}

impl ExportError {
    /// Creates a render failure for the given format.
    pub fn render(format: ExportFormat, message: impl Into<String>) -> Self {
        Self::RenderFailed {
            format,
            message: message.into(),
        }
    }
}

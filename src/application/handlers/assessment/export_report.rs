//! ExportReportHandler - Renders a report in each requested format and stores it.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::scoring::AssessmentReport;
use crate::ports::{
    ExportError, ExportFormat, ReportRenderer, ReportStorage, StorageError, StoredReport,
};

/// Command to export a finished report.
#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub report: AssessmentReport,
    /// Duplicates are exported once, in first-seen order.
    pub formats: Vec<ExportFormat>,
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportReportResult {
    pub stored: Vec<StoredReport>,
}

#[derive(Debug, Error)]
pub enum ExportReportError {
    #[error("No export format requested")]
    NoFormats,

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Handler for exporting reports.
pub struct ExportReportHandler {
    storage: Arc<dyn ReportStorage>,
    renderers: Vec<Arc<dyn ReportRenderer>>,
}

impl ExportReportHandler {
    pub fn new(storage: Arc<dyn ReportStorage>, renderers: Vec<Arc<dyn ReportRenderer>>) -> Self {
        Self { storage, renderers }
    }

    fn renderer(&self, format: ExportFormat) -> Result<&Arc<dyn ReportRenderer>, ExportError> {
        self.renderers
            .iter()
            .find(|r| r.format() == format)
            .ok_or_else(|| ExportError::UnsupportedFormat(format.to_string()))
    }

    pub async fn handle(
        &self,
        cmd: ExportReportCommand,
    ) -> Result<ExportReportResult, ExportReportError> {
        if cmd.formats.is_empty() {
            return Err(ExportReportError::NoFormats);
        }

        let mut formats: Vec<ExportFormat> = Vec::with_capacity(cmd.formats.len());
        for format in cmd.formats {
            if !formats.contains(&format) {
                formats.push(format);
            }
        }

        // Render everything before writing so a render failure stores nothing
        let mut exported = Vec::with_capacity(formats.len());
        for format in formats {
            exported.push(self.renderer(format)?.export(&cmd.report)?);
        }

        let mut stored = Vec::with_capacity(exported.len());
        for report in &exported {
            stored.push(self.storage.store(report).await?);
        }

        tracing::info!(
            session_id = %cmd.report.session_id(),
            files = stored.len(),
            "Report exported"
        );

        Ok(ExportReportResult { stored })
    }
}

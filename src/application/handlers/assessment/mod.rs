//! Assessment handlers.
//!
//! - `RunAssessmentHandler` - walks a participant through the questionnaire
//! - `ExportReportHandler` - renders and stores the finished report

mod export_report;
mod run_assessment;

pub use export_report::{
    ExportReportCommand, ExportReportError, ExportReportHandler, ExportReportResult,
};
pub use run_assessment::{
    RunAssessmentCommand, RunAssessmentError, RunAssessmentHandler, RunAssessmentResult,
    DEFAULT_ONBOARDING_ATTEMPTS,
};

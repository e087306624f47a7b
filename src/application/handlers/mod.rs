//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    ExportReportCommand, ExportReportError, ExportReportHandler, ExportReportResult,
    RunAssessmentCommand, RunAssessmentError, RunAssessmentHandler, RunAssessmentResult,
    DEFAULT_ONBOARDING_ATTEMPTS,
};

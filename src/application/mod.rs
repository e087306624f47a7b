//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ExportReportCommand, ExportReportError, ExportReportHandler, ExportReportResult,
    RunAssessmentCommand, RunAssessmentError, RunAssessmentHandler, RunAssessmentResult,
    DEFAULT_ONBOARDING_ATTEMPTS,
};

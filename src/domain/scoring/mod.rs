//! Scoring - turns completed responses into a classified result.

mod engine;
mod interpretation;
mod report;
mod result;
mod stress_level;

pub use engine::{ScoringEngine, CORE_MAX_SCORE, DOMINANT_CATEGORY_LIMIT, MODULE_MAX_SCORE};
pub use interpretation::summary_message;
pub use report::{AssessmentReport, ModuleSection, ReportRow};
pub use result::{AssessmentResult, ModuleScore};
pub use stress_level::{StressLevel, LOW_UPPER_BOUND, MODERATE_UPPER_BOUND};

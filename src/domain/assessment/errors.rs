//! Assessment-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, ValidationError};

use super::Stage;

/// Assessment errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// Requested action is not available in the current stage.
    InvalidStage { action: &'static str, stage: Stage },
    /// "Next" was triggered before the current question had a rating.
    ResponseRequired(QuestionId),
    /// Selector or scorer invoked without all required answers.
    IncompleteResponses { phase: &'static str, missing: Vec<QuestionId> },
    /// Onboarding input failed validation.
    Onboarding(ValidationError),
    /// Question id is not in the catalog.
    UnknownQuestion(String),
}

impl AssessmentError {
    pub fn invalid_stage(action: &'static str, stage: Stage) -> Self {
        AssessmentError::InvalidStage { action, stage }
    }
    pub fn response_required(question_id: QuestionId) -> Self {
        AssessmentError::ResponseRequired(question_id)
    }
    pub fn incomplete(phase: &'static str, missing: Vec<QuestionId>) -> Self {
        AssessmentError::IncompleteResponses { phase, missing }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::InvalidStage { .. } => ErrorCode::InvalidStateTransition,
            AssessmentError::ResponseRequired(_) => ErrorCode::ResponseRequired,
            AssessmentError::IncompleteResponses { .. } => ErrorCode::IncompleteResponses,
            AssessmentError::Onboarding(_) => ErrorCode::ValidationFailed,
            AssessmentError::UnknownQuestion(_) => ErrorCode::QuestionNotFound,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AssessmentError::InvalidStage { action, stage } => {
                format!("Cannot {} during the {} stage", action, stage)
            }
            AssessmentError::ResponseRequired(id) => {
                format!("Question {} needs a rating before moving on", id)
            }
            AssessmentError::IncompleteResponses { phase, missing } => {
                let ids: Vec<&str> = missing.iter().map(|id| id.as_str()).collect();
                format!("Missing {} responses: {}", phase, ids.join(", "))
            }
            AssessmentError::Onboarding(err) => format!("Onboarding incomplete: {}", err),
            AssessmentError::UnknownQuestion(id) => format!("Unknown question id '{}'", id),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::Onboarding(err)
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

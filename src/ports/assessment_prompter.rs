//! Assessment Prompter Port - The participant-facing side of a session.
//!
//! The sequencer decides what comes next; a prompter only shows it and
//! collects the participant's choice. Interactive terminals and scripted
//! answer sheets both sit behind this trait.

use thiserror::Error;

use crate::domain::assessment::{OnboardingForm, Progress};
use crate::domain::catalog::{Module, Question};
use crate::domain::foundation::{QuestionId, Rating, ValidationError};
use crate::domain::scoring::AssessmentReport;

/// Port for presenting an assessment and collecting answers.
///
/// Calls arrive in stage order and never overlap.
pub trait AssessmentPrompter {
    /// Hero screen. Returns `false` if the participant declines to start.
    fn welcome(&mut self) -> Result<bool, PromptError>;

    /// Collects onboarding fields. `rejected` carries the reason the
    /// previous attempt was refused.
    fn onboarding(
        &mut self,
        rejected: Option<&ValidationError>,
    ) -> Result<OnboardingForm, PromptError>;

    /// Shows a module's name and theme before its questions.
    fn module_intro(&mut self, module: &Module, progress: Progress) -> Result<(), PromptError>;

    /// Asks one question. `current` is the rating already on record.
    fn ask(
        &mut self,
        question: &Question,
        current: Option<Rating>,
        progress: Progress,
    ) -> Result<Rating, PromptError>;

    /// Shows the final result.
    fn show_result(&mut self, report: &AssessmentReport) -> Result<(), PromptError>;

    /// Returns `true` if the participant wants to start over.
    fn offer_retake(&mut self) -> Result<bool, PromptError>;
}

/// Errors raised while talking to the participant.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended before the assessment finished.
    #[error("Input closed before the assessment finished")]
    EndOfInput,

    /// Reading or writing the terminal failed.
    #[error("Terminal IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A scripted answer sheet has no rating for a question.
    #[error("No answer provided for question {0}")]
    MissingAnswer(QuestionId),

    /// The participant gave up on onboarding.
    #[error("Onboarding abandoned after {attempts} attempts")]
    OnboardingAbandoned { attempts: u32 },
}

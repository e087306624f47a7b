//! Scripted answers loaded from a YAML or JSON file.
//!
//! ```yaml
//! participant:
//!   name: Ada Lovelace
//!   email: ada@uni.edu
//!   age: 21
//! answers:
//!   c1: 3
//!   c2: 4
//!   a1: 2
//! ```
//!
//! Answers are keyed by question id. Only the questions the session
//! actually asks are read; extra answers are ignored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::domain::assessment::{OnboardingForm, Progress};
use crate::domain::catalog::{self, Module, Question};
use crate::domain::foundation::{QuestionId, Rating, ValidationError};
use crate::domain::scoring::AssessmentReport;
use crate::ports::{AssessmentPrompter, PromptError};

/// Errors loading or validating an answer sheet.
#[derive(Debug, Error)]
pub enum AnswerSheetError {
    #[error("Failed to read answer sheet {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse answer sheet: {0}")]
    Parse(String),

    #[error("Unknown question id '{0}' in answer sheet")]
    UnknownQuestion(String),

    #[error("Invalid rating for {question}: {source}")]
    InvalidRating {
        question: String,
        #[source]
        source: ValidationError,
    },
}

/// Participant details plus a rating per question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    #[serde(default)]
    pub participant: OnboardingForm,
    #[serde(default)]
    pub answers: BTreeMap<String, u8>,
}

impl AnswerSheet {
    /// Parses YAML. JSON documents are accepted too.
    pub fn from_yaml(text: &str) -> Result<Self, AnswerSheetError> {
        let sheet: Self =
            serde_yaml::from_str(text).map_err(|e| AnswerSheetError::Parse(e.to_string()))?;
        sheet.validate()?;
        Ok(sheet)
    }

    pub fn from_json(text: &str) -> Result<Self, AnswerSheetError> {
        let sheet: Self =
            serde_json::from_str(text).map_err(|e| AnswerSheetError::Parse(e.to_string()))?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Loads a sheet, choosing the parser by file extension.
    pub fn load(path: &Path) -> Result<Self, AnswerSheetError> {
        let text = std::fs::read_to_string(path).map_err(|e| AnswerSheetError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json(&text)
        } else {
            Self::from_yaml(&text)
        }
    }

    /// Checks every key is a catalog question and every value a valid rating.
    pub fn validate(&self) -> Result<(), AnswerSheetError> {
        for (id, value) in &self.answers {
            if catalog::find_question(id).is_none() {
                return Err(AnswerSheetError::UnknownQuestion(id.clone()));
            }
            Rating::try_from_u8(*value).map_err(|source| AnswerSheetError::InvalidRating {
                question: id.clone(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn rating_for(&self, id: QuestionId) -> Option<Rating> {
        self.answers
            .get(id.as_str())
            .and_then(|v| Rating::try_from_u8(*v).ok())
    }
}

/// Prompter that answers from an [`AnswerSheet`].
///
/// Never offers a retake. The last shown report is kept for inspection.
#[derive(Debug, Clone)]
pub struct ScriptedPrompter {
    sheet: AnswerSheet,
    last_report: Option<AssessmentReport>,
    onboarding_attempts: u32,
}

impl ScriptedPrompter {
    pub fn new(sheet: AnswerSheet) -> Self {
        Self {
            sheet,
            last_report: None,
            onboarding_attempts: 0,
        }
    }

    /// Report passed to the most recent `show_result`.
    pub fn last_report(&self) -> Option<&AssessmentReport> {
        self.last_report.as_ref()
    }

    pub fn into_report(self) -> Option<AssessmentReport> {
        self.last_report
    }

    pub fn onboarding_attempts(&self) -> u32 {
        self.onboarding_attempts
    }
}

impl AssessmentPrompter for ScriptedPrompter {
    fn welcome(&mut self) -> Result<bool, PromptError> {
        Ok(true)
    }

    fn onboarding(
        &mut self,
        rejected: Option<&ValidationError>,
    ) -> Result<OnboardingForm, PromptError> {
        self.onboarding_attempts += 1;
        if let Some(err) = rejected {
            tracing::warn!(error = %err, "Scripted participant rejected");
        }
        Ok(self.sheet.participant.clone())
    }

    fn module_intro(&mut self, module: &Module, _progress: Progress) -> Result<(), PromptError> {
        tracing::debug!(module = module.id().as_str(), "Scripted module intro");
        Ok(())
    }

    fn ask(
        &mut self,
        question: &Question,
        _current: Option<Rating>,
        _progress: Progress,
    ) -> Result<Rating, PromptError> {
        self.sheet
            .rating_for(question.id())
            .ok_or(PromptError::MissingAnswer(question.id()))
    }

    fn show_result(&mut self, report: &AssessmentReport) -> Result<(), PromptError> {
        self.last_report = Some(report.clone());
        Ok(())
    }

    fn offer_retake(&mut self) -> Result<bool, PromptError> {
        Ok(false)
    }
}

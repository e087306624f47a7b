//! Scoring Engine - aggregates responses into an AssessmentResult.
//!
//! All functions are pure apart from reading the clock in
//! [`ScoringEngine::score`].

use super::{AssessmentResult, ModuleScore, StressLevel};
use crate::domain::assessment::{AssessmentError, ModuleSelection, ResponseSet};
use crate::domain::catalog;
use crate::domain::foundation::{Percentage, Timestamp};

/// Highest possible core score (10 questions rated at most 4).
pub const CORE_MAX_SCORE: u32 = 40;

/// Highest possible score for one module (5 questions rated at most 4).
pub const MODULE_MAX_SCORE: u32 = 20;

/// Number of modules reported as dominant categories.
pub const DOMINANT_CATEGORY_LIMIT: usize = 2;

/// Stateless calculator for assessment results.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores a finished assessment, stamping it with the current time.
    ///
    /// # Errors
    ///
    /// - `IncompleteResponses` if a core question is unanswered, or if the
    ///   module phase ran and an activated module has unanswered questions
    pub fn score(
        core: &ResponseSet,
        module_responses: &ResponseSet,
        selection: &ModuleSelection,
    ) -> Result<AssessmentResult, AssessmentError> {
        Self::score_at(core, module_responses, selection, Timestamp::now())
    }

    /// Same as [`score`](Self::score) with an explicit completion time.
    pub fn score_at(
        core: &ResponseSet,
        module_responses: &ResponseSet,
        selection: &ModuleSelection,
        completed_at: Timestamp,
    ) -> Result<AssessmentResult, AssessmentError> {
        let core_questions = catalog::core_questions();
        let missing_core: Vec<_> = core.missing(core_questions).iter().map(|q| q.id()).collect();
        if !missing_core.is_empty() {
            return Err(AssessmentError::incomplete("core", missing_core));
        }

        let modules = selection.scored_modules();
        if selection.enters_module_phase() {
            let missing_module: Vec<_> = modules
                .iter()
                .flat_map(|m| module_responses.missing(m.questions()))
                .map(|q| q.id())
                .collect();
            if !missing_module.is_empty() {
                return Err(AssessmentError::incomplete("module", missing_module));
            }
        }

        let core_score = core.sum_for(core_questions);

        let module_scores: Vec<ModuleScore> = modules
            .iter()
            .map(|m| ModuleScore {
                module: m.id(),
                name: m.name().to_string(),
                score: module_responses.sum_for(m.questions()),
            })
            .collect();

        let total_score = core_score + module_scores.iter().map(|s| s.score).sum::<u32>();
        let max_score = Self::max_score(module_scores.len());
        let percentage = Percentage::of(total_score, max_score);
        let stress_level = StressLevel::from_percentage(percentage);
        let dominant_categories = Self::dominant_categories(&module_scores);

        tracing::info!(
            core_score,
            total_score,
            max_score,
            percentage = percentage.value(),
            stress_level = %stress_level,
            "Assessment scored"
        );

        Ok(AssessmentResult::new(
            core_score,
            module_scores,
            total_score,
            max_score,
            percentage,
            stress_level,
            dominant_categories,
            completed_at,
        ))
    }

    /// `40 + 20 * module_count`.
    pub fn max_score(module_count: usize) -> u32 {
        CORE_MAX_SCORE + MODULE_MAX_SCORE * module_count as u32
    }

    /// Names of the top two modules by score, ties kept in activation order.
    pub fn dominant_categories(scores: &[ModuleScore]) -> Vec<String> {
        let mut ranked: Vec<&ModuleScore> = scores.iter().collect();
        // sort_by is stable, so equal scores keep catalog order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
            .into_iter()
            .take(DOMINANT_CATEGORY_LIMIT)
            .map(|s| s.name.clone())
            .collect()
    }
}

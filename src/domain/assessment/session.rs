//! AssessmentSession aggregate - the stage sequencer.
//!
//! One session owns every piece of mutable state for a single run through
//! the questionnaire. Callers read snapshots through accessors and request
//! transitions through the command methods; nothing else mutates it.
//!
//! # Flow
//!
//! ```text
//! hero -> onboarding -> core -> (module-intro -> module)* -> results
//!   ^                                                           |
//!   +------------------------- retake --------------------------+
//! ```

use serde::Serialize;

use super::{
    AssessmentError, ModuleSelection, ModuleSelector, OnboardingForm, Participant, Progress,
    ResponseSet, Stage,
};
use crate::domain::catalog::{self, Module, ModuleId, Question};
use crate::domain::foundation::{Rating, SessionId, StateMachine, Timestamp};
use crate::domain::scoring::{AssessmentReport, AssessmentResult, ScoringEngine};

/// Aggregate driving one assessment from hero screen to results.
///
/// # Invariants
///
/// - `participant` is set before any question is shown
/// - `selection` is set exactly once, when the last core question is passed
/// - `result` is set exactly once, on entering `Results`
/// - `question_index` always points into the current question list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSession {
    id: SessionId,
    stage: Stage,
    participant: Option<Participant>,
    core_responses: ResponseSet,
    module_responses: ResponseSet,
    selection: Option<ModuleSelection>,
    question_index: usize,
    module_index: usize,
    result: Option<AssessmentResult>,
    started_at: Timestamp,
}

impl AssessmentSession {
    /// Creates a fresh session on the hero stage.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            stage: Stage::Hero,
            participant: None,
            core_responses: ResponseSet::new(),
            module_responses: ResponseSet::new(),
            selection: None,
            question_index: 0,
            module_index: 0,
            result: None,
            started_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn participant(&self) -> Option<&Participant> {
        self.participant.as_ref()
    }

    pub fn core_responses(&self) -> &ResponseSet {
        &self.core_responses
    }

    pub fn module_responses(&self) -> &ResponseSet {
        &self.module_responses
    }

    /// Module selection, available once the core phase is complete.
    pub fn selection(&self) -> Option<&ModuleSelection> {
        self.selection.as_ref()
    }

    /// Final result, available on the results stage.
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Modules the participant walks through, in order.
    ///
    /// Empty until selection, and empty when the module phase is skipped.
    pub fn module_plan(&self) -> Vec<&'static Module> {
        self.selection
            .as_ref()
            .map(ModuleSelection::scored_modules)
            .unwrap_or_default()
    }

    /// Module being introduced or answered.
    pub fn current_module(&self) -> Option<&'static Module> {
        match self.stage {
            Stage::ModuleIntro | Stage::Module => {
                self.module_plan().get(self.module_index).copied()
            }
            _ => None,
        }
    }

    /// Question currently on screen.
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.stage {
            Stage::Core => catalog::core_questions().get(self.question_index),
            Stage::Module => self
                .current_module()
                .and_then(|m| m.questions().get(self.question_index)),
            _ => None,
        }
    }

    /// Zero-based position of the current question within its list.
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// Rating already recorded for the current question.
    pub fn current_rating(&self) -> Option<Rating> {
        let question = self.current_question()?;
        self.responses_for_stage()
            .and_then(|set| set.rating_for(question.id()))
    }

    /// Position in the whole questionnaire.
    pub fn progress(&self) -> Progress {
        let plan = self.module_plan();
        let core_count = catalog::core_questions().len();
        let total = core_count + plan.iter().map(|m| m.question_count()).sum::<usize>();

        let finished_modules: usize = plan
            .iter()
            .take(self.module_index)
            .map(|m| m.question_count())
            .sum();

        let completed = match self.stage {
            Stage::Hero | Stage::Onboarding => 0,
            Stage::Core => self.core_responses.answered_among(catalog::core_questions()),
            Stage::ModuleIntro => core_count + finished_modules,
            Stage::Module => {
                let current = self
                    .current_module()
                    .map(|m| self.module_responses.answered_among(m.questions()))
                    .unwrap_or(0);
                core_count + finished_modules + current
            }
            Stage::Results => total,
        };

        Progress::new(completed, total)
    }

    /// Export snapshot of a finished session.
    pub fn report(&self) -> Option<AssessmentReport> {
        let result = self.result.clone()?;
        let modules: Vec<ModuleId> = self.module_plan().iter().map(|m| m.id()).collect();
        Some(AssessmentReport::new(
            self.id,
            self.participant.clone(),
            result,
            self.core_responses.clone(),
            self.module_responses.clone(),
            modules,
        ))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Leaves the hero screen for onboarding.
    pub fn start(&mut self) -> Result<(), AssessmentError> {
        self.transition("start", Stage::Onboarding)?;
        tracing::info!(session_id = %self.id, "Assessment started");
        Ok(())
    }

    /// Validates onboarding input and opens the first core question.
    ///
    /// # Errors
    ///
    /// - `InvalidStage` outside onboarding
    /// - `Onboarding` if a field is missing or malformed; the session stays
    ///   on onboarding so the form can be resubmitted
    pub fn submit_onboarding(&mut self, form: &OnboardingForm) -> Result<(), AssessmentError> {
        self.ensure_stage("submit onboarding", Stage::Onboarding)?;
        let participant = Participant::from_form(form).map_err(AssessmentError::Onboarding)?;
        self.register(participant)
    }

    /// Same as [`submit_onboarding`](Self::submit_onboarding) for an already
    /// validated participant.
    pub fn register(&mut self, participant: Participant) -> Result<(), AssessmentError> {
        self.transition("submit onboarding", Stage::Core)?;
        self.participant = Some(participant);
        self.question_index = 0;
        tracing::debug!(session_id = %self.id, "Onboarding accepted");
        Ok(())
    }

    /// Rates the current question. Re-rating replaces the earlier answer.
    ///
    /// Returns the replaced rating, if any.
    pub fn answer(&mut self, rating: Rating) -> Result<Option<Rating>, AssessmentError> {
        let question = self
            .current_question()
            .ok_or_else(|| AssessmentError::invalid_stage("answer", self.stage))?;
        let set = match self.stage {
            Stage::Core => &mut self.core_responses,
            _ => &mut self.module_responses,
        };
        Ok(set.record(question.id(), rating))
    }

    /// Moves past the current question.
    ///
    /// Leaving the last core question runs module selection; leaving the
    /// last question of the last module scores the assessment.
    ///
    /// # Errors
    ///
    /// - `InvalidStage` outside core and module stages
    /// - `ResponseRequired` if the current question has no rating
    pub fn next(&mut self) -> Result<Stage, AssessmentError> {
        let question = self
            .current_question()
            .ok_or_else(|| AssessmentError::invalid_stage("advance", self.stage))?;
        if self.current_rating().is_none() {
            return Err(AssessmentError::response_required(question.id()));
        }

        match self.stage {
            Stage::Core => self.advance_core(),
            _ => self.advance_module(),
        }?;
        Ok(self.stage)
    }

    /// Leaves a module intro for its first question.
    pub fn begin_module(&mut self) -> Result<&'static Module, AssessmentError> {
        self.ensure_stage("begin a module", Stage::ModuleIntro)?;
        let module = self
            .current_module()
            .ok_or_else(|| AssessmentError::invalid_stage("begin a module", self.stage))?;
        self.transition("begin a module", Stage::Module)?;
        self.question_index = 0;
        tracing::debug!(session_id = %self.id, module = module.id().as_str(), "Module started");
        Ok(module)
    }

    /// Discards everything and returns to the hero screen with a new id.
    pub fn retake(&mut self) -> Result<(), AssessmentError> {
        self.transition("retake", Stage::Hero)?;
        let previous = self.id;
        *self = Self::new();
        tracing::info!(previous_session = %previous, session_id = %self.id, "Assessment reset");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn advance_core(&mut self) -> Result<(), AssessmentError> {
        if self.question_index + 1 < catalog::core_questions().len() {
            self.transition("advance", Stage::Core)?;
            self.question_index += 1;
            return Ok(());
        }

        let selection = ModuleSelector::select(&self.core_responses)?;
        let enters_module_phase = selection.enters_module_phase();
        self.selection = Some(selection);

        if enters_module_phase {
            self.transition("advance", Stage::ModuleIntro)?;
            self.module_index = 0;
            self.question_index = 0;
            Ok(())
        } else {
            self.finish()
        }
    }

    fn advance_module(&mut self) -> Result<(), AssessmentError> {
        let question_count = self.current_module().map(Module::question_count).unwrap_or(0);
        if self.question_index + 1 < question_count {
            self.transition("advance", Stage::Module)?;
            self.question_index += 1;
            return Ok(());
        }

        if self.module_index + 1 < self.module_plan().len() {
            self.transition("advance", Stage::ModuleIntro)?;
            self.module_index += 1;
            self.question_index = 0;
            Ok(())
        } else {
            self.finish()
        }
    }

    fn finish(&mut self) -> Result<(), AssessmentError> {
        let selection = self
            .selection
            .as_ref()
            .ok_or_else(|| AssessmentError::invalid_stage("score", self.stage))?;
        let result = ScoringEngine::score(&self.core_responses, &self.module_responses, selection)?;
        let activated = selection.activated().to_vec();
        self.transition("score", Stage::Results)?;
        tracing::info!(
            session_id = %self.id,
            stress_level = %result.stress_level(),
            percentage = result.percentage().value(),
            activated = ?activated,
            "Assessment completed"
        );
        self.result = Some(result);
        Ok(())
    }

    fn responses_for_stage(&self) -> Option<&ResponseSet> {
        match self.stage {
            Stage::Core => Some(&self.core_responses),
            Stage::Module => Some(&self.module_responses),
            _ => None,
        }
    }

    fn ensure_stage(&self, action: &'static str, expected: Stage) -> Result<(), AssessmentError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(AssessmentError::invalid_stage(action, self.stage))
        }
    }

    fn transition(&mut self, action: &'static str, target: Stage) -> Result<(), AssessmentError> {
        self.stage = self
            .stage
            .transition_to(target)
            .map_err(|_| AssessmentError::invalid_stage(action, self.stage))?;
        Ok(())
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

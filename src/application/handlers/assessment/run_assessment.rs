//! RunAssessmentHandler - Drives a session from hero screen to results.

use thiserror::Error;

use crate::domain::assessment::{AssessmentError, AssessmentSession, Stage};
use crate::domain::foundation::ValidationError;
use crate::domain::scoring::AssessmentReport;
use crate::ports::{AssessmentPrompter, PromptError};

/// Onboarding submissions allowed before giving up.
pub const DEFAULT_ONBOARDING_ATTEMPTS: u32 = 3;

/// Command to run the questionnaire.
#[derive(Debug, Clone)]
pub struct RunAssessmentCommand {
    pub max_onboarding_attempts: u32,
    /// Offer a retake after each result.
    pub allow_retake: bool,
}

impl Default for RunAssessmentCommand {
    fn default() -> Self {
        Self {
            max_onboarding_attempts: DEFAULT_ONBOARDING_ATTEMPTS,
            allow_retake: true,
        }
    }
}

/// Result of a run. One report per completed attempt, oldest first.
#[derive(Debug, Clone, Default)]
pub struct RunAssessmentResult {
    pub reports: Vec<AssessmentReport>,
    /// The participant declined to start on the hero screen.
    pub declined: bool,
    /// A retake was cut short by the prompter. Earlier reports are kept.
    pub abandoned: bool,
}

impl RunAssessmentResult {
    /// Report of the final attempt.
    pub fn latest(&self) -> Option<&AssessmentReport> {
        self.reports.last()
    }
}

/// Errors that stop a run.
#[derive(Debug, Error)]
pub enum RunAssessmentError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

/// Handler wiring an [`AssessmentSession`] to an [`AssessmentPrompter`].
#[derive(Debug, Clone, Default)]
pub struct RunAssessmentHandler;

impl RunAssessmentHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        prompter: &mut dyn AssessmentPrompter,
        cmd: RunAssessmentCommand,
    ) -> Result<RunAssessmentResult, RunAssessmentError> {
        let mut session = AssessmentSession::new();
        let mut result = RunAssessmentResult::default();

        loop {
            // 1. Hero
            if !prompter.welcome()? {
                result.declined = result.reports.is_empty();
                return Ok(result);
            }

            match self.run_attempt(&mut session, prompter, &cmd) {
                Ok(report) => result.reports.push(report),
                Err(RunAssessmentError::Prompt(err)) if !result.reports.is_empty() => {
                    tracing::warn!(error = %err, "Retake abandoned, keeping earlier reports");
                    result.abandoned = true;
                    return Ok(result);
                }
                Err(err) => return Err(err),
            }

            if !cmd.allow_retake || !prompter.offer_retake()? {
                return Ok(result);
            }
            session.retake()?;
        }
    }

    /// Onboarding through results for one attempt.
    fn run_attempt(
        &self,
        session: &mut AssessmentSession,
        prompter: &mut dyn AssessmentPrompter,
        cmd: &RunAssessmentCommand,
    ) -> Result<AssessmentReport, RunAssessmentError> {
        session.start()?;

        // 2. Onboarding
        self.onboard(session, prompter, cmd.max_onboarding_attempts)?;

        // 3. Core and module questions
        self.answer_questions(session, prompter)?;

        // 4. Results
        let report = session
            .report()
            .ok_or_else(|| AssessmentError::invalid_stage("show results", session.stage()))?;
        prompter.show_result(&report)?;
        Ok(report)
    }

    fn onboard(
        &self,
        session: &mut AssessmentSession,
        prompter: &mut dyn AssessmentPrompter,
        max_attempts: u32,
    ) -> Result<(), RunAssessmentError> {
        let mut rejected: Option<ValidationError> = None;

        for attempt in 1..=max_attempts.max(1) {
            let form = prompter.onboarding(rejected.as_ref())?;
            match session.submit_onboarding(&form) {
                Ok(()) => return Ok(()),
                Err(AssessmentError::Onboarding(err)) => {
                    tracing::warn!(attempt, field = err.field(), "Onboarding rejected");
                    rejected = Some(err);
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(PromptError::OnboardingAbandoned {
            attempts: max_attempts.max(1),
        }
        .into())
    }

    fn answer_questions(
        &self,
        session: &mut AssessmentSession,
        prompter: &mut dyn AssessmentPrompter,
    ) -> Result<(), RunAssessmentError> {
        loop {
            match session.stage() {
                Stage::Core | Stage::Module => {
                    let question = session
                        .current_question()
                        .ok_or_else(|| AssessmentError::invalid_stage("ask", session.stage()))?;
                    let rating =
                        prompter.ask(question, session.current_rating(), session.progress())?;
                    session.answer(rating)?;
                    session.next()?;
                }
                Stage::ModuleIntro => {
                    let module = session.current_module().ok_or_else(|| {
                        AssessmentError::invalid_stage("introduce a module", session.stage())
                    })?;
                    prompter.module_intro(module, session.progress())?;
                    session.begin_module()?;
                }
                Stage::Results => return Ok(()),
                stage @ (Stage::Hero | Stage::Onboarding) => {
                    return Err(AssessmentError::invalid_stage("ask", stage).into());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{OnboardingForm, Progress};
    use crate::domain::catalog::{Module, Question};
    use crate::domain::foundation::Rating;
    use crate::domain::scoring::StressLevel;

    /// Prompter returning fixed answers and recording what it was shown.
    struct FakePrompter {
        forms: Vec<OnboardingForm>,
        rating: Rating,
        retakes: u32,
        start: bool,
        asked: Vec<String>,
        intros: Vec<String>,
        rejections: Vec<String>,
        progress: Vec<Progress>,
    }

    impl FakePrompter {
        fn new(rating: Rating) -> Self {
            Self {
                forms: vec![valid_form()],
                rating,
                retakes: 0,
                start: true,
                asked: Vec::new(),
                intros: Vec::new(),
                rejections: Vec::new(),
                progress: Vec::new(),
            }
        }
    }

    fn valid_form() -> OnboardingForm {
        OnboardingForm {
            name: "Ada".to_string(),
            email: "ada@uni.edu".to_string(),
            age: Some(20),
        }
    }

    impl AssessmentPrompter for FakePrompter {
        fn welcome(&mut self) -> Result<bool, PromptError> {
            Ok(self.start)
        }

        fn onboarding(
            &mut self,
            rejected: Option<&ValidationError>,
        ) -> Result<OnboardingForm, PromptError> {
            if let Some(err) = rejected {
                self.rejections.push(err.field().to_string());
            }
            if self.forms.len() > 1 {
                Ok(self.forms.remove(0))
            } else {
                Ok(self.forms[0].clone())
            }
        }

        fn module_intro(
            &mut self,
            module: &Module,
            _progress: Progress,
        ) -> Result<(), PromptError> {
            self.intros.push(module.name().to_string());
            Ok(())
        }

        fn ask(
            &mut self,
            question: &Question,
            _current: Option<Rating>,
            progress: Progress,
        ) -> Result<Rating, PromptError> {
            self.asked.push(question.id().to_string());
            self.progress.push(progress);
            Ok(self.rating)
        }

        fn show_result(&mut self, _report: &AssessmentReport) -> Result<(), PromptError> {
            Ok(())
        }

        fn offer_retake(&mut self) -> Result<bool, PromptError> {
            if self.retakes > 0 {
                self.retakes -= 1;
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }

    #[test]
    fn low_answers_finish_after_core() {
        let mut prompter = FakePrompter::new(Rating::Rarely);
        let result = RunAssessmentHandler::new()
            .handle(&mut prompter, RunAssessmentCommand::default())
            .unwrap();

        assert_eq!(prompter.asked.len(), 10);
        assert!(prompter.intros.is_empty());
        let report = result.latest().unwrap();
        assert_eq!(report.result().total_score(), 10);
        assert_eq!(report.result().max_score(), 40);
        assert_eq!(report.result().stress_level(), StressLevel::Low);
    }

    #[test]
    fn high_answers_walk_every_module() {
        let mut prompter = FakePrompter::new(Rating::VeryOften);
        let result = RunAssessmentHandler::new()
            .handle(&mut prompter, RunAssessmentCommand::default())
            .unwrap();

        assert_eq!(prompter.asked.len(), 30);
        assert_eq!(
            prompter.intros,
            vec![
                "Academic Pressures",
                "Health & Lifestyle",
                "Financial & Practical Concerns",
                "Social & Relationships"
            ]
        );
        assert_eq!(prompter.asked[10], "a1");
        assert_eq!(prompter.asked[29], "s5");
        assert_eq!(prompter.progress[10], Progress::new(10, 30));
        assert_eq!(result.latest().unwrap().result().percentage().value(), 100.0);
    }

    #[test]
    fn onboarding_is_retried_with_reason() {
        let mut prompter = FakePrompter::new(Rating::NotAtAll);
        let mut missing_email = valid_form();
        missing_email.email.clear();
        prompter.forms = vec![missing_email, valid_form()];

        let result = RunAssessmentHandler::new()
            .handle(&mut prompter, RunAssessmentCommand::default())
            .unwrap();

        assert_eq!(prompter.rejections, vec!["email"]);
        assert_eq!(result.reports.len(), 1);
    }

    #[test]
    fn onboarding_gives_up_after_max_attempts() {
        let mut prompter = FakePrompter::new(Rating::NotAtAll);
        let mut bad = valid_form();
        bad.age = Some(5);
        prompter.forms = vec![bad];

        let err = RunAssessmentHandler::new()
            .handle(&mut prompter, RunAssessmentCommand::default())
            .unwrap_err();

        assert!(matches!(
            err,
            RunAssessmentError::Prompt(PromptError::OnboardingAbandoned { attempts: 3 })
        ));
        assert_eq!(prompter.rejections.len(), 2);
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn retake_runs_a_fresh_session() {
        let mut prompter = FakePrompter::new(Rating::Sometimes);
        prompter.retakes = 1;

        let result = RunAssessmentHandler::new()
            .handle(&mut prompter, RunAssessmentCommand::default())
            .unwrap();

        assert_eq!(result.reports.len(), 2);
        assert_ne!(result.reports[0].session_id(), result.reports[1].session_id());
        assert_eq!(result.reports[1].core_responses().len(), 10);
    }

    #[test]
    fn rejected_retake_keeps_completed_report() {
        let mut prompter = FakePrompter::new(Rating::VeryOften);
        let mut bad_email = valid_form();
        bad_email.email = "not-an-email".to_string();
        prompter.forms = vec![valid_form(), bad_email];
        prompter.retakes = 1;

        let result = RunAssessmentHandler::new()
            .handle(&mut prompter, RunAssessmentCommand::default())
            .unwrap();

        assert!(result.abandoned);
        assert!(!result.declined);
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.latest().unwrap().result().total_score(), 120);
        assert_eq!(prompter.asked.len(), 30);
        assert_eq!(prompter.rejections, vec!["email", "email"]);
    }

    #[test]
    fn first_attempt_rejection_is_still_an_error() {
        let mut prompter = FakePrompter::new(Rating::VeryOften);
        let mut bad_email = valid_form();
        bad_email.email = "not-an-email".to_string();
        prompter.forms = vec![bad_email];
        prompter.retakes = 1;

        let err = RunAssessmentHandler::new()
            .handle(&mut prompter, RunAssessmentCommand::default())
            .unwrap_err();
        assert!(matches!(
            err,
            RunAssessmentError::Prompt(PromptError::OnboardingAbandoned { .. })
        ));
    }

    #[test]
    fn retake_not_offered_when_disabled() {
        let mut prompter = FakePrompter::new(Rating::Sometimes);
        prompter.retakes = 5;
        let cmd = RunAssessmentCommand {
            allow_retake: false,
            ..RunAssessmentCommand::default()
        };

        let result = RunAssessmentHandler::new().handle(&mut prompter, cmd).unwrap();
        assert_eq!(result.reports.len(), 1);
        assert_eq!(prompter.retakes, 5);
    }

    #[test]
    fn declining_on_hero_asks_nothing() {
        let mut prompter = FakePrompter::new(Rating::Often);
        prompter.start = false;

        let result = RunAssessmentHandler::new()
            .handle(&mut prompter, RunAssessmentCommand::default())
            .unwrap();

        assert!(result.declined);
        assert!(result.reports.is_empty());
        assert!(prompter.asked.is_empty());
    }
}

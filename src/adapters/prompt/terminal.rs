//! Interactive terminal prompter.
//!
//! Generic over the input and output streams so it can be driven by
//! in-memory buffers in tests. Invalid input is reported and asked again;
//! it never advances the session.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::domain::assessment::{OnboardingForm, Progress};
use crate::domain::catalog::{Module, Question};
use crate::domain::foundation::{Rating, ValidationError};
use crate::domain::scoring::AssessmentReport;
use crate::ports::{AssessmentPrompter, PromptError};

const PROGRESS_BAR_WIDTH: usize = 30;

/// Line-oriented prompter over any `BufRead`/`Write` pair.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn prompt(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_age(&mut self) -> Result<Option<u8>, PromptError> {
        loop {
            let raw = self.prompt("Age")?;
            if raw.is_empty() {
                return Ok(None);
            }
            match raw.parse::<u8>() {
                Ok(age) => return Ok(Some(age)),
                Err(_) => writeln!(self.output, "  Please enter your age as a whole number.")?,
            }
        }
    }

    fn progress_bar(&mut self, progress: Progress) -> Result<(), PromptError> {
        let filled = if progress.total() == 0 {
            0
        } else {
            progress.completed() * PROGRESS_BAR_WIDTH / progress.total()
        };
        writeln!(
            self.output,
            "[{}{}] {}/{}",
            "#".repeat(filled),
            "-".repeat(PROGRESS_BAR_WIDTH - filled),
            progress.completed(),
            progress.total()
        )?;
        Ok(())
    }

    fn parse_rating(raw: &str) -> Option<Rating> {
        raw.parse::<u8>().ok().and_then(|v| Rating::try_from_u8(v).ok())
    }
}

impl<R: BufRead, W: Write> AssessmentPrompter for TerminalPrompter<R, W> {
    fn welcome(&mut self) -> Result<bool, PromptError> {
        writeln!(self.output)?;
        writeln!(self.output, "Combined College Student Stress Scale (CCSSS)")?;
        writeln!(
            self.output,
            "A short assessment of academic, health, financial and social stress."
        )?;
        writeln!(self.output)?;
        let answer = self.prompt("Press Enter to begin, or type q to quit")?;
        Ok(!answer.eq_ignore_ascii_case("q"))
    }

    fn onboarding(
        &mut self,
        rejected: Option<&ValidationError>,
    ) -> Result<OnboardingForm, PromptError> {
        if let Some(err) = rejected {
            writeln!(self.output, "  {}. Please try again.", err)?;
        } else {
            writeln!(self.output, "Before we begin, tell us a little about yourself.")?;
        }
        let name = self.prompt("Name")?;
        let email = self.prompt("Email")?;
        let age = self.prompt_age()?;
        Ok(OnboardingForm { name, email, age })
    }

    fn module_intro(&mut self, module: &Module, progress: Progress) -> Result<(), PromptError> {
        writeln!(self.output)?;
        self.progress_bar(progress)?;
        writeln!(self.output, "== {} ==", module.name())?;
        writeln!(
            self.output,
            "{} questions about this area.",
            module.question_count()
        )?;
        self.prompt("Press Enter to continue")?;
        Ok(())
    }

    fn ask(
        &mut self,
        question: &Question,
        current: Option<Rating>,
        progress: Progress,
    ) -> Result<Rating, PromptError> {
        writeln!(self.output)?;
        self.progress_bar(progress)?;
        writeln!(self.output, "{}", question.text())?;
        for rating in Rating::ALL {
            writeln!(self.output, "  {} - {}", rating.value(), rating.label())?;
        }

        let label = match current {
            Some(r) => format!("Your rating (0-4, Enter keeps {})", r.value()),
            None => "Your rating (0-4)".to_string(),
        };
        loop {
            let raw = self.prompt(&label)?;
            if raw.is_empty() {
                if let Some(r) = current {
                    return Ok(r);
                }
            }
            match Self::parse_rating(&raw) {
                Some(rating) => return Ok(rating),
                None => writeln!(self.output, "  Please choose a number from 0 to 4.")?,
            }
        }
    }

    fn show_result(&mut self, report: &AssessmentReport) -> Result<(), PromptError> {
        let result = report.result();
        writeln!(self.output)?;
        writeln!(self.output, "Your Results")?;
        writeln!(self.output, "------------")?;
        writeln!(
            self.output,
            "Total Score: {} / {} ({})",
            result.total_score(),
            result.max_score(),
            result.percentage()
        )?;
        writeln!(self.output, "Stress Level: {}", result.stress_level())?;
        writeln!(self.output, "Core Assessment: {} / 40", result.core_score())?;
        for score in result.module_scores() {
            writeln!(self.output, "{}: {} / 20", score.name, score.score)?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", report.summary())?;
        Ok(())
    }

    fn offer_retake(&mut self) -> Result<bool, PromptError> {
        let answer = match self.prompt("Take the assessment again? [y/N]") {
            Ok(answer) => answer,
            Err(PromptError::EndOfInput) => return Ok(false),
            Err(e) => return Err(e),
        };
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::core_questions;
    use std::io::Cursor;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(p: TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn ask_reprompts_until_valid_rating() {
        let mut p = prompter("7\nabc\n3\n");
        let rating = p
            .ask(&core_questions()[0], None, Progress::new(0, 10))
            .unwrap();
        assert_eq!(rating, Rating::Often);
        let out = output_of(p);
        assert_eq!(out.matches("Please choose a number from 0 to 4.").count(), 2);
        assert!(out.contains("4 - Very Often"));
    }

    #[test]
    fn ask_keeps_current_rating_on_enter() {
        let mut p = prompter("\n");
        let rating = p
            .ask(&core_questions()[1], Some(Rating::Rarely), Progress::new(1, 10))
            .unwrap();
        assert_eq!(rating, Rating::Rarely);
    }

    #[test]
    fn ask_without_current_rejects_empty_input() {
        let mut p = prompter("\n2\n");
        let rating = p
            .ask(&core_questions()[0], None, Progress::new(0, 10))
            .unwrap();
        assert_eq!(rating, Rating::Sometimes);
    }

    #[test]
    fn ask_fails_at_end_of_input() {
        let mut p = prompter("");
        let err = p
            .ask(&core_questions()[0], None, Progress::new(0, 10))
            .unwrap_err();
        assert!(matches!(err, PromptError::EndOfInput));
    }

    #[test]
    fn onboarding_collects_fields_and_reprompts_age() {
        let mut p = prompter("Ada\nada@uni.edu\ntwenty\n20\n");
        let form = p.onboarding(None).unwrap();
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@uni.edu");
        assert_eq!(form.age, Some(20));
    }

    #[test]
    fn onboarding_shows_rejection_reason() {
        let mut p = prompter("Ada\nada@uni.edu\n\n");
        let err = ValidationError::empty_field("name");
        let form = p.onboarding(Some(&err)).unwrap();
        assert_eq!(form.age, None);
        assert!(output_of(p).contains("Field 'name' cannot be empty"));
    }

    #[test]
    fn welcome_can_be_declined() {
        assert!(prompter("\n").welcome().unwrap());
        assert!(!prompter("q\n").welcome().unwrap());
    }

    #[test]
    fn retake_defaults_to_no() {
        assert!(prompter("y\n").offer_retake().unwrap());
        assert!(!prompter("\n").offer_retake().unwrap());
        assert!(!prompter("").offer_retake().unwrap());
    }

    #[test]
    fn progress_bar_scales_to_width() {
        let mut p = prompter("");
        p.progress_bar(Progress::new(15, 30)).unwrap();
        let out = output_of(p);
        assert!(out.starts_with(&format!("[{}{}]", "#".repeat(15), "-".repeat(15))));
        assert!(out.contains("15/30"));
    }
}

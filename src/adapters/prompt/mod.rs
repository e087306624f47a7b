//! Prompt adapters - AssessmentPrompter implementations.
//!
//! - `TerminalPrompter` - interactive, line based
//! - `ScriptedPrompter` - answers from an `AnswerSheet` file

mod answer_sheet;
mod terminal;

pub use answer_sheet::{AnswerSheet, AnswerSheetError, ScriptedPrompter};
pub use terminal::TerminalPrompter;

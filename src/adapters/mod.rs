//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `export` - Report renderers (CSV, PDF, Markdown, JSON)
//! - `prompt` - Terminal and scripted prompters
//! - `storage` - Report storage (filesystem, in-memory)

pub mod export;
pub mod prompt;
pub mod storage;

pub use export::{
    renderer_for, CsvReportRenderer, JsonReportRenderer, MarkdownReportRenderer,
    PdfReportRenderer,
};
pub use prompt::{AnswerSheet, AnswerSheetError, ScriptedPrompter, TerminalPrompter};
pub use storage::{InMemoryReportStorage, LocalReportStorage};

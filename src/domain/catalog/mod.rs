//! Question Catalog - the fixed core battery and the four thematic modules.
//!
//! All data is static and valid by construction. The only operations are
//! lookups; nothing here is ever mutated.

mod modules;
mod questions;

pub use modules::{Module, ModuleId, Theme, MODULES};
pub use questions::{
    Category, Question, CORE_QUESTIONS, FINANCIAL_DIFFICULTY, HEAVY_WORKLOAD, POOR_SLEEP,
    PRESSURE_GRADES,
};

use once_cell::sync::Lazy;
use std::collections::HashMap;

static QUESTION_INDEX: Lazy<HashMap<&'static str, &'static Question>> = Lazy::new(|| {
    CORE_QUESTIONS
        .iter()
        .chain(MODULES.iter().flat_map(|m| m.questions().iter()))
        .map(|q| (q.id().as_str(), q))
        .collect()
});

/// The core battery in administration order.
pub fn core_questions() -> &'static [Question] {
    &CORE_QUESTIONS
}

/// All modules in catalog order.
pub fn modules() -> &'static [Module] {
    &MODULES
}

/// Returns the module definition for an id.
pub fn module(id: ModuleId) -> &'static Module {
    // MODULES is declared in ModuleId order
    &MODULES[id as usize]
}

/// Looks up a question by its textual id.
pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTION_INDEX.get(id.trim()).copied()
}

/// Total number of questions across core and all modules.
pub fn question_count() -> usize {
    QUESTION_INDEX.len()
}

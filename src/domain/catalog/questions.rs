//! Question value type and the core question battery.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::QuestionId;

/// Thematic category a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Academic,
    Health,
    Financial,
    Social,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Health => "health",
            Category::Financial => "financial",
            Category::Social => "social",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single catalog question. Immutable, defined at compile time.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    text: &'static str,
    category: Category,
}

impl Question {
    pub(crate) const fn new(id: &'static str, text: &'static str, category: Category) -> Self {
        Self {
            id: QuestionId::from_static(id),
            text,
            category,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Prompt shown to the participant.
    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// The fixed core battery, always administered in this order.
pub static CORE_QUESTIONS: [Question; 10] = [
    Question::new(
        "c1",
        "How often do you feel overwhelmed by academic workload?",
        Category::Academic,
    ),
    Question::new(
        "c2",
        "How much pressure do you feel to maintain good grades?",
        Category::Academic,
    ),
    Question::new("c3", "How often do you experience poor sleep quality?", Category::Health),
    Question::new("c4", "How frequently do you face financial difficulties?", Category::Financial),
    Question::new("c5", "How often do you feel isolated or lonely?", Category::Social),
    Question::new(
        "c6",
        "How frequently do you experience anxiety about your future?",
        Category::General,
    ),
    Question::new("c7", "How often do you struggle with time management?", Category::Academic),
    Question::new("c8", "How much do family expectations stress you?", Category::Social),
    Question::new("c9", "How often do you feel physically exhausted?", Category::Health),
    Question::new("c10", "How frequently do you worry about career prospects?", Category::General),
];

/// Core question driving the academic module together with `c2`.
pub const HEAVY_WORKLOAD: QuestionId = QuestionId::from_static("c1");
/// Core question driving the academic module together with `c1`.
pub const PRESSURE_GRADES: QuestionId = QuestionId::from_static("c2");
/// Core question driving the health module.
pub const POOR_SLEEP: QuestionId = QuestionId::from_static("c3");
/// Core question driving the financial module.
pub const FINANCIAL_DIFFICULTY: QuestionId = QuestionId::from_static("c4");

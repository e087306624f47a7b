//! Thematic follow-up modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::questions::{Category, Question};
use crate::domain::foundation::ValidationError;

/// Identifier of one of the four fixed modules.
///
/// Variant order is catalog order, which is also activation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    Academic,
    Health,
    Financial,
    Social,
}

impl ModuleId {
    /// All module ids in catalog order.
    pub const ALL: [ModuleId; 4] = [
        ModuleId::Academic,
        ModuleId::Health,
        ModuleId::Financial,
        ModuleId::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Academic => "academic",
            ModuleId::Health => "health",
            ModuleId::Financial => "financial",
            ModuleId::Social => "social",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ModuleId::Academic => Category::Academic,
            ModuleId::Health => Category::Health,
            ModuleId::Financial => Category::Financial,
            ModuleId::Social => Category::Social,
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "academic" => Ok(ModuleId::Academic),
            "health" => Ok(ModuleId::Health),
            "financial" => Ok(ModuleId::Financial),
            "social" => Ok(ModuleId::Social),
            other => Err(ValidationError::invalid_format(
                "module_id",
                format!("unknown module '{}'", other),
            )),
        }
    }
}

/// Display theming. Opaque to assessment and scoring logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub gradient: &'static str,
    pub primary_color: &'static str,
    /// RGB triple used by renderers that cannot parse CSS colors.
    pub rgb: (u8, u8, u8),
}

/// A thematic block of follow-up questions.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Module {
    id: ModuleId,
    name: &'static str,
    theme: Theme,
    questions: &'static [Question],
}

impl Module {
    pub fn id(&self) -> ModuleId {
        self.id
    }

    /// Display name, also the key of the module's score in results.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

static ACADEMIC_QUESTIONS: [Question; 5] = [
    Question::new(
        "a1",
        "How often do you feel unprepared for exams or assignments?",
        Category::Academic,
    ),
    Question::new("a2", "How much stress do course deadlines cause you?", Category::Academic),
    Question::new(
        "a3",
        "How frequently do you struggle to understand course material?",
        Category::Academic,
    ),
    Question::new(
        "a4",
        "How often do you feel pressure from academic competition?",
        Category::Academic,
    ),
    Question::new(
        "a5",
        "How much does fear of failure affect your daily life?",
        Category::Academic,
    ),
];

static HEALTH_QUESTIONS: [Question; 5] = [
    Question::new("h1", "How often do you skip meals due to time constraints?", Category::Health),
    Question::new(
        "h2",
        "How frequently do you experience headaches or body aches?",
        Category::Health,
    ),
    Question::new("h3", "How much does lack of exercise affect your wellbeing?", Category::Health),
    Question::new("h4", "How often do you rely on caffeine to stay alert?", Category::Health),
    Question::new(
        "h5",
        "How frequently do you feel physically drained by midday?",
        Category::Health,
    ),
];

static FINANCIAL_QUESTIONS: [Question; 5] = [
    Question::new("f1", "How often do you worry about student loans or debt?", Category::Financial),
    Question::new("f2", "How much stress does managing expenses cause you?", Category::Financial),
    Question::new(
        "f3",
        "How frequently do you struggle to afford necessities?",
        Category::Financial,
    ),
    Question::new(
        "f4",
        "How often do you feel burdened by part-time work commitments?",
        Category::Financial,
    ),
    Question::new(
        "f5",
        "How much does financial uncertainty affect your focus?",
        Category::Financial,
    ),
];

static SOCIAL_QUESTIONS: [Question; 5] = [
    Question::new("s1", "How often do you feel disconnected from peers?", Category::Social),
    Question::new("s2", "How much do relationship conflicts stress you?", Category::Social),
    Question::new("s3", "How frequently do you feel you lack emotional support?", Category::Social),
    Question::new(
        "s4",
        "How often do you experience social pressure or comparison?",
        Category::Social,
    ),
    Question::new("s5", "How much does homesickness or separation affect you?", Category::Social),
];

/// The four modules in catalog order.
pub static MODULES: [Module; 4] = [
    Module {
        id: ModuleId::Academic,
        name: "Academic Pressures",
        theme: Theme {
            gradient: "from-violet-600 via-purple-600 to-blue-600",
            primary_color: "rgb(139, 92, 246)",
            rgb: (139, 92, 246),
        },
        questions: &ACADEMIC_QUESTIONS,
    },
    Module {
        id: ModuleId::Health,
        name: "Health & Lifestyle",
        theme: Theme {
            gradient: "from-emerald-500 via-teal-500 to-cyan-500",
            primary_color: "rgb(16, 185, 129)",
            rgb: (16, 185, 129),
        },
        questions: &HEALTH_QUESTIONS,
    },
    Module {
        id: ModuleId::Financial,
        name: "Financial & Practical Concerns",
        theme: Theme {
            gradient: "from-amber-500 via-orange-500 to-yellow-600",
            primary_color: "rgb(245, 158, 11)",
            rgb: (245, 158, 11),
        },
        questions: &FINANCIAL_QUESTIONS,
    },
    Module {
        id: ModuleId::Social,
        name: "Social & Relationships",
        theme: Theme {
            gradient: "from-rose-500 via-pink-500 to-fuchsia-500",
            primary_color: "rgb(244, 63, 94)",
            rgb: (244, 63, 94),
        },
        questions: &SOCIAL_QUESTIONS,
    },
];

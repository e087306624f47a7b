//! StressLevel classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Percentages at or below this are Low.
pub const LOW_UPPER_BOUND: f64 = 33.0;

/// Percentages above Low and at or below this are Moderate.
pub const MODERATE_UPPER_BOUND: f64 = 66.0;

/// Three-way stress classification derived from the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    /// Classifies a percentage. Each bound belongs to the lower level:
    /// 33.0 is Low and 66.0 is Moderate.
    pub fn from_percentage(percentage: Percentage) -> Self {
        let value = percentage.value();
        if value <= LOW_UPPER_BOUND {
            StressLevel::Low
        } else if value <= MODERATE_UPPER_BOUND {
            StressLevel::Moderate
        } else {
            StressLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(value: f64) -> StressLevel {
        StressLevel::from_percentage(Percentage::new(value))
    }

    #[test]
    fn each_bound_belongs_to_lower_level() {
        assert_eq!(classify(0.0), StressLevel::Low);
        assert_eq!(classify(33.0), StressLevel::Low);
        assert_eq!(classify(33.1), StressLevel::Moderate);
        assert_eq!(classify(66.0), StressLevel::Moderate);
        assert_eq!(classify(66.1), StressLevel::High);
        assert_eq!(classify(100.0), StressLevel::High);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(StressLevel::Low < StressLevel::Moderate);
        assert!(StressLevel::Moderate < StressLevel::High);
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&StressLevel::Moderate).unwrap(), "\"Moderate\"");
        assert_eq!(StressLevel::High.to_string(), "High");
    }
}

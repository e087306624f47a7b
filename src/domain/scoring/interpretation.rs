//! Human-readable interpretation of a result.

use super::{AssessmentResult, StressLevel};

impl StressLevel {
    /// Guidance paragraph shown in reports.
    pub fn interpretation(&self) -> &'static str {
        match self {
            StressLevel::Low => {
                "Your stress levels are currently well-managed. You demonstrate good coping \
                 mechanisms and balance in your academic and personal life. Continue to maintain \
                 healthy habits and be mindful of any changes in your stress patterns."
            }
            StressLevel::Moderate => {
                "You are experiencing moderate levels of stress. While this is common among \
                 college students, it's important to implement stress management strategies. \
                 Consider: regular exercise, adequate sleep, time management techniques, and \
                 seeking support when needed."
            }
            StressLevel::High => {
                "You are experiencing high levels of stress that may be significantly impacting \
                 your wellbeing. We strongly recommend: speaking with a counselor or mental health \
                 professional, reaching out to campus support services, prioritizing self-care, \
                 and creating a plan to address your primary stressors."
            }
        }
    }
}

/// One-paragraph dashboard message naming the dominant categories.
pub fn summary_message(result: &AssessmentResult) -> String {
    let categories = result.dominant_categories().join(" and ");
    let has_categories = !categories.is_empty();

    match result.stress_level() {
        StressLevel::Low => {
            let tail = if has_categories {
                format!("Keep monitoring {} areas.", categories)
            } else {
                "Continue your healthy habits.".to_string()
            };
            format!("Your stress level is Low. You're managing well overall. {}", tail)
        }
        StressLevel::Moderate => {
            let middle = if has_categories {
                format!("{} pressures are most prominent.", categories)
            } else {
                "Several areas need attention.".to_string()
            };
            format!(
                "Your stress level is Moderate. {} \
                 Consider implementing stress management strategies.",
                middle
            )
        }
        StressLevel::High => {
            let middle = if has_categories {
                format!("{} factors are significantly impacting you.", categories)
            } else {
                "Multiple areas require immediate attention.".to_string()
            };
            format!(
                "Your stress level is High. {} \
                 We recommend seeking support and prioritizing self-care.",
                middle
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{ModuleSelector, ResponseSet};
    use crate::domain::catalog::{core_questions, module};
    use crate::domain::foundation::Rating;
    use crate::domain::scoring::ScoringEngine;

    fn result_for(core: u8, modules: Option<u8>) -> AssessmentResult {
        let mut core_set = ResponseSet::new();
        for q in core_questions() {
            core_set.record(q.id(), Rating::try_from_u8(core).unwrap());
        }
        let selection = ModuleSelector::select(&core_set).unwrap();
        let mut module_set = ResponseSet::new();
        if let Some(value) = modules {
            for id in selection.activated() {
                for q in module(*id).questions() {
                    module_set.record(q.id(), Rating::try_from_u8(value).unwrap());
                }
            }
        }
        ScoringEngine::score(&core_set, &module_set, &selection).unwrap()
    }

    #[test]
    fn low_without_modules_encourages_habits() {
        let result = result_for(0, None);
        assert_eq!(
            summary_message(&result),
            "Your stress level is Low. You're managing well overall. Continue your healthy habits."
        );
    }

    #[test]
    fn high_names_dominant_categories() {
        let result = result_for(4, Some(4));
        let message = summary_message(&result);
        assert!(message.starts_with("Your stress level is High."));
        assert!(message.contains("Academic Pressures and Health & Lifestyle factors"));
    }

    #[test]
    fn moderate_mentions_prominent_pressures() {
        let result = result_for(2, Some(2));
        assert_eq!(result.stress_level(), StressLevel::Moderate);
        assert!(summary_message(&result).contains("pressures are most prominent"));
    }

    #[test]
    fn interpretation_differs_per_level() {
        assert!(StressLevel::Low.interpretation().contains("well-managed"));
        assert!(StressLevel::Moderate.interpretation().contains("moderate levels"));
        assert!(StressLevel::High.interpretation().contains("counselor"));
    }
}

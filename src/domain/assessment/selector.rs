//! Module Selector - decides which follow-up modules a participant sees.
//!
//! Runs once, when the last core question is answered. The decision is a
//! pure function of the core responses.

use serde::Serialize;

use super::{AssessmentError, ResponseSet};
use crate::domain::catalog::{
    self, Module, ModuleId, FINANCIAL_DIFFICULTY, HEAVY_WORKLOAD, POOR_SLEEP, PRESSURE_GRADES,
};

/// Minimum rating on a trigger question for its module to activate.
pub const ACTIVATION_THRESHOLD: u32 = 2;

/// The core score must exceed this for the module phase to run.
pub const CORE_SCORE_GATE: u32 = 13;

/// Outcome of module selection.
///
/// `activated` may be non-empty even when the module phase is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSelection {
    activated: Vec<ModuleId>,
    core_score: u32,
    enters_module_phase: bool,
}

impl ModuleSelection {
    /// Activated modules in catalog order.
    pub fn activated(&self) -> &[ModuleId] {
        &self.activated
    }

    /// Activated module definitions in catalog order.
    pub fn activated_modules(&self) -> Vec<&'static Module> {
        self.activated.iter().map(|id| catalog::module(*id)).collect()
    }

    /// Modules that take part in scoring.
    ///
    /// Empty when the module phase is skipped: activated modules whose
    /// questions were never asked add nothing to the maximum score.
    pub fn scored_modules(&self) -> Vec<&'static Module> {
        if self.enters_module_phase {
            self.activated_modules()
        } else {
            Vec::new()
        }
    }

    /// Sum of all core ratings at selection time.
    pub fn core_score(&self) -> u32 {
        self.core_score
    }

    /// Whether the participant proceeds into the module questions.
    pub fn enters_module_phase(&self) -> bool {
        self.enters_module_phase
    }
}

/// Stateless evaluator of the branching rules.
pub struct ModuleSelector;

impl ModuleSelector {
    /// Applies the activation rules to the four trigger questions.
    ///
    /// Missing trigger answers count as zero. Social is always activated.
    pub fn activation(core: &ResponseSet) -> Vec<ModuleId> {
        let heavy_workload = core.rating_or_zero(HEAVY_WORKLOAD);
        let pressure_grades = core.rating_or_zero(PRESSURE_GRADES);
        let poor_sleep = core.rating_or_zero(POOR_SLEEP);
        let financial = core.rating_or_zero(FINANCIAL_DIFFICULTY);

        ModuleId::ALL
            .into_iter()
            .filter(|id| match id {
                ModuleId::Academic => {
                    heavy_workload >= ACTIVATION_THRESHOLD
                        && pressure_grades >= ACTIVATION_THRESHOLD
                }
                ModuleId::Health => poor_sleep >= ACTIVATION_THRESHOLD,
                ModuleId::Financial => financial >= ACTIVATION_THRESHOLD,
                ModuleId::Social => true,
            })
            .collect()
    }

    /// Selects modules for a completed core battery.
    ///
    /// # Errors
    ///
    /// - `IncompleteResponses` if any core question is unanswered
    pub fn select(core: &ResponseSet) -> Result<ModuleSelection, AssessmentError> {
        let questions = catalog::core_questions();
        let missing: Vec<_> = core.missing(questions).iter().map(|q| q.id()).collect();
        if !missing.is_empty() {
            return Err(AssessmentError::incomplete("core", missing));
        }

        let activated = Self::activation(core);
        let core_score = core.sum_for(questions);
        let enters_module_phase = core_score > CORE_SCORE_GATE && !activated.is_empty();

        tracing::debug!(
            core_score,
            activated = ?activated,
            enters_module_phase,
            "Module selection evaluated"
        );

        Ok(ModuleSelection {
            activated,
            core_score,
            enters_module_phase,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::core_questions;
    use crate::domain::foundation::Rating;
    use proptest::prelude::*;

    fn core_with(ratings: [u8; 10]) -> ResponseSet {
        let mut set = ResponseSet::new();
        for (q, r) in core_questions().iter().zip(ratings) {
            set.record(q.id(), Rating::try_from_u8(r).unwrap());
        }
        set
    }

    #[test]
    fn academic_needs_both_workload_and_grades() {
        let only_workload = core_with([3, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(!ModuleSelector::activation(&only_workload).contains(&ModuleId::Academic));

        let both = core_with([2, 2, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(ModuleSelector::activation(&both).contains(&ModuleId::Academic));
    }

    #[test]
    fn health_and_financial_follow_their_trigger() {
        let set = core_with([0, 0, 2, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            ModuleSelector::activation(&set),
            vec![ModuleId::Health, ModuleId::Social]
        );
    }

    #[test]
    fn social_is_always_activated() {
        let set = core_with([0; 10]);
        assert_eq!(ModuleSelector::activation(&set), vec![ModuleId::Social]);
    }

    #[test]
    fn activation_keeps_catalog_order() {
        let set = core_with([4; 10]);
        assert_eq!(ModuleSelector::activation(&set), ModuleId::ALL.to_vec());
    }

    #[test]
    fn missing_triggers_count_as_zero() {
        let set = ResponseSet::new();
        assert_eq!(ModuleSelector::activation(&set), vec![ModuleId::Social]);
    }

    #[test]
    fn low_core_score_skips_module_phase_despite_activation() {
        let selection = ModuleSelector::select(&core_with([3, 3, 0, 0, 0, 0, 0, 0, 0, 0])).unwrap();
        assert_eq!(selection.activated(), &[ModuleId::Academic, ModuleId::Social]);
        assert_eq!(selection.core_score(), 6);
        assert!(!selection.enters_module_phase());
        assert!(selection.scored_modules().is_empty());
    }

    #[test]
    fn gate_is_strictly_greater_than_thirteen() {
        let at_gate = core_with([4, 4, 4, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(ModuleSelector::select(&at_gate).unwrap().core_score(), 13);
        assert!(!ModuleSelector::select(&at_gate).unwrap().enters_module_phase());

        let above_gate = core_with([4, 4, 4, 2, 0, 0, 0, 0, 0, 0]);
        assert!(ModuleSelector::select(&above_gate).unwrap().enters_module_phase());
    }

    #[test]
    fn all_fours_activate_everything_and_enter_modules() {
        let selection = ModuleSelector::select(&core_with([4; 10])).unwrap();
        assert_eq!(selection.activated_modules().len(), 4);
        assert_eq!(selection.core_score(), 40);
        assert!(selection.enters_module_phase());
    }

    #[test]
    fn select_rejects_incomplete_core() {
        let mut set = ResponseSet::new();
        set.record(HEAVY_WORKLOAD, Rating::Often);
        match ModuleSelector::select(&set) {
            Err(AssessmentError::IncompleteResponses { phase, missing }) => {
                assert_eq!(phase, "core");
                assert_eq!(missing.len(), 9);
            }
            other => panic!("Expected IncompleteResponses, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn activation_depends_only_on_first_four(
            triggers in proptest::array::uniform4(0u8..=4),
            rest_a in proptest::array::uniform6(0u8..=4),
            rest_b in proptest::array::uniform6(0u8..=4),
        ) {
            let mut a = [0u8; 10];
            let mut b = [0u8; 10];
            a[..4].copy_from_slice(&triggers);
            b[..4].copy_from_slice(&triggers);
            a[4..].copy_from_slice(&rest_a);
            b[4..].copy_from_slice(&rest_b);

            prop_assert_eq!(
                ModuleSelector::activation(&core_with(a)),
                ModuleSelector::activation(&core_with(b))
            );
        }

        #[test]
        fn core_score_is_sum_and_within_bounds(ratings in proptest::array::uniform10(0u8..=4)) {
            let selection = ModuleSelector::select(&core_with(ratings)).unwrap();
            let expected: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
            prop_assert_eq!(selection.core_score(), expected);
            prop_assert!(selection.core_score() <= 40);
            prop_assert_eq!(selection.enters_module_phase(), expected > CORE_SCORE_GATE);
        }
    }
}

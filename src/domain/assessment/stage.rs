//! Stage enum for the assessment wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Phase of an assessment session.
///
/// `hero -> onboarding -> core -> (module-intro <-> module)* -> results`,
/// and `results -> hero` on retake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    #[default]
    Hero,
    Onboarding,
    Core,
    ModuleIntro,
    Module,
    Results,
}

impl StateMachine for Stage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Stage::*;
        matches!(
            (self, target),
            (Hero, Onboarding)
                | (Onboarding, Core)
                | (Core, Core)
                | (Core, ModuleIntro)
                | (Core, Results)
                | (ModuleIntro, Module)
                | (Module, Module)
                | (Module, ModuleIntro)
                | (Module, Results)
                | (Results, Hero)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Stage::*;
        match self {
            Hero => vec![Onboarding],
            Onboarding => vec![Core],
            Core => vec![Core, ModuleIntro, Results],
            ModuleIntro => vec![Module],
            Module => vec![Module, ModuleIntro, Results],
            Results => vec![Hero],
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Hero => "hero",
            Stage::Onboarding => "onboarding",
            Stage::Core => "core",
            Stage::ModuleIntro => "module-intro",
            Stage::Module => "module",
            Stage::Results => "results",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Stage; 6] = [
        Stage::Hero,
        Stage::Onboarding,
        Stage::Core,
        Stage::ModuleIntro,
        Stage::Module,
        Stage::Results,
    ];

    #[test]
    fn default_is_hero() {
        assert_eq!(Stage::default(), Stage::Hero);
    }

    #[test]
    fn hero_only_leads_to_onboarding() {
        assert_eq!(Stage::Hero.valid_transitions(), vec![Stage::Onboarding]);
        assert!(Stage::Hero.transition_to(Stage::Core).is_err());
    }

    #[test]
    fn core_can_skip_straight_to_results() {
        assert!(Stage::Core.can_transition_to(&Stage::Results));
    }

    #[test]
    fn module_intro_cannot_skip_the_module() {
        assert!(!Stage::ModuleIntro.can_transition_to(&Stage::Results));
        assert!(!Stage::ModuleIntro.can_transition_to(&Stage::ModuleIntro));
    }

    #[test]
    fn results_only_leads_back_to_hero() {
        assert_eq!(Stage::Results.valid_transitions(), vec![Stage::Hero]);
    }

    #[test]
    fn no_stage_is_terminal() {
        for stage in ALL {
            assert!(!stage.is_terminal(), "{} should not be terminal", stage);
        }
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for stage in ALL {
            for target in ALL {
                assert_eq!(
                    stage.can_transition_to(&target),
                    stage.valid_transitions().contains(&target),
                    "{} -> {}",
                    stage,
                    target
                );
            }
        }
    }

    #[test]
    fn serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&Stage::ModuleIntro).unwrap(), "\"module-intro\"");
    }
}

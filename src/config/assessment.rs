//! Assessment run configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::DEFAULT_ONBOARDING_ATTEMPTS;

/// Settings for interactive runs
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// Onboarding submissions allowed before the run is abandoned
    #[serde(default = "default_onboarding_attempts")]
    pub max_onboarding_attempts: u32,

    /// Offer a retake after the results
    #[serde(default = "default_allow_retake")]
    pub allow_retake: bool,
}

impl AssessmentConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=10).contains(&self.max_onboarding_attempts) {
            return Err(ValidationError::InvalidOnboardingAttempts);
        }
        Ok(())
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            max_onboarding_attempts: default_onboarding_attempts(),
            allow_retake: default_allow_retake(),
        }
    }
}

fn default_onboarding_attempts() -> u32 {
    DEFAULT_ONBOARDING_ATTEMPTS
}

fn default_allow_retake() -> bool {
    true
}

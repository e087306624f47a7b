//! AssessmentResult - the immutable outcome of a completed assessment.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::StressLevel;
use crate::domain::catalog::ModuleId;
use crate::domain::foundation::{Percentage, Timestamp};

/// Score of one activated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleScore {
    pub module: ModuleId,
    pub name: String,
    pub score: u32,
}

/// Snapshot produced once when the assessment reaches results.
///
/// Never recomputed in place; a retake produces a new session and,
/// eventually, a new result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    core_score: u32,
    #[serde(serialize_with = "scores_as_map")]
    module_scores: Vec<ModuleScore>,
    total_score: u32,
    max_score: u32,
    percentage: Percentage,
    stress_level: StressLevel,
    dominant_categories: Vec<String>,
    completed_at: Timestamp,
}

impl AssessmentResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        core_score: u32,
        module_scores: Vec<ModuleScore>,
        total_score: u32,
        max_score: u32,
        percentage: Percentage,
        stress_level: StressLevel,
        dominant_categories: Vec<String>,
        completed_at: Timestamp,
    ) -> Self {
        Self {
            core_score,
            module_scores,
            total_score,
            max_score,
            percentage,
            stress_level,
            dominant_categories,
            completed_at,
        }
    }

    pub fn core_score(&self) -> u32 {
        self.core_score
    }

    /// Module scores in activation order.
    pub fn module_scores(&self) -> &[ModuleScore] {
        &self.module_scores
    }

    /// Looks up a module score by display name.
    pub fn module_score(&self, name: &str) -> Option<u32> {
        self.module_scores
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.score)
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    pub fn stress_level(&self) -> StressLevel {
        self.stress_level
    }

    /// Names of the highest scoring modules, at most two.
    pub fn dominant_categories(&self) -> &[String] {
        &self.dominant_categories
    }

    pub fn completed_at(&self) -> &Timestamp {
        &self.completed_at
    }
}

/// Writes module scores as a `{ name: score }` object in activation order.
fn scores_as_map<S>(scores: &[ModuleScore], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(scores.len()))?;
    for s in scores {
        map.serialize_entry(&s.name, &s.score)?;
    }
    map.end()
}

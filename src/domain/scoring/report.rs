//! AssessmentReport - everything an export needs, frozen at results time.

use serde::Serialize;

use super::{summary_message, AssessmentResult};
use crate::domain::assessment::{Participant, ResponseSet};
use crate::domain::catalog::{self, Module, ModuleId, Question};
use crate::domain::foundation::{Rating, SessionId};

/// One answered question as it appears in an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// 1-based position within its section.
    pub number: usize,
    pub question: &'static Question,
    pub rating: Rating,
}

/// Module heading plus its answered questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSection {
    pub module: &'static Module,
    pub rows: Vec<ReportRow>,
}

/// Read-only snapshot of a finished session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    session_id: SessionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    participant: Option<Participant>,
    result: AssessmentResult,
    summary: String,
    core_responses: ResponseSet,
    module_responses: ResponseSet,
    modules: Vec<ModuleId>,
}

impl AssessmentReport {
    /// Builds a report. `modules` lists the modules whose answers are included.
    pub fn new(
        session_id: SessionId,
        participant: Option<Participant>,
        result: AssessmentResult,
        core_responses: ResponseSet,
        module_responses: ResponseSet,
        modules: Vec<ModuleId>,
    ) -> Self {
        let summary = summary_message(&result);
        Self {
            session_id,
            participant,
            result,
            summary,
            core_responses,
            module_responses,
            modules,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn participant(&self) -> Option<&Participant> {
        self.participant.as_ref()
    }

    pub fn result(&self) -> &AssessmentResult {
        &self.result
    }

    /// Dashboard message for the result.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn core_responses(&self) -> &ResponseSet {
        &self.core_responses
    }

    pub fn module_responses(&self) -> &ResponseSet {
        &self.module_responses
    }

    pub fn modules(&self) -> &[ModuleId] {
        &self.modules
    }

    /// Core answers in catalog order.
    pub fn core_rows(&self) -> Vec<ReportRow> {
        rows_for(catalog::core_questions(), &self.core_responses)
    }

    /// Module answers grouped by module, in activation order.
    pub fn module_sections(&self) -> Vec<ModuleSection> {
        self.modules
            .iter()
            .map(|id| {
                let module = catalog::module(*id);
                ModuleSection {
                    module,
                    rows: rows_for(module.questions(), &self.module_responses),
                }
            })
            .collect()
    }

    /// Date portion of the completion time, for file names.
    pub fn date_stamp(&self) -> String {
        self.result.completed_at().date_stamp()
    }
}

fn rows_for(questions: &'static [Question], responses: &ResponseSet) -> Vec<ReportRow> {
    questions
        .iter()
        .enumerate()
        .filter_map(|(index, question)| {
            responses.rating_for(question.id()).map(|rating| ReportRow {
                number: index + 1,
                question,
                rating,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::ModuleSelector;
    use crate::domain::catalog::core_questions;
    use crate::domain::scoring::ScoringEngine;

    fn report() -> AssessmentReport {
        let mut core = ResponseSet::new();
        for q in core_questions().iter().rev() {
            core.record(q.id(), Rating::Often);
        }
        let selection = ModuleSelector::select(&core).unwrap();
        let mut modules = ResponseSet::new();
        for m in selection.scored_modules() {
            for q in m.questions() {
                modules.record(q.id(), Rating::Sometimes);
            }
        }
        let result = ScoringEngine::score(&core, &modules, &selection).unwrap();
        AssessmentReport::new(
            SessionId::new(),
            Participant::new("Ada", "ada@uni.edu", Some(20)).ok(),
            result,
            core,
            modules,
            selection.activated().to_vec(),
        )
    }

    #[test]
    fn core_rows_follow_catalog_order_regardless_of_answer_order() {
        let rows = report().core_rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].question.id().as_str(), "c1");
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[9].question.id().as_str(), "c10");
    }

    #[test]
    fn module_sections_group_by_module() {
        let sections = report().module_sections();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].module.name(), "Academic Pressures");
        assert!(sections.iter().all(|s| s.rows.len() == 5));
    }

    #[test]
    fn serializes_with_summary_and_participant() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["participant"]["name"], "Ada");
        // 30 core + 4 modules x 10 = 70 of 120
        assert_eq!(json["result"]["stressLevel"], "Moderate");
        assert!(json["summary"]
            .as_str()
            .unwrap()
            .starts_with("Your stress level is Moderate."));
        assert_eq!(json["coreResponses"][0]["questionId"], "c10");
    }
}

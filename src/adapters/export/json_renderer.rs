//! JSON report renderer.

use crate::domain::scoring::AssessmentReport;
use crate::ports::{ExportError, ExportFormat, ReportRenderer};

/// Pretty-printed JSON snapshot of the whole report.
#[derive(Debug, Clone, Default)]
pub struct JsonReportRenderer;

impl JsonReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, report: &AssessmentReport) -> Result<Vec<u8>, ExportError> {
        serde_json::to_vec_pretty(report)
            .map_err(|e| ExportError::render(ExportFormat::Json, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::test_support::high_report;
    use serde_json::Value;

    #[test]
    fn renders_result_and_responses() {
        let bytes = JsonReportRenderer::new().render(&high_report()).unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["result"]["totalScore"], 120);
        assert_eq!(json["result"]["maxScore"], 120);
        assert_eq!(json["result"]["stressLevel"], "High");
        assert_eq!(json["coreResponses"].as_array().unwrap().len(), 10);
        assert_eq!(json["moduleResponses"].as_array().unwrap().len(), 20);
        assert_eq!(json["modules"][0], "academic");
    }
}

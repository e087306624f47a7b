//! Markdown report renderer.
//!
//! Produces a readable summary with a score table and every answer,
//! using a fixed template.

use crate::domain::scoring::{AssessmentReport, ReportRow};
use crate::ports::{ExportError, ExportFormat, ReportRenderer};

/// Template-based Markdown renderer.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportRenderer;

impl MarkdownReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Generates the header with participant and completion date.
    fn generate_header(&self, report: &AssessmentReport) -> String {
        let mut section = String::from("# Combined College Student Stress Scale (CCSSS)\n\n");
        section.push_str("## Assessment Report\n\n");
        section.push_str(&format!(
            "**Completed:** {}\n\n",
            report.result().completed_at().long_format()
        ));
        if let Some(p) = report.participant() {
            section.push_str(&format!("**Participant:** {} ({})\n\n", p.name(), p.email()));
        }
        section
    }

    /// Generates the overall results and category table.
    fn generate_results(&self, report: &AssessmentReport) -> String {
        let result = report.result();
        let mut section = String::from("## Overall Results\n\n");

        section.push_str(&format!(
            "- **Total Score:** {} / {} ({})\n",
            result.total_score(),
            result.max_score(),
            result.percentage()
        ));
        section.push_str(&format!("- **Stress Level:** {}\n", result.stress_level()));
        if !result.dominant_categories().is_empty() {
            section.push_str(&format!(
                "- **Primary Stress Areas:** {}\n",
                result.dominant_categories().join(", ")
            ));
        }
        section.push('\n');

        section.push_str("### Category Breakdown\n\n");
        section.push_str("| Category | Score | Max |\n");
        section.push_str("|----------|-------|-----|\n");
        section.push_str(&format!("| Core Assessment | {} | 40 |\n", result.core_score()));
        for score in result.module_scores() {
            section.push_str(&format!("| {} | {} | 20 |\n", score.name, score.score));
        }
        section.push('\n');

        section.push_str("## Interpretation\n\n");
        section.push_str(&format!("> {}\n\n", report.summary()));
        section.push_str(result.stress_level().interpretation());
        section.push_str("\n\n");
        section
    }

    /// Generates one responses section.
    fn generate_responses(&self, title: &str, rows: &[ReportRow]) -> String {
        let mut section = format!("### {}\n\n", title);
        if rows.is_empty() {
            section.push_str("*No responses recorded*\n\n");
            return section;
        }
        for row in rows {
            section.push_str(&format!(
                "{}. {}\n   - Response: {} - {}\n",
                row.number,
                row.question.text(),
                row.rating.value(),
                row.rating.label()
            ));
        }
        section.push('\n');
        section
    }

    /// Assembles the full document.
    pub fn generate(&self, report: &AssessmentReport) -> String {
        let mut doc = self.generate_header(report);
        doc.push_str(&self.generate_results(report));
        doc.push_str("## Responses\n\n");
        doc.push_str(&self.generate_responses("Core Assessment", &report.core_rows()));
        for section in report.module_sections() {
            doc.push_str(&self.generate_responses(section.module.name(), &section.rows));
        }
        doc.push_str("---\n");
        doc.push_str("*Combined College Student Stress Scale (CCSSS) - Confidential Report*\n");
        doc
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn render(&self, report: &AssessmentReport) -> Result<Vec<u8>, ExportError> {
        Ok(self.generate(report).into_bytes())
    }
}

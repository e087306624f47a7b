//! CSV report renderer.
//!
//! Layout:
//!
//! ```text
//! Question ID,Question,Rating
//! c1,<text>,3
//! ...                       (core, then each module of the module phase)
//!
//! Results Summary
//! Core Score,24
//! Academic Pressures,12     (one row per scored module)
//! Total Score,36
//! Max Score,60
//! Percentage,60.0%
//! Stress Level,Moderate
//! ```

use csv::{Terminator, Writer, WriterBuilder};

use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::{self, Question};
use crate::domain::scoring::AssessmentReport;
use crate::ports::{ExportError, ExportFormat, ReportRenderer};

/// Renders answers and the result summary as CSV.
#[derive(Debug, Clone, Default)]
pub struct CsvReportRenderer;

impl CsvReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn question_row(question: &Question, responses: &ResponseSet) -> [String; 3] {
        let rating = responses
            .rating_for(question.id())
            .map(|r| r.value().to_string())
            .unwrap_or_default();
        [
            question.id().as_str().to_string(),
            question.text().to_string(),
            rating,
        ]
    }

    fn writer(buf: Vec<u8>) -> Writer<Vec<u8>> {
        WriterBuilder::new()
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(buf)
    }

    fn finish(writer: Writer<Vec<u8>>) -> Result<Vec<u8>, csv::Error> {
        writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }

    fn write(report: &AssessmentReport) -> Result<Vec<u8>, csv::Error> {
        let mut writer = Self::writer(Vec::new());

        writer.write_record(["Question ID", "Question", "Rating"])?;
        for question in catalog::core_questions() {
            writer.write_record(Self::question_row(question, report.core_responses()))?;
        }
        for id in report.modules() {
            for question in catalog::module(*id).questions() {
                writer.write_record(Self::question_row(question, report.module_responses()))?;
            }
        }

        // csv quotes a lone empty field, so the separator line is written raw
        let mut buf = Self::finish(writer)?;
        buf.push(b'\n');
        let mut writer = Self::writer(buf);

        let result = report.result();
        writer.write_record(["Results Summary"])?;
        writer.write_record(["Core Score".to_string(), result.core_score().to_string()])?;
        for score in result.module_scores() {
            writer.write_record([score.name.clone(), score.score.to_string()])?;
        }
        writer.write_record(["Total Score".to_string(), result.total_score().to_string()])?;
        writer.write_record(["Max Score".to_string(), result.max_score().to_string()])?;
        writer.write_record(["Percentage".to_string(), result.percentage().to_string()])?;
        writer.write_record(["Stress Level", result.stress_level().label()])?;

        Self::finish(writer)
    }
}

impl ReportRenderer for CsvReportRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn render(&self, report: &AssessmentReport) -> Result<Vec<u8>, ExportError> {
        Self::write(report).map_err(|e| ExportError::render(ExportFormat::Csv, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::test_support::{high_report, low_report};

    fn render_lines(report: &AssessmentReport) -> Vec<String> {
        let bytes = CsvReportRenderer::new().render(report).unwrap();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn starts_with_header_and_core_rows() {
        let lines = render_lines(&low_report());
        assert_eq!(lines[0], "Question ID,Question,Rating");
        assert!(lines[1].starts_with("c1,"));
        assert!(lines[1].ends_with(",3"));
        assert!(lines[10].starts_with("c10,"));
    }

    #[test]
    fn skipped_module_phase_has_no_module_rows() {
        let lines = render_lines(&low_report());
        assert_eq!(lines[11], "");
        assert_eq!(lines[12], "Results Summary");
        assert_eq!(lines[13], "Core Score,6");
        assert_eq!(lines[14], "Total Score,6");
        assert_eq!(lines[15], "Max Score,40");
        assert_eq!(lines[16], "Percentage,15.0%");
        assert_eq!(lines[17], "Stress Level,Low");
    }

    #[test]
    fn module_rows_and_scores_follow_core() {
        let lines = render_lines(&high_report());
        assert!(lines[11].starts_with("a1,"));
        assert!(lines[30].starts_with("s5,"));
        assert!(lines.contains(&"Academic Pressures,20".to_string()));
        assert!(lines.contains(&"Health & Lifestyle,20".to_string()));
        assert!(lines.contains(&"Percentage,100.0%".to_string()));
    }

    #[test]
    fn summary_is_separated_by_an_empty_line() {
        let bytes = CsvReportRenderer::new().render(&high_report()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\ns5,"));
        assert!(text.contains(",4\n\nResults Summary\n"));
        assert!(!text.contains("\"\""));
    }

    #[test]
    fn question_text_with_commas_is_quoted() {
        let text = String::from_utf8(CsvReportRenderer::new().render(&high_report()).unwrap())
            .unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let first = reader.records().next().unwrap().unwrap();
        assert_eq!(&first[0], "c1");
        assert_eq!(&first[2], "4");
    }

    #[test]
    fn export_uses_dated_file_name() {
        let report = low_report();
        let exported = CsvReportRenderer::new().export(&report).unwrap();
        assert_eq!(
            exported.file_name,
            format!("stress-assessment-{}.csv", report.date_stamp())
        );
        assert_eq!(exported.content_type, "text/csv; charset=utf-8");
    }
}

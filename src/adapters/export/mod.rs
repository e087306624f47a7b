//! Export adapters - ReportRenderer implementations.
//!
//! - `CsvReportRenderer` - answers plus result summary, spreadsheet friendly
//! - `PdfReportRenderer` - printable report built with `lopdf`
//! - `MarkdownReportRenderer` - template-based summary
//! - `JsonReportRenderer` - machine-readable snapshot

mod csv_renderer;
mod json_renderer;
mod markdown_renderer;
mod pdf_renderer;

pub use csv_renderer::CsvReportRenderer;
pub use json_renderer::JsonReportRenderer;
pub use markdown_renderer::MarkdownReportRenderer;
pub use pdf_renderer::{PdfReportRenderer, FOOTER_TEXT, REPORT_TITLE};

use crate::ports::{ExportFormat, ReportRenderer};

/// Returns the renderer for a format.
pub fn renderer_for(format: ExportFormat) -> Box<dyn ReportRenderer> {
    match format {
        ExportFormat::Csv => Box::new(CsvReportRenderer::new()),
        ExportFormat::Pdf => Box::new(PdfReportRenderer::new()),
        ExportFormat::Markdown => Box::new(MarkdownReportRenderer::new()),
        ExportFormat::Json => Box::new(JsonReportRenderer::new()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_for_matches_format() {
        for format in ExportFormat::ALL {
            assert_eq!(renderer_for(format).format(), format);
        }
    }

    #[test]
    fn every_renderer_produces_output() {
        let report = test_support::high_report();
        for format in ExportFormat::ALL {
            let exported = renderer_for(format).export(&report).unwrap();
            assert!(!exported.content.is_empty());
            assert!(exported.file_name.contains("2024-03-01"));
        }
    }
}

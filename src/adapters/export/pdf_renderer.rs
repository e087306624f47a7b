//! PDF report renderer built on `lopdf`.
//!
//! The report is laid out as a flat list of text lines which is then split
//! into A4 pages. Only the base-14 Helvetica fonts are used, so text is
//! limited to ASCII; anything else is replaced with `?`.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::domain::scoring::{AssessmentReport, ReportRow, StressLevel};
use crate::ports::{ExportError, ExportFormat, ReportRenderer};

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 50;
const FOOTER_HEIGHT: i64 = 60;

pub const REPORT_TITLE: &str = "Combined College Student Stress Scale (CCSSS)";
pub const FOOTER_TEXT: &str =
    "Combined College Student Stress Scale (CCSSS) - Confidential Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource_name(&self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

/// RGB components in 0..=255.
type Color = (u8, u8, u8);

const TEXT_COLOR: Color = (51, 51, 51);
const HEADING_COLOR: Color = (102, 126, 234);
const MUTED_COLOR: Color = (128, 128, 128);

#[derive(Debug, Clone)]
struct Line {
    text: String,
    font: Font,
    size: i64,
    indent: i64,
    color: Color,
    space_before: i64,
}

impl Line {
    fn height(&self) -> i64 {
        self.space_before + self.size + self.size / 3
    }
}

/// Accumulates lines, wrapping long text to the printable width.
#[derive(Debug, Default)]
struct Layout {
    lines: Vec<Line>,
}

impl Layout {
    fn push(
        &mut self,
        text: &str,
        font: Font,
        size: i64,
        indent: i64,
        color: Color,
        space_before: i64,
    ) {
        let width = PAGE_WIDTH - 2 * MARGIN - indent;
        let chunks = wrap(&sanitize(text), max_chars(width, size, font));
        for (i, chunk) in chunks.into_iter().enumerate() {
            self.lines.push(Line {
                text: chunk,
                font,
                size,
                indent,
                color,
                space_before: if i == 0 { space_before } else { 0 },
            });
        }
    }

    fn heading(&mut self, text: &str) {
        self.push(text, Font::Bold, 14, 0, HEADING_COLOR, 14);
    }

    fn text(&mut self, text: &str) {
        self.push(text, Font::Regular, 11, 0, TEXT_COLOR, 2);
    }

    fn paginate(self) -> Vec<Vec<(Line, i64)>> {
        let top = PAGE_HEIGHT - MARGIN;
        let bottom = FOOTER_HEIGHT + MARGIN / 2;
        let mut pages = vec![Vec::new()];
        let mut y = top;

        for line in self.lines {
            if y - line.height() < bottom {
                pages.push(Vec::new());
                y = top;
            }
            y -= line.height();
            if let Some(page) = pages.last_mut() {
                page.push((line, y));
            }
        }
        pages
    }
}

/// Renders a printable multi-page report.
#[derive(Debug, Clone, Default)]
pub struct PdfReportRenderer;

impl PdfReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn layout(report: &AssessmentReport) -> Layout {
        let result = report.result();
        let mut layout = Layout::default();

        layout.push(REPORT_TITLE, Font::Bold, 18, 0, HEADING_COLOR, 0);
        layout.push("Assessment Report", Font::Regular, 14, 0, TEXT_COLOR, 4);
        layout.push(
            &format!("Completed: {}", result.completed_at().long_format()),
            Font::Regular,
            10,
            0,
            MUTED_COLOR,
            6,
        );
        if let Some(participant) = report.participant() {
            layout.push(
                &format!(
                    "Participant: {} ({}), age {}",
                    participant.name(),
                    participant.email(),
                    participant.age()
                ),
                Font::Regular,
                10,
                0,
                MUTED_COLOR,
                2,
            );
        }

        layout.heading("Overall Results");
        layout.text(&format!(
            "Total Score: {} / {} ({})",
            result.total_score(),
            result.max_score(),
            result.percentage()
        ));
        layout.push(
            &format!("Stress Level: {}", result.stress_level()),
            Font::Bold,
            11,
            0,
            level_color(result.stress_level()),
            2,
        );
        if !result.dominant_categories().is_empty() {
            layout.text(&format!(
                "Primary Stress Areas: {}",
                result.dominant_categories().join(", ")
            ));
        }

        layout.heading("Category Breakdown");
        layout.text(&format!("Core Assessment: {} / 40", result.core_score()));
        for score in result.module_scores() {
            layout.text(&format!("{}: {} / 20", score.name, score.score));
        }

        layout.heading("Interpretation");
        layout.text(result.stress_level().interpretation());
        layout.text(report.summary());

        layout.heading("Core Assessment Responses");
        push_rows(&mut layout, &report.core_rows());

        for section in report.module_sections() {
            layout.push(
                section.module.name(),
                Font::Bold,
                13,
                0,
                section.module.theme().rgb,
                14,
            );
            push_rows(&mut layout, &section.rows);
        }

        layout
    }

    fn build(report: &AssessmentReport) -> Result<Vec<u8>, String> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                Font::Regular.resource_name() => regular_id,
                Font::Bold.resource_name() => bold_id,
            },
        });

        let pages = Self::layout(report).paginate();
        let page_count = pages.len();
        let mut kids: Vec<Object> = Vec::with_capacity(page_count);

        for (index, lines) in pages.into_iter().enumerate() {
            let content = page_content(lines, index + 1, page_count);
            let encoded = content.encode().map_err(|e| e.to_string())?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id: ObjectId = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count as i64,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(REPORT_TITLE),
            "Subject" => Object::string_literal("Assessment Report"),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).map_err(|e| e.to_string())?;
        Ok(buffer)
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render(&self, report: &AssessmentReport) -> Result<Vec<u8>, ExportError> {
        let bytes = Self::build(report).map_err(|e| ExportError::render(ExportFormat::Pdf, e))?;
        tracing::debug!(size_bytes = bytes.len(), "PDF report rendered");
        Ok(bytes)
    }
}

fn push_rows(layout: &mut Layout, rows: &[ReportRow]) {
    for row in rows {
        layout.push(
            &format!("{}. {}", row.number, row.question.text()),
            Font::Regular,
            10,
            0,
            TEXT_COLOR,
            6,
        );
        layout.push(
            &format!("Response: {} - {}", row.rating.value(), row.rating.label()),
            Font::Regular,
            9,
            14,
            MUTED_COLOR,
            0,
        );
    }
}

fn page_content(lines: Vec<(Line, i64)>, page_number: usize, page_count: usize) -> Content {
    let mut operations = Vec::new();

    for (line, y) in lines {
        text_operations(
            &mut operations,
            &line.text,
            line.font,
            line.size,
            MARGIN + line.indent,
            y,
            line.color,
        );
    }

    text_operations(
        &mut operations,
        FOOTER_TEXT,
        Font::Regular,
        8,
        MARGIN,
        MARGIN / 2 + 12,
        MUTED_COLOR,
    );
    text_operations(
        &mut operations,
        &format!("Page {} of {}", page_number, page_count),
        Font::Regular,
        8,
        PAGE_WIDTH - MARGIN - 50,
        MARGIN / 2 + 12,
        MUTED_COLOR,
    );

    Content { operations }
}

fn text_operations(
    operations: &mut Vec<Operation>,
    text: &str,
    font: Font,
    size: i64,
    x: i64,
    y: i64,
    color: Color,
) {
    let (r, g, b) = color;
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "rg",
        vec![channel(r), channel(g), channel(b)],
    ));
    operations.push(Operation::new(
        "Tf",
        vec![font.resource_name().into(), size.into()],
    ));
    operations.push(Operation::new("Td", vec![x.into(), y.into()]));
    operations.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    operations.push(Operation::new("ET", vec![]));
}

fn channel(value: u8) -> Object {
    Object::Real(f32::from(value) / 255.0)
}

fn level_color(level: StressLevel) -> Color {
    match level {
        StressLevel::Low => (16, 185, 129),
        StressLevel::Moderate => (245, 158, 11),
        StressLevel::High => (239, 68, 68),
    }
}

/// Replaces characters outside printable ASCII.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '?',
        })
        .collect()
}

/// Rough character budget per line for Helvetica at `size`.
fn max_chars(width: i64, size: i64, font: Font) -> usize {
    // average glyph width is about half the font size, a little more for bold
    let glyph = match font {
        Font::Regular => size * 50,
        Font::Bold => size * 55,
    };
    ((width * 100) / glyph.max(1)).max(10) as usize
}

/// Greedy word wrap. Words longer than `limit` are split.
fn wrap(text: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.len() > limit {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(limit);
            lines.push(word);
            word = rest;
        }
        if current.is_empty() {
            current = word;
        } else if current.len() + 1 + word.len() <= limit {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

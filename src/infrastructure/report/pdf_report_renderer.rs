use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::application::ports::{RenderError, ReportRenderer};
use crate::domain::MeetingRecord;

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 20.0;
const LINE_HEIGHT_MM: f64 = 6.0;
const SECTION_GAP_MM: f64 = 4.0;

const TITLE_SIZE_PT: f64 = 14.0;
const HEADING_SIZE_PT: f64 = 12.0;
const BODY_SIZE_PT: f64 = 11.0;

const PT_TO_MM: f64 = 0.352_778;
// Average Helvetica glyph width relative to the font size.
const GLYPH_WIDTH_EM: f64 = 0.5;

pub const MAX_LINE_CHARS: usize = 95;

/// Fixed-layout report: centered title, then Summary, Action Items,
/// Decisions, and Transcript sections as heading plus wrapped text block.
/// Long text spans pages.
pub struct PdfReportRenderer;

impl PdfReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, record: &MeetingRecord) -> Result<Vec<u8>, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            "Meeting Summary",
            Mm(PAGE_WIDTH_MM as f32),
            Mm(PAGE_HEIGHT_MM as f32),
            "content",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Document(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Document(e.to_string()))?;

        let mut writer = ReportWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
        };

        let title = "Meeting Summary";
        writer.write_line(title, TITLE_SIZE_PT, &bold, centered_x(title, TITLE_SIZE_PT));
        writer.gap(SECTION_GAP_MM + LINE_HEIGHT_MM);

        let sections = [
            ("Summary:", record.summary.as_str()),
            ("Action Items:", record.action_items.as_str()),
            ("Decisions:", record.decisions.as_str()),
            ("Transcript:", record.transcript.as_str()),
        ];

        for (heading, body) in sections {
            writer.write_line(heading, HEADING_SIZE_PT, &bold, MARGIN_MM);
            for line in wrap_text(body, MAX_LINE_CHARS) {
                writer.write_line(&line, BODY_SIZE_PT, &regular, MARGIN_MM);
            }
            writer.gap(SECTION_GAP_MM);
        }

        doc.save_to_bytes()
            .map_err(|e| RenderError::Document(e.to_string()))
    }
}

struct ReportWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y_mm: f64,
}

impl ReportWriter<'_> {
    fn write_line(&mut self, text: &str, size_pt: f64, font: &IndirectFontRef, x_mm: f64) {
        if self.y_mm < MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        if !text.is_empty() {
            self.layer
                .use_text(text, size_pt as f32, Mm(x_mm as f32), Mm(self.y_mm as f32), font);
        }
        self.y_mm -= LINE_HEIGHT_MM;
    }

    fn gap(&mut self, mm: f64) {
        self.y_mm -= mm;
    }
}

fn centered_x(text: &str, size_pt: f64) -> f64 {
    let width_mm = text.chars().count() as f64 * size_pt * GLYPH_WIDTH_EM * PT_TO_MM;
    ((PAGE_WIDTH_MM - width_mm) / 2.0).max(MARGIN_MM)
}

/// Greedy word wrap. Paragraph breaks in the input are preserved; words
/// longer than the line budget are split hard.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word;
            while word.chars().count() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split_at = word
                    .char_indices()
                    .nth(max_chars)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                let (head, tail) = word.split_at(split_at);
                lines.push(head.to_string());
                word = tail;
            }

            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

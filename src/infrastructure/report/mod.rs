mod pdf_report_renderer;

pub use pdf_report_renderer::{MAX_LINE_CHARS, PdfReportRenderer, wrap_text};

use chrono::Utc;

use plenum::application::ports::{ReportRenderer, report_file_name};
use plenum::domain::{MeetingId, MeetingRecord};
use plenum::infrastructure::report::{MAX_LINE_CHARS, PdfReportRenderer, wrap_text};

fn record_with(transcript: &str) -> MeetingRecord {
    MeetingRecord {
        id: MeetingId::from_i64(7),
        transcript: transcript.to_string(),
        summary: "### Summary:\n- a point\n\n### Key Decisions:\n- a decision\n\n### Action Items:\n- a task".to_string(),
        action_items: "- a task".to_string(),
        decisions: "- a decision".to_string(),
        created_at: Utc::now(),
    }
}

#[test]
fn given_meeting_record_when_rendering_then_output_is_a_pdf() {
    let renderer = PdfReportRenderer::new();
    let bytes = renderer.render(&record_with("short transcript")).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}

#[test]
fn given_very_long_transcript_when_rendering_then_document_spans_pages() {
    let renderer = PdfReportRenderer::new();

    let long_transcript = "meeting talk ".repeat(20_000);
    let long = renderer.render(&record_with(&long_transcript)).unwrap();
    let short = renderer.render(&record_with("short transcript")).unwrap();

    assert!(long.starts_with(b"%PDF"));
    assert!(long.len() > short.len());
}

#[test]
fn given_empty_sections_when_rendering_then_rendering_still_succeeds() {
    let renderer = PdfReportRenderer::new();
    let record = MeetingRecord {
        id: MeetingId::from_i64(1),
        transcript: String::new(),
        summary: String::new(),
        action_items: String::new(),
        decisions: String::new(),
        created_at: Utc::now(),
    };

    let bytes = renderer.render(&record).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn given_meeting_id_when_deriving_file_name_then_stable_pattern() {
    assert_eq!(report_file_name(MeetingId::from_i64(12)), "meeting_12_summary.pdf");
}

#[test]
fn given_long_paragraph_when_wrapping_then_no_line_exceeds_budget() {
    let text = "word ".repeat(500);
    let lines = wrap_text(&text, MAX_LINE_CHARS);

    assert!(!lines.is_empty());
    for line in &lines {
        assert!(line.chars().count() <= MAX_LINE_CHARS);
    }
}

#[test]
fn given_wrapped_paragraph_when_rejoined_then_word_order_preserved() {
    let text = "alpha beta gamma delta epsilon zeta";
    let lines = wrap_text(text, 12);

    let rejoined = lines.join(" ");
    assert_eq!(rejoined, text);
}

#[test]
fn given_word_longer_than_budget_when_wrapping_then_word_is_split() {
    let text = "a".repeat(25);
    let lines = wrap_text(&text, 10);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].len(), 10);
    assert_eq!(lines[2].len(), 5);
}

#[test]
fn given_multiline_input_when_wrapping_then_paragraph_breaks_preserved() {
    let text = "- first item\n- second item";
    let lines = wrap_text(text, MAX_LINE_CHARS);

    assert_eq!(lines, vec!["- first item".to_string(), "- second item".to_string()]);
}

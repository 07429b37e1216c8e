use crate::domain::{MeetingId, MeetingRecord};

/// Renders a meeting record into a downloadable document. The report is
/// derived data: regenerable at any time from the record it was built from.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, record: &MeetingRecord) -> Result<Vec<u8>, RenderError>;
}

pub fn report_file_name(id: MeetingId) -> String {
    format!("meeting_{}_summary.pdf", id)
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("document assembly failed: {0}")]
    Document(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

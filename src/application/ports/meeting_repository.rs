use async_trait::async_trait;

use crate::domain::{MeetingDraft, MeetingId, MeetingRecord};

use super::RepositoryError;

/// Append-only store of meeting records. There are no update or delete
/// operations; every insert is atomic in isolation.
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Appends a new record and returns the assigned identifier.
    async fn insert(&self, draft: &MeetingDraft) -> Result<MeetingId, RepositoryError>;

    /// Substring match against transcripts. An empty query matches every
    /// stored record; zero matches is an empty result, not an error.
    async fn search(&self, query: &str) -> Result<Vec<MeetingRecord>, RepositoryError>;

    async fn get_by_id(&self, id: MeetingId) -> Result<Option<MeetingRecord>, RepositoryError>;
}

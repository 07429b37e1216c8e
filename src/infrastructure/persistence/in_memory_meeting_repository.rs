use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{MeetingRepository, RepositoryError};
use crate::domain::{MeetingDraft, MeetingId, MeetingRecord};

/// Vec-backed repository for tests and mock wiring. Ids are assigned the
/// same way the SQLite store assigns them: 1-based, monotonically.
#[derive(Default)]
pub struct InMemoryMeetingRepository {
    records: Mutex<Vec<MeetingRecord>>,
}

impl InMemoryMeetingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MeetingRepository for InMemoryMeetingRepository {
    async fn insert(&self, draft: &MeetingDraft) -> Result<MeetingId, RepositoryError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let id = MeetingId::from_i64(records.len() as i64 + 1);
        records.push(MeetingRecord {
            id,
            transcript: draft.transcript.clone(),
            summary: draft.summary.clone(),
            action_items: draft.action_items.clone(),
            decisions: draft.decisions.clone(),
            created_at: Utc::now(),
        });

        Ok(id)
    }

    async fn search(&self, query: &str) -> Result<Vec<MeetingRecord>, RepositoryError> {
        let records = self
            .records
            .lock()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(records
            .iter()
            .filter(|r| r.transcript.contains(query))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: MeetingId) -> Result<Option<MeetingRecord>, RepositoryError> {
        let records = self
            .records
            .lock()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(records.iter().find(|r| r.id == id).cloned())
    }
}

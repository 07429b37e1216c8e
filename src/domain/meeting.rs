use chrono::{DateTime, Utc};

/// Store-assigned meeting identifier. Monotonically increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeetingId(i64);

impl MeetingId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MeetingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted meeting. Transcript and summary are write-once; there is no
/// update or delete path anywhere in the system.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingRecord {
    pub id: MeetingId,
    pub transcript: String,
    pub summary: String,
    pub action_items: String,
    pub decisions: String,
    pub created_at: DateTime<Utc>,
}

/// Field values for a meeting that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingDraft {
    pub transcript: String,
    pub summary: String,
    pub action_items: String,
    pub decisions: String,
}

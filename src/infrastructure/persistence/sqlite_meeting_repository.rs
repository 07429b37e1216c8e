use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::instrument;

use crate::application::ports::{MeetingRepository, RepositoryError};
use crate::domain::{MeetingDraft, MeetingId, MeetingRecord};

pub struct SqliteMeetingRepository {
    pool: SqlitePool,
}

impl SqliteMeetingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS meetings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                transcript TEXT NOT NULL,
                summary TEXT NOT NULL,
                action_items TEXT NOT NULL DEFAULT '',
                decisions TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl MeetingRepository for SqliteMeetingRepository {
    #[instrument(skip(self, draft), fields(transcript_chars = draft.transcript.len()))]
    async fn insert(&self, draft: &MeetingDraft) -> Result<MeetingId, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO meetings (transcript, summary, action_items, decisions, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&draft.transcript)
        .bind(&draft.summary)
        .bind(&draft.action_items)
        .bind(&draft.decisions)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(MeetingId::from_i64(result.last_insert_rowid()))
    }

    #[instrument(skip(self), fields(query_chars = query.len()))]
    async fn search(&self, query: &str) -> Result<Vec<MeetingRecord>, RepositoryError> {
        let pattern = format!("%{}%", query);

        let rows = sqlx::query(
            r#"
            SELECT id, transcript, summary, action_items, decisions, created_at
            FROM meetings
            WHERE transcript LIKE ?1
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.into_iter().map(record_from_row).collect()
    }

    #[instrument(skip(self), fields(meeting_id = %id))]
    async fn get_by_id(&self, id: MeetingId) -> Result<Option<MeetingRecord>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, transcript, summary, action_items, decisions, created_at
            FROM meetings
            WHERE id = ?1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(record_from_row).transpose()
    }
}

fn record_from_row(row: SqliteRow) -> Result<MeetingRecord, RepositoryError> {
    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| RepositoryError::QueryFailed(format!("created_at: {}", e)))?
        .with_timezone(&Utc);

    Ok(MeetingRecord {
        id: MeetingId::from_i64(
            row.try_get("id")
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        ),
        transcript: row
            .try_get("transcript")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        summary: row
            .try_get("summary")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        action_items: row
            .try_get("action_items")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        decisions: row
            .try_get("decisions")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        created_at,
    })
}

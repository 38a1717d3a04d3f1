//! Content preference repository backed by SQLite

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contentplan_core::PreferenceRepository;
use contentplan_domain::{Cadence, ContentPlanError, PreferenceRecord, Result as DomainResult};
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;
use tracing::debug;

use super::manager::{map_join_error, map_sql_error, DbManager};

/// SQLite-backed implementation of `PreferenceRepository`
pub struct SqlitePreferenceRepository {
    db: Arc<DbManager>,
}

impl SqlitePreferenceRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PreferenceRepository for SqlitePreferenceRepository {
    async fn upsert_preferences(&self, record: PreferenceRecord) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO content_preferences
                    (owner_id, content_types, target_audience, description, post_frequency, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(owner_id) DO UPDATE SET
                    content_types = excluded.content_types,
                    target_audience = excluded.target_audience,
                    description = excluded.description,
                    post_frequency = excluded.post_frequency,
                    updated_at = excluded.updated_at",
                params![
                    record.owner_id,
                    record.content_types,
                    record.target_audience,
                    record.description,
                    record.cadence.label(),
                    record.updated_at.timestamp_millis(),
                ],
            )
            .map_err(map_sql_error)?;

            debug!(owner_id = %record.owner_id, "preferences upserted");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get_preferences(&self, owner_id: &str) -> DomainResult<Option<PreferenceRecord>> {
        let db = Arc::clone(&self.db);
        let owner_id = owner_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<PreferenceRecord>> {
            let conn = db.get_connection()?;
            conn.query_row(
                "SELECT owner_id, content_types, target_audience, description, post_frequency, updated_at
                 FROM content_preferences WHERE owner_id = ?1",
                params![owner_id],
                map_preference_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_preference_row(row: &Row<'_>) -> rusqlite::Result<PreferenceRecord> {
    let frequency: String = row.get(4)?;
    let updated_at: i64 = row.get(5)?;

    Ok(PreferenceRecord {
        owner_id: row.get(0)?,
        content_types: row.get(1)?,
        target_audience: row.get(2)?,
        description: row.get(3)?,
        cadence: Cadence::from_label(&frequency),
        updated_at: millis_to_utc(updated_at, 5)?,
    })
}

pub(crate) fn millis_to_utc(millis: i64, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            rusqlite::types::Type::Integer,
            Box::new(ContentPlanError::Database(format!("timestamp out of range: {millis}"))),
        )
    })
}

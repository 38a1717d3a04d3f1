//! Saved calendar repository backed by SQLite

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use contentplan_core::CalendarRepository;
use contentplan_domain::{
    CalendarCollection, ContentPlanError, NewCalendar, PostSlot, Result as DomainResult,
};
use rusqlite::{params, Row};
use tokio::task;
use tracing::{debug, info};
use uuid::Uuid;

use super::manager::{map_join_error, map_sql_error, DbManager};
use super::preference_repository::millis_to_utc;
use crate::errors::InfraError;

/// SQLite-backed implementation of `CalendarRepository`
///
/// Posts are stored as a JSON array. Every query is scoped to the owner.
pub struct SqliteCalendarRepository {
    db: Arc<DbManager>,
}

impl SqliteCalendarRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CalendarRepository for SqliteCalendarRepository {
    async fn save_calendar(&self, calendar: NewCalendar) -> DomainResult<CalendarCollection> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<CalendarCollection> {
            let posts_json = serde_json::to_string(&calendar.posts)
                .map_err(|err| ContentPlanError::from(InfraError::from(err)))?;
            let now = Utc::now();
            let saved = CalendarCollection {
                id: Uuid::now_v7().to_string(),
                name: calendar.name,
                created_at: now,
                updated_at: now,
                owner_id: calendar.owner_id,
                posts: calendar.posts,
            };

            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO content_calendars (id, owner_id, name, posts_json, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    saved.id,
                    saved.owner_id,
                    saved.name,
                    posts_json,
                    saved.created_at.timestamp_millis(),
                    saved.updated_at.timestamp_millis(),
                ],
            )
            .map_err(map_sql_error)?;

            info!(calendar_id = %saved.id, posts = saved.posts.len(), "calendar stored");
            Ok(saved)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_calendars(&self, owner_id: &str) -> DomainResult<Vec<CalendarCollection>> {
        let db = Arc::clone(&self.db);
        let owner_id = owner_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<CalendarCollection>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(
                    "SELECT id, name, created_at, updated_at, owner_id, posts_json
                     FROM content_calendars
                     WHERE owner_id = ?1
                     ORDER BY created_at DESC, rowid DESC",
                )
                .map_err(map_sql_error)?;

            let calendars = stmt
                .query_map(params![owner_id], map_calendar_row)
                .map_err(map_sql_error)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(map_sql_error)?;

            debug!(owner_id = %owner_id, count = calendars.len(), "calendars listed");
            Ok(calendars)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete_calendar(&self, id: &str, owner_id: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();
        let owner_id = owner_id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let deleted = conn
                .execute(
                    "DELETE FROM content_calendars WHERE id = ?1 AND owner_id = ?2",
                    params![id, owner_id],
                )
                .map_err(map_sql_error)?;

            if deleted == 0 {
                return Err(ContentPlanError::NotFound(format!("calendar {id}")));
            }
            info!(calendar_id = %id, "calendar removed");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_calendar_row(row: &Row<'_>) -> rusqlite::Result<CalendarCollection> {
    let posts_json: String = row.get(5)?;
    let posts: Vec<PostSlot> = serde_json::from_str(&posts_json).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(err))
    })?;

    Ok(CalendarCollection {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: millis_to_utc(row.get(2)?, 2)?,
        updated_at: millis_to_utc(row.get(3)?, 3)?,
        owner_id: row.get(4)?,
        posts,
    })
}

//! Shared helpers for infra integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeZone};
use contentplan_domain::{Cadence, ContentPreference};
use contentplan_infra::database::DbManager;
use tempfile::TempDir;

/// Temporary migrated database that lives as long as the wrapper.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("contentplan-test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("migrations should apply");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    pub fn count(&self, table: &str) -> i64 {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
            .expect("count query should succeed")
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Monday 2024-06-10 08:00 at UTC+02:00.
pub fn monday_morning() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 6, 10, 8, 0, 0)
        .single()
        .unwrap()
}

pub fn fitness_three_times_weekly() -> ContentPreference {
    ContentPreference::new(
        ["fitness", "food"],
        "Quick home workouts and fuel",
        Cadence::ThreeTimesWeekly,
        "Remote workers",
    )
}

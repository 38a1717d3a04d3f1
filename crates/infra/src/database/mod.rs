//! Database implementations

pub mod calendar_repository;
pub mod manager;
pub mod preference_repository;

pub use calendar_repository::SqliteCalendarRepository;
pub use manager::{DbManager, SqliteConnection, SqlitePool};
pub use preference_repository::SqlitePreferenceRepository;

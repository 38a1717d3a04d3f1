//! Persisted calendar and preference records
//!
//! Shapes owned by the storage collaborator. The core only reads `posts`
//! from a [`CalendarCollection`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::CATEGORY_SEPARATOR;
use crate::{Cadence, ContentPreference, PostSlot};

/// A saved calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCollection {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_id: String,
    pub posts: Vec<PostSlot>,
}

/// Input for creating a calendar; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalendar {
    pub owner_id: String,
    pub name: String,
    pub posts: Vec<PostSlot>,
}

/// Flattened preference row, one per owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub owner_id: String,
    /// Category tags joined with `,`.
    pub content_types: String,
    pub target_audience: String,
    pub description: String,
    pub cadence: Cadence,
    pub updated_at: DateTime<Utc>,
}

impl PreferenceRecord {
    pub fn from_preference(
        owner_id: impl Into<String>,
        preference: &ContentPreference,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            content_types: preference.content_categories.join(CATEGORY_SEPARATOR),
            target_audience: preference.audience.clone(),
            description: preference.description.clone(),
            cadence: preference.cadence,
            updated_at,
        }
    }

    /// Rebuild preferences from the stored row.
    pub fn to_preference(&self) -> ContentPreference {
        ContentPreference::new(
            self.content_types.split(CATEGORY_SEPARATOR),
            self.description.clone(),
            self.cadence,
            self.target_audience.clone(),
        )
    }
}

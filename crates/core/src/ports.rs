//! Port interfaces for external collaborators
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations. Ownership scoping is the
//! collaborator's job: the core passes `owner_id` through and trusts the
//! result.

use async_trait::async_trait;
use contentplan_domain::{
    CalendarCollection, ImagePrompt, NewCalendar, PreferenceRecord, PromptRequest, Result,
};

/// Trait for persisting content preferences
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Insert or replace the preference row for `record.owner_id`
    async fn upsert_preferences(&self, record: PreferenceRecord) -> Result<()>;

    /// Get the stored preferences for an owner, if any
    async fn get_preferences(&self, owner_id: &str) -> Result<Option<PreferenceRecord>>;
}

/// Trait for saved calendar persistence
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Create a calendar; the store assigns id and timestamps
    async fn save_calendar(&self, calendar: NewCalendar) -> Result<CalendarCollection>;

    /// List an owner's calendars, newest first
    async fn list_calendars(&self, owner_id: &str) -> Result<Vec<CalendarCollection>>;

    /// Delete a calendar owned by `owner_id`
    async fn delete_calendar(&self, id: &str, owner_id: &str) -> Result<()>;
}

/// Trait for the external image-prompt generation service
#[async_trait]
pub trait PromptGenerator: Send + Sync {
    /// Generate image prompts. An error payload from the service is
    /// reported as `Err`.
    async fn generate_prompts(&self, request: &PromptRequest) -> Result<Vec<ImagePrompt>>;
}

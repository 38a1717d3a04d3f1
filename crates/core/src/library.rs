//! Saved-calendar library for one owner

use std::sync::Arc;

use contentplan_domain::{CalendarCollection, ContentPlanError, Result};
use tracing::{error, info};

use crate::ports::CalendarRepository;
use crate::view::CalendarView;

/// An owner's saved calendars, newest first.
///
/// Deletion is optimistic: the entry disappears locally before the
/// repository confirms, and the previous list is restored if it refuses.
pub struct CalendarLibrary {
    repository: Arc<dyn CalendarRepository>,
    owner_id: String,
    calendars: Vec<CalendarCollection>,
}

impl CalendarLibrary {
    /// Empty library for `owner_id`; call [`load`](Self::load) to fill it.
    pub fn new(repository: Arc<dyn CalendarRepository>, owner_id: impl Into<String>) -> Self {
        Self { repository, owner_id: owner_id.into(), calendars: Vec::new() }
    }

    /// Owner whose calendars are listed.
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Refresh from the repository. On failure the previous list is kept.
    pub async fn load(&mut self) -> Result<&[CalendarCollection]> {
        match self.repository.list_calendars(&self.owner_id).await {
            Ok(calendars) => {
                info!(owner_id = %self.owner_id, count = calendars.len(), "calendars loaded");
                self.calendars = calendars;
                Ok(&self.calendars)
            }
            Err(err) => {
                error!(
                    owner_id = %self.owner_id,
                    error = %err,
                    error_kind = err.label(),
                    "failed to list calendars"
                );
                Err(err)
            }
        }
    }

    /// Loaded calendars, newest first.
    pub fn calendars(&self) -> &[CalendarCollection] {
        &self.calendars
    }

    /// Whether any calendar is loaded.
    pub fn has_calendars(&self) -> bool {
        !self.calendars.is_empty()
    }

    /// Loaded calendar with `id`, if any.
    pub fn get(&self, id: &str) -> Option<&CalendarCollection> {
        self.calendars.iter().find(|calendar| calendar.id == id)
    }

    /// Open a loaded calendar for viewing.
    pub fn open(&self, id: &str) -> Result<CalendarView> {
        self.get(id)
            .map(CalendarView::from_calendar)
            .ok_or_else(|| ContentPlanError::NotFound(format!("calendar {id}")))
    }

    /// Delete `id`, rolling the local list back if the repository fails.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let Some(position) = self.calendars.iter().position(|calendar| calendar.id == id) else {
            return Err(ContentPlanError::NotFound(format!("calendar {id}")));
        };

        let snapshot = self.calendars.clone();
        self.calendars.remove(position);

        if let Err(err) = self.repository.delete_calendar(id, &self.owner_id).await {
            error!(
                calendar_id = id,
                error = %err,
                error_kind = err.label(),
                "failed to delete calendar; restoring list"
            );
            self.calendars = snapshot;
            return Err(err);
        }

        info!(calendar_id = id, remaining = self.calendars.len(), "calendar deleted");
        Ok(())
    }
}

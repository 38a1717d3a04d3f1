//! Mock repository implementations for testing

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use contentplan_core::{CalendarRepository, PreferenceRepository};
use contentplan_domain::{
    CalendarCollection, ContentPlanError, NewCalendar, PreferenceRecord, Result as DomainResult,
};

/// In-memory `PreferenceRepository` keyed by owner.
#[derive(Default, Clone)]
pub struct InMemoryPreferenceRepository {
    records: Arc<Mutex<HashMap<String, PreferenceRecord>>>,
    upsert_calls: Arc<AtomicUsize>,
    fail_upsert: Arc<AtomicBool>,
    fail_get: Arc<AtomicBool>,
}

impl InMemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(self, record: PreferenceRecord) -> Self {
        self.records.lock().unwrap().insert(record.owner_id.clone(), record);
        self
    }

    pub fn fail_upserts(&self, fail: bool) {
        self.fail_upsert.store(fail, Ordering::SeqCst);
    }

    pub fn fail_gets(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    pub fn record(&self, owner_id: &str) -> Option<PreferenceRecord> {
        self.records.lock().unwrap().get(owner_id).cloned()
    }

    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn upsert_preferences(&self, record: PreferenceRecord) -> DomainResult<()> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_upsert.load(Ordering::SeqCst) {
            return Err(ContentPlanError::Database("preferences table unavailable".into()));
        }
        self.records.lock().unwrap().insert(record.owner_id.clone(), record);
        Ok(())
    }

    async fn get_preferences(&self, owner_id: &str) -> DomainResult<Option<PreferenceRecord>> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(ContentPlanError::Database("preferences table unavailable".into()));
        }
        Ok(self.records.lock().unwrap().get(owner_id).cloned())
    }
}

/// In-memory `CalendarRepository`.
///
/// Ids are `cal-N`; each save is stamped one minute after the previous so
/// newest-first ordering is observable.
#[derive(Default, Clone)]
pub struct InMemoryCalendarRepository {
    calendars: Arc<Mutex<Vec<CalendarCollection>>>,
    saves: Arc<AtomicUsize>,
    fail_save: Arc<AtomicBool>,
    fail_list: Arc<AtomicBool>,
    fail_delete: Arc<AtomicBool>,
}

impl InMemoryCalendarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Vec<CalendarCollection> {
        self.calendars.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarRepository for InMemoryCalendarRepository {
    async fn save_calendar(&self, calendar: NewCalendar) -> DomainResult<CalendarCollection> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(ContentPlanError::Database("disk full".into()));
        }
        let index = self.saves.fetch_add(1, Ordering::SeqCst);
        let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
            + Duration::minutes(index as i64);
        let saved = CalendarCollection {
            id: format!("cal-{}", index + 1),
            name: calendar.name,
            created_at: stamp,
            updated_at: stamp,
            owner_id: calendar.owner_id,
            posts: calendar.posts,
        };
        self.calendars.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn list_calendars(&self, owner_id: &str) -> DomainResult<Vec<CalendarCollection>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ContentPlanError::Collaborator("listing timed out".into()));
        }
        let mut owned: Vec<CalendarCollection> = self
            .calendars
            .lock()
            .unwrap()
            .iter()
            .filter(|calendar| calendar.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn delete_calendar(&self, id: &str, owner_id: &str) -> DomainResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(ContentPlanError::Collaborator("delete rejected".into()));
        }
        let mut calendars = self.calendars.lock().unwrap();
        let before = calendars.len();
        calendars.retain(|calendar| !(calendar.id == id && calendar.owner_id == owner_id));
        if calendars.len() == before {
            return Err(ContentPlanError::NotFound(format!("calendar {id}")));
        }
        Ok(())
    }
}

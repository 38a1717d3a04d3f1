//! Calendar view model: full-text search plus week pagination over a post
//! sequence.
//!
//! Two effective states: unfiltered (empty query, every post visible to
//! pagination) and filtered (posts whose caption or image prompt contain
//! the query, case-insensitively). Changing the query always returns to
//! the first week. A query with no matches is a valid, empty view.

use contentplan_domain::constants::DAYS_PER_WEEK;
use contentplan_domain::{CalendarCollection, PostSlot};
use tracing::debug;

/// Read-only projection over a post sequence for one viewing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    source: Vec<PostSlot>,
    query: String,
    filtered: Vec<PostSlot>,
    week: usize,
}

impl CalendarView {
    /// Unfiltered view on the first week of `posts`.
    pub fn new(posts: Vec<PostSlot>) -> Self {
        let filtered = posts.clone();
        Self { source: posts, query: String::new(), filtered, week: 0 }
    }

    /// View over a saved calendar's posts.
    pub fn from_calendar(calendar: &CalendarCollection) -> Self {
        Self::new(calendar.posts.clone())
    }

    /// Narrow to posts matching `query` (trimmed). An empty query clears
    /// the filter.
    pub fn search(&mut self, query: &str) {
        let query = query.trim();
        self.week = 0;

        if query.is_empty() {
            self.query.clear();
            self.filtered.clone_from(&self.source);
            return;
        }

        let needle = query.to_lowercase();
        self.filtered = self
            .source
            .iter()
            .filter(|post| {
                post.caption.to_lowercase().contains(&needle)
                    || post.image_prompt.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        self.query = query.to_string();

        debug!(query = %self.query, matches = self.filtered.len(), "calendar search applied");
    }

    /// Drop the filter and return to the first week.
    pub fn clear_search(&mut self) {
        self.search("");
    }

    /// Advance one week; returns false (no-op) on the last week.
    pub fn next_week(&mut self) -> bool {
        if self.week + 1 < self.week_count() {
            self.week += 1;
            true
        } else {
            false
        }
    }

    /// Go back one week; returns false (no-op) on the first week.
    pub fn prev_week(&mut self) -> bool {
        if self.week > 0 {
            self.week -= 1;
            true
        } else {
            false
        }
    }

    /// Posts of the current week, at most seven; empty when nothing matches.
    pub fn visible_posts(&self) -> &[PostSlot] {
        let start = (self.week * DAYS_PER_WEEK).min(self.filtered.len());
        let end = (start + DAYS_PER_WEEK).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Number of weeks, never less than one so an empty view still renders
    /// as "Week 1 of 1".
    pub fn week_count(&self) -> usize {
        self.filtered.len().div_ceil(DAYS_PER_WEEK).max(1)
    }

    /// Zero-based index of the current week.
    pub fn current_week(&self) -> usize {
        self.week
    }

    /// "Week N of M", one-based.
    pub fn week_label(&self) -> String {
        format!("Week {} of {}", self.week + 1, self.week_count())
    }

    /// Whether `next_week` would move.
    pub fn has_next_week(&self) -> bool {
        self.week + 1 < self.week_count()
    }

    /// Whether `prev_week` would move.
    pub fn has_prev_week(&self) -> bool {
        self.week > 0
    }

    /// Active trimmed query; empty when unfiltered.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a non-empty query is applied.
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty()
    }

    /// Every post passing the current filter, across all weeks.
    pub fn filtered_posts(&self) -> &[PostSlot] {
        &self.filtered
    }

    /// The unfiltered posts, in schedule order.
    pub fn source_posts(&self) -> &[PostSlot] {
        &self.source
    }
}

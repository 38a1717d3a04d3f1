//! Shared test helpers for `contentplan-core` integration tests.
//!
//! In-memory implementations of the storage and prompt ports, with failure
//! toggles so the wizard and library error paths can be exercised without a
//! database or network.

#![allow(dead_code)]

pub mod prompts;
pub mod repositories;

use chrono::{DateTime, FixedOffset, TimeZone};
use contentplan_domain::{Cadence, ContentPreference};

/// Tuesday 2024-03-05 09:30 at UTC+01:00.
pub fn fixed_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 5, 9, 30, 0)
        .single()
        .unwrap()
}

pub fn food_weekly() -> ContentPreference {
    ContentPreference::new(["food"], "Healthy weeknight recipes", Cadence::Weekly, "Busy parents")
}

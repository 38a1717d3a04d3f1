//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Planning horizon
pub const HORIZON_DAYS: u32 = 28;
pub const DAYS_PER_WEEK: usize = 7;

// Cadence patterns (slot count, day step)
pub const DAILY_STEP_DAYS: u32 = 1;
pub const THREE_TIMES_WEEKLY_SLOTS: u32 = 12;
pub const THREE_TIMES_WEEKLY_STEP_DAYS: u32 = 2;
pub const WEEKLY_STEP_DAYS: u32 = 7;
pub const FALLBACK_SLOTS: u32 = 10;
pub const FALLBACK_STEP_DAYS: u32 = 3;

// Decorative display time window (inclusive hours)
pub const EARLIEST_POST_HOUR: u32 = 8;
pub const LATEST_POST_HOUR: u32 = 20;

// Template selection
pub const DEFAULT_CATEGORY: &str = "lifestyle";
pub const DESCRIPTION_EXCERPT_WORDS: usize = 5;

// Prompt service request defaults
pub const DEFAULT_POST_TYPE: &str = "Single Image";
pub const DEFAULT_TONE: &str = "Informative";

// Persistence
pub const CATEGORY_SEPARATOR: &str = ",";

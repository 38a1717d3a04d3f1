//! # ContentPlan Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Template catalogs and the schedule builder
//! - External prompt merge and the calendar view model
//! - The wizard controller and saved-calendar library
//! - Port/adapter interfaces (traits) for storage and prompt generation
//!
//! ## Architecture Principles
//! - Only depends on `contentplan-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod library;
pub mod merge;
pub mod ports;
pub mod schedule;
pub mod templates;
pub mod view;
pub mod wizard;

// Re-export specific items to avoid ambiguity
pub use library::CalendarLibrary;
pub use merge::{merge_prompts, MergeOutcome, MergeWarning};
pub use ports::{CalendarRepository, PreferenceRepository, PromptGenerator};
pub use schedule::{build_schedule, Clock, FixedClock, RandomSource, RngSource, SlotPattern, SystemClock};
pub use view::CalendarView;
pub use wizard::{Presentation, WizardController, WizardStep};

//! Domain types organized by feature area
//!
//! This module contains all domain types used across the application,
//! organized into logical submodules.

pub mod calendar;
pub mod post;
pub mod preference;
pub mod prompt;

// Re-export all types for convenience
pub use calendar::*;
pub use post::*;
pub use preference::*;
pub use prompt::*;

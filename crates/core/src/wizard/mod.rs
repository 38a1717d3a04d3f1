//! Multi-step calendar creation wizard.
//!
//! Registration → preferences → generation (+ optional prompt merge) →
//! presentation. The current step and its payload live in a single
//! [`WizardStep`] value owned by the [`WizardController`].

pub mod controller;
pub mod state;

pub use controller::WizardController;
pub use state::{Presentation, WizardStep};

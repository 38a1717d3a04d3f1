//! Wizard step values.

use contentplan_domain::{CalendarCollection, ContentPreference};

use crate::merge::MergeWarning;
use crate::view::CalendarView;

/// Current wizard step together with the data that step owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    /// No owner identity yet.
    Registration,
    /// Waiting for preferences. `previous` pre-fills the form when known.
    CollectPreferences { owner_id: String, previous: Option<ContentPreference> },
    /// Preferences persisted; schedule and prompt merge in progress.
    Generating { owner_id: String, preference: ContentPreference },
    /// Generated calendar on display.
    Presenting(Presentation),
}

impl WizardStep {
    /// Stable step name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::CollectPreferences { .. } => "collect_preferences",
            Self::Generating { .. } => "generating",
            Self::Presenting(_) => "presenting",
        }
    }
}

/// Payload of the presenting step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub owner_id: String,
    pub preference: ContentPreference,
    pub view: CalendarView,
    /// Set when the prompt merge fell back to template prompts.
    pub merge_warning: Option<MergeWarning>,
    /// Name proposed by the entry form, used when saving without a name.
    pub suggested_name: Option<String>,
    /// Populated once the calendar has been saved.
    pub saved: Option<CalendarCollection>,
}

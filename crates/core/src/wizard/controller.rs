//! Wizard controller - drives a single owner through calendar creation

use std::sync::Arc;

use chrono::Utc;
use contentplan_domain::{
    CalendarCollection, ContentPlanError, ContentPreference, NewCalendar, PreferenceRecord,
    PromptRequest, PromptServiceConfig, QuickCalendarForm, Result,
};
use tracing::{debug, error, info, warn};

use super::state::{Presentation, WizardStep};
use crate::merge::merge_prompts;
use crate::ports::{CalendarRepository, PreferenceRepository, PromptGenerator};
use crate::schedule::{build_schedule, Clock, RandomSource};
use crate::view::CalendarView;

/// Post type / tone chosen on the quick form, overriding configured defaults.
struct RequestOverrides {
    post_type: String,
    tone: String,
}

/// Calendar creation wizard.
///
/// Validation failures and preference persistence failures leave the
/// wizard on the preference step. A prompt service failure is downgraded
/// to a [`MergeWarning`](crate::merge::MergeWarning) on the presentation.
pub struct WizardController {
    preferences: Arc<dyn PreferenceRepository>,
    calendars: Arc<dyn CalendarRepository>,
    prompts: Option<Arc<dyn PromptGenerator>>,
    prompt_defaults: PromptServiceConfig,
    clock: Arc<dyn Clock>,
    random: Box<dyn RandomSource + Send>,
    step: WizardStep,
}

impl WizardController {
    /// Create a wizard without a prompt service; template prompts only.
    pub fn new(
        preferences: Arc<dyn PreferenceRepository>,
        calendars: Arc<dyn CalendarRepository>,
        clock: Arc<dyn Clock>,
        random: Box<dyn RandomSource + Send>,
    ) -> Self {
        Self {
            preferences,
            calendars,
            prompts: None,
            prompt_defaults: PromptServiceConfig::default(),
            clock,
            random,
            step: WizardStep::Registration,
        }
    }

    /// Merge prompts from `generator` into generated calendars
    pub fn with_prompt_generator(
        mut self,
        generator: Arc<dyn PromptGenerator>,
        defaults: PromptServiceConfig,
    ) -> Self {
        self.prompts = Some(generator);
        self.prompt_defaults = defaults;
        self
    }

    /// Current step and its payload.
    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    /// Presented calendar, when on the presenting step.
    pub fn presentation(&self) -> Option<&Presentation> {
        match &self.step {
            WizardStep::Presenting(presentation) => Some(presentation),
            _ => None,
        }
    }

    /// View model of the presented calendar, for search and paging.
    pub fn view_mut(&mut self) -> Option<&mut CalendarView> {
        match &mut self.step {
            WizardStep::Presenting(presentation) => Some(&mut presentation.view),
            _ => None,
        }
    }

    /// Attach an owner identity and move to preference collection.
    ///
    /// Previously stored preferences are loaded to pre-fill the form; a
    /// lookup failure is logged and the form starts empty.
    pub async fn register(&mut self, owner_id: &str) -> Result<()> {
        let owner_id = owner_id.trim();
        if owner_id.is_empty() {
            return Err(ContentPlanError::InvalidInput("owner id must not be empty".into()));
        }
        if !matches!(self.step, WizardStep::Registration) {
            return Err(self.wrong_step("register"));
        }

        let previous = match self.preferences.get_preferences(owner_id).await {
            Ok(record) => record.map(|record| record.to_preference()),
            Err(err) => {
                warn!(
                    owner_id,
                    error = %err,
                    error_kind = err.label(),
                    "failed to load stored preferences"
                );
                None
            }
        };

        info!(owner_id, prefilled = previous.is_some(), "owner registered");
        self.step = WizardStep::CollectPreferences { owner_id: owner_id.to_string(), previous };
        Ok(())
    }

    /// Persist `preference`, build the calendar and present it.
    pub async fn submit_preferences(
        &mut self,
        preference: ContentPreference,
    ) -> Result<&Presentation> {
        self.generate(preference, None, None).await
    }

    /// Quick-form entry: same pipeline, with the form's post type and tone
    /// sent to the prompt service and its name proposed for saving.
    pub async fn submit_quick_form(&mut self, form: QuickCalendarForm) -> Result<&Presentation> {
        form.validate()?;
        let overrides = RequestOverrides { post_type: form.post_type.clone(), tone: form.tone.clone() };
        self.generate(form.to_preference(), Some(overrides), Some(form.calendar_name.trim().to_string()))
            .await
    }

    /// Save the presented calendar under `name`, or the suggested name when
    /// none is given.
    pub async fn save_calendar(&mut self, name: Option<&str>) -> Result<CalendarCollection> {
        let presentation = match &self.step {
            WizardStep::Presenting(presentation) => presentation,
            _ => return Err(self.wrong_step("save_calendar")),
        };

        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or(presentation.suggested_name.as_deref())
            .ok_or_else(|| ContentPlanError::Validation("Please enter a calendar name".into()))?
            .to_string();

        let request = NewCalendar {
            owner_id: presentation.owner_id.clone(),
            name,
            posts: presentation.view.source_posts().to_vec(),
        };

        let saved = match self.calendars.save_calendar(request).await {
            Ok(saved) => saved,
            Err(err) => {
                error!(
                    owner_id = %presentation.owner_id,
                    error = %err,
                    error_kind = err.label(),
                    "failed to save calendar"
                );
                return Err(err);
            }
        };

        info!(calendar_id = %saved.id, posts = saved.posts.len(), "calendar saved");
        if let WizardStep::Presenting(presentation) = &mut self.step {
            presentation.saved = Some(saved.clone());
        }
        Ok(saved)
    }

    /// Step back to preference collection, keeping owner and last
    /// preferences. No-op before preferences are collected.
    pub fn back(&mut self) {
        let step = std::mem::replace(&mut self.step, WizardStep::Registration);
        self.step = match step {
            WizardStep::Presenting(presentation) => WizardStep::CollectPreferences {
                owner_id: presentation.owner_id,
                previous: Some(presentation.preference),
            },
            WizardStep::Generating { owner_id, preference } => {
                WizardStep::CollectPreferences { owner_id, previous: Some(preference) }
            }
            other => other,
        };
        debug!(step = self.step.name(), "wizard moved back");
    }

    async fn generate(
        &mut self,
        preference: ContentPreference,
        overrides: Option<RequestOverrides>,
        suggested_name: Option<String>,
    ) -> Result<&Presentation> {
        let owner_id = match &self.step {
            WizardStep::CollectPreferences { owner_id, .. } => owner_id.clone(),
            _ => return Err(self.wrong_step("submit_preferences")),
        };

        preference.validate()?;

        let now = self.clock.now();
        let record = PreferenceRecord::from_preference(&owner_id, &preference, now.with_timezone(&Utc));
        if let Err(err) = self.preferences.upsert_preferences(record).await {
            error!(
                owner_id = %owner_id,
                error = %err,
                error_kind = err.label(),
                "failed to persist preferences"
            );
            return Err(err);
        }

        self.step = WizardStep::Generating { owner_id: owner_id.clone(), preference: preference.clone() };

        let posts = build_schedule(&preference, now.naive_local(), self.random.as_mut());
        let (posts, merge_warning) = match &self.prompts {
            Some(generator) => {
                let mut request = PromptRequest::from_preference(&preference, &self.prompt_defaults);
                if let Some(overrides) = overrides {
                    request = request.with_post_type(overrides.post_type).with_tone(overrides.tone);
                }
                let result = match request.validate() {
                    Ok(()) => generator.generate_prompts(&request).await,
                    Err(err) => Err(err),
                };
                let outcome = merge_prompts(posts, result);
                (outcome.posts, outcome.warning)
            }
            None => (posts, None),
        };

        info!(
            owner_id = %owner_id,
            cadence = %preference.cadence,
            slots = posts.len(),
            degraded = merge_warning.is_some(),
            "calendar generated"
        );

        self.step = WizardStep::Presenting(Presentation {
            owner_id,
            preference,
            view: CalendarView::new(posts),
            merge_warning,
            suggested_name,
            saved: None,
        });

        self.presentation()
            .ok_or_else(|| ContentPlanError::Internal("wizard left the presenting step".into()))
    }

    fn wrong_step(&self, action: &str) -> ContentPlanError {
        ContentPlanError::InvalidInput(format!(
            "cannot {action} while in the {} step",
            self.step.name()
        ))
    }
}


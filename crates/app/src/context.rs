//! Application context - dependency injection container

use std::sync::Arc;

use contentplan_core::{
    CalendarLibrary, CalendarRepository, PreferenceRepository, PromptGenerator, RngSource,
    SystemClock, WizardController,
};
use contentplan_domain::{Config, Result};
use contentplan_infra::database::{DbManager, SqliteCalendarRepository, SqlitePreferenceRepository};
use contentplan_infra::GeminiPromptClient;
use tracing::{info, warn};

/// Holds the adapters every command needs.
pub struct AppContext {
    pub config: Config,
    pub preferences: Arc<dyn PreferenceRepository>,
    pub calendars: Arc<dyn CalendarRepository>,
    /// `None` when the prompt service is disabled or has no API key.
    pub prompts: Option<Arc<dyn PromptGenerator>>,
}

impl AppContext {
    /// Open the database, apply migrations, check it answers, and build the
    /// adapters.
    pub fn new(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;
        db.health_check()?;

        let preferences: Arc<dyn PreferenceRepository> =
            Arc::new(SqlitePreferenceRepository::new(Arc::clone(&db)));
        let calendars: Arc<dyn CalendarRepository> =
            Arc::new(SqliteCalendarRepository::new(Arc::clone(&db)));
        let prompts = build_prompt_generator(&config);

        info!(
            db_path = %config.database.path,
            prompt_service = prompts.is_some(),
            "application context ready"
        );

        Ok(Self { config, preferences, calendars, prompts })
    }

    /// Fresh wizard. `seed` makes posting times reproducible; `use_prompts`
    /// attaches the prompt service when one is configured.
    pub fn wizard(&self, seed: Option<u64>, use_prompts: bool) -> WizardController {
        let random = match seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        let wizard = WizardController::new(
            Arc::clone(&self.preferences),
            Arc::clone(&self.calendars),
            Arc::new(SystemClock),
            Box::new(random),
        );

        match (&self.prompts, use_prompts) {
            (Some(generator), true) => {
                wizard.with_prompt_generator(Arc::clone(generator), self.config.prompts.clone())
            }
            _ => wizard,
        }
    }

    pub fn library(&self, owner_id: &str) -> CalendarLibrary {
        CalendarLibrary::new(Arc::clone(&self.calendars), owner_id)
    }
}

fn build_prompt_generator(config: &Config) -> Option<Arc<dyn PromptGenerator>> {
    if !config.prompts.enabled {
        return None;
    }
    match GeminiPromptClient::from_config(&config.prompts) {
        Ok(client) => Some(Arc::new(client)),
        Err(err) => {
            warn!(error = %err, "prompt service unavailable; template prompts only");
            None
        }
    }
}

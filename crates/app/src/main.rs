//! contentplan - content calendar planner
//!
//! Parses arguments, loads configuration, installs logging and dispatches
//! to the command handlers.

use std::process::ExitCode;

use clap::Parser;
use contentplan_app::{dispatch, AppContext, Cli};
use contentplan_domain::Config;
use contentplan_infra::{config, init_tracing};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // .env has to be in place before configuration reads the environment
    let dotenv = dotenvy::dotenv();

    let config: Config = match cli.config.clone() {
        Some(path) => config::load_from_file(Some(path))?,
        None => config::load_or_default()?,
    };
    init_tracing(&config.logging)?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => debug!(error = %e, "No .env loaded"),
    }

    let ctx = AppContext::new(config)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(&ctx, &cli.owner, cli.command, &mut stdout).await
}

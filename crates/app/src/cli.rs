//! CLI argument parsing for contentplan.
//!
//! This module only defines the command structure; handlers live in
//! `commands`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Plan a month of social posts from a few content preferences.
#[derive(Parser, Debug)]
#[command(name = "contentplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Owner whose preferences and calendars are used.
    #[arg(long, global = true, env = "CONTENTPLAN_OWNER", default_value = "local")]
    pub owner: String,

    /// Configuration file (TOML or JSON). Environment variables and probed
    /// files are used when omitted.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a calendar from preferences, optionally saving it.
    ///
    /// Preferences are stored for the owner before generation. Image
    /// prompts come from the prompt service when configured, falling back
    /// to built-in templates.
    Generate(GenerateArgs),

    /// List saved calendars, newest first.
    List,

    /// Show one week of a saved calendar.
    Show(ShowArgs),

    /// Delete a saved calendar.
    Delete(DeleteArgs),
}

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Content categories, in round-robin order (e.g. food,travel).
    #[arg(short = 'c', long = "category", value_delimiter = ',', required = true)]
    pub categories: Vec<String>,

    /// Description of the content style.
    #[arg(short, long)]
    pub description: String,

    /// Posting cadence: daily, "3x weekly" or weekly.
    #[arg(short = 'f', long, default_value = "weekly")]
    pub cadence: String,

    /// Target audience.
    #[arg(short, long)]
    pub audience: String,

    /// Save the generated calendar under this name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Skip the prompt service and keep template prompts.
    #[arg(long)]
    pub no_ai: bool,

    /// Seed for the decorative posting times.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Calendar id (see `list`).
    pub id: String,

    /// Only show posts whose caption or image prompt contain this text.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Week to show, starting at 1.
    #[arg(short, long, default_value_t = 1)]
    pub week: usize,
}

/// Arguments for the `delete` command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Calendar id (see `list`).
    pub id: String,
}

//! Command handlers.
//!
//! Each handler writes plain text to `out` and returns domain errors with
//! enough context for the binary to print.

use std::io::Write;

use anyhow::{bail, Context};
use contentplan_domain::{category_label, Cadence, ContentPreference};
use tracing::info;

use crate::cli::{Command, DeleteArgs, GenerateArgs, ShowArgs};
use crate::context::AppContext;
use crate::render;

/// Run `command` for `owner_id`.
pub async fn dispatch(
    ctx: &AppContext,
    owner_id: &str,
    command: Command,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Generate(args) => generate(ctx, owner_id, args, out).await,
        Command::List => list(ctx, owner_id, out).await,
        Command::Show(args) => show(ctx, owner_id, args, out).await,
        Command::Delete(args) => delete(ctx, owner_id, args, out).await,
    }
}

async fn generate(
    ctx: &AppContext,
    owner_id: &str,
    args: GenerateArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let cadence = Cadence::from_label(&args.cadence);
    if !cadence.is_offered() {
        writeln!(
            out,
            "Note: unknown cadence \"{}\"; using the default spacing.",
            args.cadence.trim()
        )?;
    }
    let preference =
        ContentPreference::new(&args.categories, args.description, cadence, args.audience);
    let labels: Vec<&str> = preference
        .content_categories
        .iter()
        .map(|tag| category_label(tag).unwrap_or(tag.as_str()))
        .collect();
    writeln!(out, "Categories: {}", labels.join(", "))?;

    let mut wizard = ctx.wizard(args.seed, !args.no_ai);
    wizard.register(owner_id).await?;
    wizard.submit_preferences(preference).await?;

    if let Some(presentation) = wizard.presentation() {
        if let Some(warning) = &presentation.merge_warning {
            writeln!(out, "{}", warning.notice())?;
        }
    }
    if let Some(view) = wizard.view_mut() {
        render::write_all_weeks(out, view)?;
    }

    if let Some(name) = args.name.as_deref() {
        let saved = wizard.save_calendar(Some(name)).await?;
        info!(calendar_id = %saved.id, "calendar saved from cli");
        writeln!(out)?;
        writeln!(out, "Saved \"{}\" as {}", saved.name, saved.id)?;
    }
    Ok(())
}

async fn list(ctx: &AppContext, owner_id: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut library = ctx.library(owner_id);
    let calendars = library.load().await.context("could not load calendars")?;
    render::write_calendar_list(out, calendars)?;
    Ok(())
}

async fn show(
    ctx: &AppContext,
    owner_id: &str,
    args: ShowArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut library = ctx.library(owner_id);
    library.load().await.context("could not load calendars")?;
    let mut view = library.open(&args.id)?;

    if let Some(query) = args.search.as_deref() {
        view.search(query);
    }
    if args.week == 0 || args.week > view.week_count() {
        bail!("week {} is out of range (1-{})", args.week, view.week_count());
    }
    for _ in 1..args.week {
        view.next_week();
    }

    if let Some(calendar) = library.get(&args.id) {
        writeln!(out, "{}", calendar.name)?;
    }
    render::write_week(out, &view)?;
    Ok(())
}

async fn delete(
    ctx: &AppContext,
    owner_id: &str,
    args: DeleteArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut library = ctx.library(owner_id);
    library.load().await.context("could not load calendars")?;
    library.delete(&args.id).await?;
    writeln!(out, "Deleted {}", args.id)?;
    Ok(())
}

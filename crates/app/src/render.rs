//! Plain-text rendering of view-model state.

use std::io::{self, Write};

use contentplan_core::CalendarView;
use contentplan_domain::{CalendarCollection, PostSlot};

/// Current week of `view`, with its label and search state.
pub fn write_week(out: &mut dyn Write, view: &CalendarView) -> io::Result<()> {
    writeln!(out, "{}", view.week_label())?;
    if view.is_filtered() {
        writeln!(
            out,
            "Search \"{}\": {} matching post(s)",
            view.query(),
            view.filtered_posts().len()
        )?;
    }

    let posts = view.visible_posts();
    if posts.is_empty() {
        let message = if view.is_filtered() { "No posts match this search." } else { "No posts." };
        writeln!(out, "  {message}")?;
        return Ok(());
    }

    for post in posts {
        write_post(out, post)?;
    }
    Ok(())
}

/// Every week of `view`, leaving it on the last week.
pub fn write_all_weeks(out: &mut dyn Write, view: &mut CalendarView) -> io::Result<()> {
    write_week(out, view)?;
    while view.next_week() {
        writeln!(out)?;
        write_week(out, view)?;
    }
    Ok(())
}

fn write_post(out: &mut dyn Write, post: &PostSlot) -> io::Result<()> {
    writeln!(out, "- {}, {} at {}", post.day, post.date, post.time)?;
    writeln!(out, "    Image:   {}", post.image_prompt)?;
    writeln!(out, "    Caption: {}", post.caption)
}

pub fn write_calendar_list(out: &mut dyn Write, calendars: &[CalendarCollection]) -> io::Result<()> {
    if calendars.is_empty() {
        return writeln!(out, "No calendars saved yet.");
    }
    for calendar in calendars {
        writeln!(
            out,
            "{}  {}  ({} posts, created {})",
            calendar.id,
            calendar.name,
            calendar.posts.len(),
            calendar.created_at.format("%Y-%m-%d %H:%M")
        )?;
    }
    Ok(())
}

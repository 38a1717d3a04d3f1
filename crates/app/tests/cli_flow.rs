//! Command handlers against a temporary SQLite database.

use clap::Parser;
use contentplan_app::{dispatch, AppContext, Cli};
use contentplan_domain::Config;
use tempfile::TempDir;

struct Harness {
    ctx: AppContext,
    _dir: TempDir,
}

impl Harness {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let mut config = Config::default();
        config.database.path = dir.path().join("cli.db").to_string_lossy().into_owned();
        config.prompts.enabled = false;
        let ctx = AppContext::new(config).expect("context should build");
        Self { ctx, _dir: dir }
    }

    async fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("contentplan").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        dispatch(&self.ctx, &cli.owner, cli.command, &mut out).await?;
        Ok(String::from_utf8(out)?)
    }
}

fn saved_id(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.strip_prefix("Saved \"").and_then(|rest| rest.split(" as ").nth(1)))
        .expect("generate output should name the saved id")
        .to_string()
}

#[tokio::test]
async fn generate_save_list_show_delete() {
    let h = Harness::new();

    let output = h
        .run(&[
            "--owner", "ana", "generate", "-c", "food", "-d", "Fresh pasta at home", "-a",
            "Home cooks", "-f", "daily", "--name", "Pasta month", "--seed", "3",
        ])
        .await
        .unwrap();
    assert!(output.starts_with("Categories: Food & Cooking\n"));
    assert!(output.contains("Week 1 of 4"));
    assert!(output.contains("Week 4 of 4"));
    let id = saved_id(&output);

    let listed = h.run(&["--owner", "ana", "list"]).await.unwrap();
    assert!(listed.contains(&id));
    assert!(listed.contains("Pasta month"));
    assert!(listed.contains("(28 posts"));

    let shown = h.run(&["--owner", "ana", "show", &id, "--week", "2"]).await.unwrap();
    assert!(shown.starts_with("Pasta month\nWeek 2 of 4\n"));

    let searched = h.run(&["--owner", "ana", "show", &id, "--search", "PASTA"]).await.unwrap();
    assert!(searched.contains("Search \"PASTA\": 28 matching post(s)"));

    let deleted = h.run(&["--owner", "ana", "delete", &id]).await.unwrap();
    assert_eq!(deleted, format!("Deleted {id}\n"));

    let listed = h.run(&["--owner", "ana", "list"]).await.unwrap();
    assert_eq!(listed, "No calendars saved yet.\n");
}

#[tokio::test]
async fn generate_without_name_does_not_save() {
    let h = Harness::new();
    let output = h
        .run(&[
            "--owner", "ben", "generate", "-c", "tech,Gardening", "-d", "Gadget reviews", "-a",
            "Geeks",
        ])
        .await
        .unwrap();
    assert!(output.contains("Categories: Technology, gardening"));
    assert!(output.contains("Week 1 of 1"));
    assert!(!output.contains("Saved"));

    let listed = h.run(&["--owner", "ben", "list"]).await.unwrap();
    assert_eq!(listed, "No calendars saved yet.\n");
}

#[tokio::test]
async fn unknown_cadence_uses_fallback_spacing() {
    let h = Harness::new();
    let output = h
        .run(&[
            "generate", "-c", "travel", "-d", "Weekend getaways", "-a", "Couples", "-f",
            "fortnightly",
        ])
        .await
        .unwrap();
    assert!(output.contains("unknown cadence \"fortnightly\""));
    assert!(output.contains("Week 2 of 2"));
}

#[tokio::test]
async fn show_rejects_out_of_range_week_and_foreign_ids() {
    let h = Harness::new();
    let output = h
        .run(&[
            "--owner", "ana", "generate", "-c", "food", "-d", "Soups", "-a", "Students", "--name",
            "Soup",
        ])
        .await
        .unwrap();
    let id = saved_id(&output);

    assert!(h.run(&["--owner", "ana", "show", &id, "--week", "3"]).await.is_err());
    assert!(h.run(&["--owner", "someone-else", "show", &id]).await.is_err());
    assert!(h.run(&["--owner", "someone-else", "delete", &id]).await.is_err());
}

#[tokio::test]
async fn blank_description_is_rejected() {
    let h = Harness::new();
    let err = h
        .run(&["generate", "-c", "food", "-d", "  ", "-a", "Students"])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("describe your content style"));
}

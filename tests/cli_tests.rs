//! Runs the `clans` binary against a temporary SQLite database.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

const MIGRATION_NAME: &str = "m2025_01_20_000001_create_clans";

const LEGACY_CONFIG: &str = r##"{
    "#2PP": { "name": "Alpha Clan", "prefix": "AC", "recruitment": true },
    "#9QQ": { "name": "Beta Clan", "checks": { "hero_sum": { "min_value": 250 } } }
}"##;

/// Builds a `clans` invocation isolated from the caller's env files and
/// variables.
fn clans(dir: &Path) -> assert_cmd::Command {
    let database_url = format!("sqlite://{}?mode=rwc", dir.join("clans.db").display());

    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_clans"));
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CLANS_PROFILE")
        .env("CLANS_DATABASE_URL", database_url)
        .env("CLANS_LOG_LEVEL", "error");
    cmd
}

fn run(dir: &Path, args: &[&str]) -> String {
    let assert = clans(dir).args(args).assert().success();
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

#[test]
fn migrate_is_idempotent_and_reported_by_status() {
    let dir = TempDir::new().unwrap();

    run(dir.path(), &["migrate"]);
    run(dir.path(), &["migrate"]);

    let status = run(dir.path(), &["status"]);
    assert_eq!(
        status.lines().filter(|line| *line == MIGRATION_NAME).count(),
        1,
        "status output: {status}"
    );
}

#[test]
fn default_command_applies_migrations() {
    let dir = TempDir::new().unwrap();

    run(dir.path(), &[]);

    let status = run(dir.path(), &["status"]);
    assert!(status.contains(MIGRATION_NAME), "status output: {status}");
}

#[test]
fn import_prints_report_and_skips_existing_on_rerun() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("clans_config.json");
    fs::write(&config, LEGACY_CONFIG).unwrap();
    let config = config.to_string_lossy().into_owned();

    let first = run(dir.path(), &["import", &config]);
    assert!(
        first.contains("Imported 2 clan(s), skipped 0 existing."),
        "import output: {first}"
    );

    let second = run(dir.path(), &["import", &config]);
    assert!(
        second.contains("Imported 0 clan(s), skipped 2 existing."),
        "import output: {second}"
    );
}

#[test]
fn import_of_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    clans(dir.path())
        .args(["import", "does-not-exist.json"])
        .assert()
        .failure();
}

#[test]
fn rollback_clears_migration_history() {
    let dir = TempDir::new().unwrap();

    run(dir.path(), &["migrate"]);
    run(dir.path(), &["rollback"]);

    let status = run(dir.path(), &["status"]);
    assert!(
        status.contains("No migrations applied."),
        "status output: {status}"
    );
    assert!(!status.contains(MIGRATION_NAME));
}

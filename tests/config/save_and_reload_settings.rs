use crate::common::command::{repository_dir, run_gitpush_command, stdout_of};
use assert_fs::TempDir;
use assert_fs::prelude::PathChild;
use gitpush::{Settings, SettingsStore};
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn save_and_reload_settings(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let settings_file = repository_dir.child("settings").child("gitpush.json");
    let settings_path = settings_file.path().to_string_lossy().to_string();

    run_gitpush_command(
        repository_dir.path(),
        &[
            "--config",
            &settings_path,
            "config",
            "save",
            "--repo",
            "/r",
            "--branch",
            "dev",
            "--no-push",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("Settings saved to"));

    let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&settings_file)?)?;
    assert_eq!(
        saved,
        serde_json::json!({
            "repo_path": "/r",
            "default_branch": "dev",
            "auto_push": false
        })
    );

    let store = SettingsStore::new(settings_file.to_path_buf().into_boxed_path());
    assert_eq!(
        store.load(),
        Settings {
            repo_path: "/r".into(),
            default_branch: "dev".into(),
            auto_push: false,
        }
    );

    let output = run_gitpush_command(
        repository_dir.path(),
        &["--config", &settings_path, "config", "show"],
    )
    .assert()
    .success();
    assert!(
        stdout_of(&output).ends_with("repo_path: /r\ndefault_branch: dev\nauto_push: false\n")
    );

    Ok(())
}

#[rstest]
fn save_keeps_values_not_given(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let settings_file = repository_dir.child("gitpush.json");
    let settings_path = settings_file.path().to_string_lossy().to_string();

    run_gitpush_command(
        repository_dir.path(),
        &["--config", &settings_path, "config", "save", "--branch", "dev"],
    )
    .assert()
    .success();
    run_gitpush_command(
        repository_dir.path(),
        &["--config", &settings_path, "config", "save", "--no-push"],
    )
    .assert()
    .success();

    let store = SettingsStore::new(settings_file.to_path_buf().into_boxed_path());
    assert_eq!(
        store.load(),
        Settings {
            repo_path: ".".into(),
            default_branch: "dev".into(),
            auto_push: false,
        }
    );

    Ok(())
}

#[rstest]
fn settings_path_from_environment(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings_file = repository_dir.child("from-env.json");

    run_gitpush_command(repository_dir.path(), &["config", "save", "--branch", "trunk"])
        .env("GITPUSH_CONFIG", settings_file.path())
        .assert()
        .success();

    let store = SettingsStore::new(settings_file.to_path_buf().into_boxed_path());
    assert_eq!(store.load().default_branch, "trunk");

    Ok(())
}

use crate::common::command::{init_repository_dir, run_git_command, run_gitpush_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_branch_and_recent_commits(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let output = run_gitpush_command(repository_dir.path(), &["status"])
        .assert()
        .success();
    let stdout = stdout_of(&output);

    assert!(stdout.starts_with("Repository: "));
    assert!(stdout.contains("Branch: main\n"));
    assert!(stdout.contains("nothing to commit, working tree clean"));
    assert!(stdout.contains("Recent commits:\n"));
    assert!(stdout.trim_end().ends_with("Initial commit"));

    Ok(())
}

#[rstest]
fn limit_listed_commits(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    for i in 0..6 {
        run_git_command(
            repository_dir.path(),
            &["commit", "--allow-empty", "-m", &format!("Empty commit {i}")],
        )
        .assert()
        .success();
    }

    let default_output = run_gitpush_command(repository_dir.path(), &["status"])
        .assert()
        .success();
    let default_stdout = stdout_of(&default_output);
    let listed = default_stdout
        .split("Recent commits:\n")
        .nth(1)
        .unwrap_or_default()
        .lines()
        .count();
    assert_eq!(listed, 5);
    assert!(!default_stdout.contains("Initial commit"));

    let short_output = run_gitpush_command(repository_dir.path(), &["status", "--log", "2"])
        .assert()
        .success();
    let short_stdout = stdout_of(&short_output);
    assert!(short_stdout.contains("Empty commit 5"));
    assert!(short_stdout.contains("Empty commit 4"));
    assert!(!short_stdout.contains("Empty commit 3"));

    Ok(())
}

#[rstest]
fn status_of_repository_given_by_flag(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let elsewhere = TempDir::new()?;
    let repo = init_repository_dir.path().to_string_lossy().to_string();

    let output = run_gitpush_command(elsewhere.path(), &["status", "--repo", &repo])
        .assert()
        .success();

    assert!(stdout_of(&output).contains("Branch: main"));

    Ok(())
}

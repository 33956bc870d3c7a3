use crate::common::command::{head_commit, init_repository_dir, run_gitpush_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn report_no_pending_changes(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head_before = head_commit(repository_dir.path());

    run_gitpush_command(repository_dir.path(), &["push", "-m", "Nothing here"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes to commit."))
        .stdout(predicate::str::contains("Pending changes").not());

    assert_eq!(head_commit(repository_dir.path()), head_before);

    Ok(())
}

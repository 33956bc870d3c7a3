use crate::common::command::{
    git_output, head_commit, init_repository_dir, modify_tracked_file, run_gitpush_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::empty_flag(&["push", "--no-push", "-m", ""], "")]
#[case::blank_flag(&["push", "--no-push", "-m", "   "], "")]
#[case::end_of_input(&["push", "--no-push"], "")]
fn cancel_on_empty_or_missing_message(
    init_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] stdin: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    modify_tracked_file(repository_dir.path());
    let head_before = head_commit(repository_dir.path());

    run_gitpush_command(repository_dir.path(), args)
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains("Commit cancelled, nothing was changed."));

    assert_eq!(head_commit(repository_dir.path()), head_before);
    // the edit is still unstaged
    assert_eq!(
        git_output(repository_dir.path(), &["status", "--porcelain"]),
        "M 1.txt"
    );

    Ok(())
}

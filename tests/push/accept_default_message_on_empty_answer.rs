use crate::common::command::{
    head_subject, init_repository_dir, modify_tracked_file, run_gitpush_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn accept_default_message_on_empty_answer(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    modify_tracked_file(repository_dir.path());

    run_gitpush_command(repository_dir.path(), &["push", "--no-push"])
        .write_stdin("\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Commit message [Update "));

    let subject = head_subject(repository_dir.path());
    let default_message = regex::Regex::new(r"^Update \d{4}-\d{2}-\d{2} \d{2}-\d{2}-\d{2}$")?;
    assert!(default_message.is_match(&subject), "unexpected subject: {subject}");

    Ok(())
}

#[rstest]
fn use_typed_message(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    modify_tracked_file(repository_dir.path());

    run_gitpush_command(repository_dir.path(), &["push", "--no-push"])
        .write_stdin("Edit the first file\n")
        .assert()
        .success();

    assert_eq!(head_subject(repository_dir.path()), "Edit the first file");

    Ok(())
}

use crate::common::command::{repository_dir, run_gitpush_command, stdout_of};
use crate::common::file::write_generated_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn describe_plain_directory(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_generated_file(repository_dir.path());

    let output = run_gitpush_command(repository_dir.path(), &["status"])
        .assert()
        .success();

    assert!(stdout_of(&output).starts_with("Error: not a git repository\n"));
    assert!(!repository_dir.path().join(".git").exists());

    Ok(())
}

use crate::common::command::{
    init_repository_dir, modify_tracked_file, run_gitpush_command, stdout_of,
};
use crate::common::file::write_generated_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_pending_changes_in_status(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    modify_tracked_file(repository_dir.path());
    let new_file = write_generated_file(repository_dir.path());
    let new_file_name = new_file
        .path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    let output = run_gitpush_command(repository_dir.path(), &["status"])
        .assert()
        .success();
    let stdout = stdout_of(&output);

    assert!(stdout.contains("modified:   1.txt"));
    assert!(stdout.contains("Untracked files:"));
    assert!(stdout.contains(&new_file_name));

    Ok(())
}

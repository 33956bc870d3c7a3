use crate::areas::repository::Repository;
use crate::areas::runner::CommandRunner;
use crate::artifacts::command::GitCommand;
use crate::artifacts::core::error::{GitPushError, PathProblem};
use crate::artifacts::status::{PendingChange, porcelain_has_changes};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Commits listed by the `status` command
pub const STATUS_LOG_DEPTH: usize = 5;

const DETACHED_BRANCH_LABEL: &str = "(detached HEAD)";

/// True iff `path` is a directory containing git metadata.
///
/// `.git` may be a directory or, for worktrees and submodules, a file.
pub fn is_repository(path: &Path) -> bool {
    path.is_dir() && path.join(".git").exists()
}

pub fn validate_repository(path: &Path) -> Result<(), GitPushError> {
    let reason = if !path.exists() {
        PathProblem::Missing
    } else if !is_repository(path) {
        PathProblem::NotARepository
    } else {
        return Ok(());
    };

    Err(GitPushError::PathInvalid {
        path: path.to_path_buf(),
        reason,
    })
}

impl<R: CommandRunner> Repository<R> {
    pub fn is_repository(&self) -> bool {
        is_repository(self.path())
    }

    pub fn validate(&self) -> Result<(), GitPushError> {
        validate_repository(self.path())
    }

    /// Name of the checked out branch, empty when detached or when git failed.
    pub async fn current_branch(&self) -> String {
        match self.runner().run(self.path(), &GitCommand::CurrentBranch).await {
            Ok(result) if result.success() => result
                .stdout
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string(),
            Ok(result) => {
                debug!(details = %result.details(), "branch query failed");
                String::new()
            }
            Err(err) => {
                debug!(error = %err, "branch query failed");
                String::new()
            }
        }
    }

    pub async fn porcelain_status(&self) -> anyhow::Result<String> {
        let result = self
            .runner()
            .run_checked(self.path(), &GitCommand::PorcelainStatus)
            .await?;
        Ok(result.stdout)
    }

    pub async fn has_pending_changes(&self) -> anyhow::Result<bool> {
        Ok(porcelain_has_changes(&self.porcelain_status().await?))
    }

    pub async fn pending_changes(&self) -> anyhow::Result<Vec<PendingChange>> {
        Ok(PendingChange::parse_all(&self.porcelain_status().await?))
    }

    /// Branch, full status and the last `log_depth` commits as display text.
    ///
    /// Failures are described in the returned text rather than raised.
    pub async fn describe_status(&self, log_depth: usize) -> String {
        if let Err(GitPushError::PathInvalid { path, reason }) = self.validate() {
            return format!("Error: {}\n{}\n", reason, path.display());
        }

        let status = match self.runner().run(self.path(), &GitCommand::Status).await {
            Ok(result) if result.success() => result.stdout,
            Ok(result) => return format!("git status failed:\n{}\n", result.details()),
            Err(err) => return format!("git status failed:\n{err:#}\n"),
        };

        let branch = self.current_branch().await;
        let branch = if branch.is_empty() {
            DETACHED_BRANCH_LABEL
        } else {
            branch.as_str()
        };

        let mut sections = vec![
            format!(
                "Repository: {}\nBranch: {}",
                self.path().display(),
                branch
            ),
            status.trim_end().to_string(),
        ];

        let log = self
            .runner()
            .run(self.path(), &GitCommand::Log { depth: log_depth })
            .await;
        match log {
            Ok(result) if result.success() => {
                if !result.stdout.trim().is_empty() {
                    sections.push(format!("Recent commits:\n{}", result.stdout.trim_end()));
                }
            }
            Ok(result) => {
                sections.push(format!("Could not read commit history: {}", result.details()))
            }
            Err(err) => sections.push(format!("Could not read commit history: {err:#}")),
        }

        let mut report = sections.join("\n\n");
        report.push('\n');
        report
    }

    /// Writes `describe_status` to the repository writer.
    pub async fn status(&self, log_depth: usize) -> anyhow::Result<()> {
        let report = self.describe_status(log_depth).await;

        let mut writer = self.writer();
        write!(writer, "{report}")?;
        writer.flush()?;

        Ok(())
    }
}

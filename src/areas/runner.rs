//! External command execution
//!
//! Every invocation receives the repository directory explicitly; the
//! process working directory is never changed.

use crate::artifacts::command::GitCommand;
use crate::artifacts::core::error::GitPushError;
use derive_new::new;
use std::future::Future;
use std::path::Path;
use tracing::{debug, warn};

/// Overrides the git executable (defaults to `git` on `PATH`)
pub const GIT_EXECUTABLE_ENV: &str = "GITPUSH_GIT";

const DEFAULT_GIT_EXECUTABLE: &str = "git";

/// Exit status and captured output of one invocation
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommandResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Text explaining a failure: stderr, else stdout, else a placeholder.
    pub fn details(&self) -> String {
        [&self.stderr, &self.stdout]
            .into_iter()
            .map(|text| text.trim())
            .find(|text| !text.is_empty())
            .unwrap_or("no details")
            .to_string()
    }
}

pub trait CommandRunner {
    /// Runs `command` inside `dir` and returns whatever it produced.
    ///
    /// Only fails when the executable cannot be started.
    fn run(
        &self,
        dir: &Path,
        command: &GitCommand,
    ) -> impl Future<Output = anyhow::Result<CommandResult>>;

    /// Like `run`, but a non-zero exit becomes `GitPushError::ExternalCommandFailed`.
    fn run_checked(
        &self,
        dir: &Path,
        command: &GitCommand,
    ) -> impl Future<Output = anyhow::Result<CommandResult>> {
        async move {
            let result = self.run(dir, command).await?;

            if !result.success() {
                warn!(
                    %command,
                    exit_code = result.exit_code,
                    stderr = result.stderr.trim(),
                    "git command failed"
                );
                return Err(GitPushError::ExternalCommandFailed {
                    command: command.to_string(),
                    exit_code: result.exit_code,
                    details: result.details(),
                }
                .into());
            }

            Ok(result)
        }
    }
}

/// Runs the real git executable
#[derive(Debug, Clone)]
pub struct GitRunner {
    executable: String,
}

impl GitRunner {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn from_env() -> Self {
        let executable = std::env::var(GIT_EXECUTABLE_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GIT_EXECUTABLE.to_string());
        Self::new(executable)
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::from_env()
    }
}

impl CommandRunner for GitRunner {
    async fn run(&self, dir: &Path, command: &GitCommand) -> anyhow::Result<CommandResult> {
        debug!(%command, dir = %dir.display(), "running git");

        let output = tokio::process::Command::new(&self.executable)
            .args(command.args())
            .current_dir(dir)
            .output()
            .await
            .map_err(|source| GitPushError::Spawn {
                command: command.to_string(),
                source,
            })?;

        // killed by a signal
        let exit_code = output.status.code().unwrap_or(-1);
        let result = CommandResult::new(
            exit_code,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        );
        debug!(label = command.label(), exit_code, "git finished");

        Ok(result)
    }
}

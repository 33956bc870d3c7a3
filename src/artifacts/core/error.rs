use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced to the user by the workflow and the settings store.
///
/// Plumbing code returns `anyhow::Result`; callers that need to branch on the
/// failure kind recover it with `downcast_ref::<GitPushError>()`.
#[derive(Debug, Error)]
pub enum GitPushError {
    #[error("{reason}: {}", path.display())]
    PathInvalid { path: PathBuf, reason: PathProblem },

    #[error("git operation failed\ncommand: {command}\nexit code: {exit_code}\nerror: {details}")]
    ExternalCommandFailed {
        command: String,
        exit_code: i32,
        details: String,
    },

    #[error("failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot access settings file {}", path.display())]
    ConfigIO {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file {} is not valid JSON", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot determine which branch to push: no branch configured and HEAD is detached")]
    BranchUnresolved,

    #[error("another commit is already in progress for this repository")]
    WorkflowBusy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathProblem {
    Missing,
    NotARepository,
}

impl std::fmt::Display for PathProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathProblem::Missing => write!(f, "repository path does not exist"),
            PathProblem::NotARepository => write!(f, "not a git repository"),
        }
    }
}

//! The git invocations gitpush issues
//!
//! Only these seven argument vectors are ever passed to the external
//! executable. Each knows its arguments, how to show itself to the user and
//! whether it changes the repository.

use crate::artifacts::branch::BranchName;

/// Remote the push stage targets
pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    /// `git status`
    Status,
    /// `git status --porcelain`
    PorcelainStatus,
    /// `git branch --show-current`
    CurrentBranch,
    /// `git log --oneline -N`
    Log { depth: usize },
    /// `git add .`
    AddAll,
    /// `git commit -m <message>`
    Commit { message: String },
    /// `git push <remote> <branch>`
    Push { remote: String, branch: BranchName },
}

impl GitCommand {
    pub fn push_to_origin(branch: BranchName) -> Self {
        GitCommand::Push {
            remote: DEFAULT_REMOTE.to_string(),
            branch,
        }
    }

    pub fn args(&self) -> Vec<String> {
        match self {
            GitCommand::Status => vec!["status".into()],
            GitCommand::PorcelainStatus => vec!["status".into(), "--porcelain".into()],
            GitCommand::CurrentBranch => vec!["branch".into(), "--show-current".into()],
            GitCommand::Log { depth } => {
                vec!["log".into(), "--oneline".into(), format!("-{depth}")]
            }
            GitCommand::AddAll => vec!["add".into(), ".".into()],
            GitCommand::Commit { message } => vec!["commit".into(), "-m".into(), message.clone()],
            GitCommand::Push { remote, branch } => {
                vec!["push".into(), remote.clone(), branch.to_string()]
            }
        }
    }

    /// Short stable name of the subcommand, used in logs
    pub fn label(&self) -> &'static str {
        match self {
            GitCommand::Status => "status",
            GitCommand::PorcelainStatus => "porcelain-status",
            GitCommand::CurrentBranch => "current-branch",
            GitCommand::Log { .. } => "log",
            GitCommand::AddAll => "add",
            GitCommand::Commit { .. } => "commit",
            GitCommand::Push { .. } => "push",
        }
    }

    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            GitCommand::AddAll | GitCommand::Commit { .. } | GitCommand::Push { .. }
        )
    }
}

impl std::fmt::Display for GitCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "git")?;
        for arg in self.args() {
            if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
                write!(f, " \"{}\"", arg.replace('"', "\\\""))?;
            } else {
                write!(f, " {arg}")?;
            }
        }

        Ok(())
    }
}

//! Commit/push workflow states and outcomes
//!
//! The workflow is linear with early exits:
//!
//! ```text
//! Idle -> ValidatingRepository -> CheckingChanges -> PromptingMessage
//!      -> Staging -> Committing -> [Pushing] -> done
//! ```
//!
//! Clean exits (nothing to commit, cancelled prompt) are outcomes; failures
//! are `GitPushError`s.

pub mod prompt;

use crate::artifacts::branch::BranchName;
use crate::artifacts::command::DEFAULT_REMOTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Idle,
    ValidatingRepository,
    CheckingChanges,
    PromptingMessage,
    Staging,
    Committing,
    Pushing,
}

impl std::fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WorkflowStage::Idle => "idle",
            WorkflowStage::ValidatingRepository => "validating repository",
            WorkflowStage::CheckingChanges => "checking changes",
            WorkflowStage::PromptingMessage => "prompting for message",
            WorkflowStage::Staging => "staging",
            WorkflowStage::Committing => "committing",
            WorkflowStage::Pushing => "pushing",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// The working tree was clean; nothing ran after the status check.
    NoPendingChanges,
    /// The message prompt was cancelled or left empty; nothing was changed.
    Cancelled,
    /// Changes were committed but auto-push is off.
    Committed,
    /// Changes were committed and pushed.
    Pushed { branch: BranchName },
}

impl WorkflowOutcome {
    /// Whether the repository was changed by the run
    pub fn is_committed(&self) -> bool {
        matches!(
            self,
            WorkflowOutcome::Committed | WorkflowOutcome::Pushed { .. }
        )
    }
}

impl std::fmt::Display for WorkflowOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowOutcome::NoPendingChanges => write!(f, "No changes to commit."),
            WorkflowOutcome::Cancelled => write!(f, "Commit cancelled, nothing was changed."),
            WorkflowOutcome::Committed => {
                write!(f, "Changes committed but not pushed. Push them manually.")
            }
            WorkflowOutcome::Pushed { branch } => {
                write!(f, "Changes pushed to {DEFAULT_REMOTE}/{branch}.")
            }
        }
    }
}

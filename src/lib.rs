//! gitpush stages, commits and pushes a repository through the system `git`.
//!
//! - `areas`: the repository handle, the git runner and the settings file
//! - `artifacts`: commands, parsed status, workflow states and errors
//! - `commands`: status inspection, the commit/push workflow, settings

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::repository::Repository;
pub use areas::runner::{CommandResult, CommandRunner, GitRunner};
pub use areas::settings::{Settings, SettingsStore};
pub use artifacts::core::error::GitPushError;
pub use artifacts::workflow::prompt::{FixedPrompt, MessagePrompt, TerminalPrompt};
pub use artifacts::workflow::{WorkflowOutcome, WorkflowStage};
pub use commands::porcelain::commit::PushOptions;

use crate::areas::repository::Repository;
use crate::areas::runner::CommandRunner;
use crate::artifacts::branch::BranchName;
use crate::artifacts::command::GitCommand;
use crate::artifacts::core::error::GitPushError;
use crate::artifacts::status::{ChangeSummary, PendingChange, porcelain_has_changes};
use crate::artifacts::workflow::prompt::{MessagePrompt, default_message};
use crate::artifacts::workflow::{WorkflowOutcome, WorkflowStage};
use derive_new::new;
use std::io::Write;
use tracing::info;

/// Commits listed when the status is refreshed after a commit
pub const REFRESH_LOG_DEPTH: usize = 3;

#[derive(Debug, Clone, new)]
pub struct PushOptions {
    /// Branch pushed to origin; empty means the checked out branch.
    pub branch: String,
    pub auto_push: bool,
}

impl<R: CommandRunner> Repository<R> {
    /// Stages everything, commits with a prompted message and optionally pushes.
    ///
    /// Nothing is changed unless the path is a repository with pending changes
    /// and the prompt returns a non-blank message. A failing stage stops the
    /// run; earlier stages are not undone, so a failed push leaves the commit
    /// in place.
    pub async fn commit_and_push<P: MessagePrompt>(
        &self,
        prompt: &mut P,
        opts: &PushOptions,
    ) -> anyhow::Result<WorkflowOutcome> {
        let _guard = self
            .workflow_lock()
            .try_lock()
            .map_err(|_| GitPushError::WorkflowBusy)?;

        self.enter(WorkflowStage::ValidatingRepository);
        self.validate()?;

        self.enter(WorkflowStage::CheckingChanges);
        let porcelain = self.porcelain_status().await?;
        if !porcelain_has_changes(&porcelain) {
            info!("working tree clean, nothing to commit");
            return Ok(WorkflowOutcome::NoPendingChanges);
        }

        // resolved before the prompt and before any mutation
        let push_branch = if opts.auto_push {
            Some(self.resolve_push_branch(&opts.branch).await?)
        } else {
            None
        };
        self.show_pending_changes(&PendingChange::parse_all(&porcelain))?;

        self.enter(WorkflowStage::PromptingMessage);
        let message = match prompt.ask(&default_message())? {
            Some(message) if !message.trim().is_empty() => message.trim().to_string(),
            _ => {
                info!("commit message empty or cancelled");
                return Ok(WorkflowOutcome::Cancelled);
            }
        };

        self.enter(WorkflowStage::Staging);
        self.runner()
            .run_checked(self.path(), &GitCommand::AddAll)
            .await?;

        self.enter(WorkflowStage::Committing);
        let commit = self
            .runner()
            .run_checked(self.path(), &GitCommand::Commit { message })
            .await?;
        if let Some(summary) = commit.stdout.lines().next() {
            writeln!(self.writer(), "{summary}")?;
        }

        let outcome = match push_branch {
            Some(branch) => {
                self.enter(WorkflowStage::Pushing);
                self.runner()
                    .run_checked(self.path(), &GitCommand::push_to_origin(branch.clone()))
                    .await?;
                WorkflowOutcome::Pushed { branch }
            }
            None => WorkflowOutcome::Committed,
        };
        info!(%outcome, "workflow finished");

        writeln!(self.writer())?;
        self.status(REFRESH_LOG_DEPTH).await?;

        Ok(outcome)
    }

    async fn resolve_push_branch(&self, configured: &str) -> anyhow::Result<BranchName> {
        let configured = configured.trim();
        if !configured.is_empty() {
            return BranchName::try_parse(configured);
        }

        let current = self.current_branch().await;
        if current.is_empty() {
            return Err(GitPushError::BranchUnresolved.into());
        }
        BranchName::try_parse(current)
    }

    fn show_pending_changes(&self, changes: &[PendingChange]) -> anyhow::Result<()> {
        let mut writer = self.writer();
        writeln!(writer, "Pending changes ({}):", ChangeSummary::of(changes))?;
        for change in changes {
            writeln!(writer, "{change}")?;
        }
        writer.flush()?;

        Ok(())
    }

    fn enter(&self, stage: WorkflowStage) {
        info!(%stage, path = %self.path().display(), "workflow stage");
    }
}

use crate::areas::runner::{CommandRunner, GitRunner};
use std::cell::{RefCell, RefMut};
use std::path::Path;
use tokio::sync::Mutex;

/// A working tree gitpush operates on
///
/// Holds everything an operation needs: the repository path (passed as the
/// working directory to every git invocation), the runner that executes git
/// and the writer rendered text goes to. Inspection lives in
/// `commands::porcelain::status`, the commit/push workflow in
/// `commands::porcelain::commit`.
pub struct Repository<R: CommandRunner = GitRunner> {
    path: Box<Path>,
    runner: R,
    writer: RefCell<Box<dyn std::io::Write>>,
    workflow_lock: Mutex<()>,
}

impl<R: CommandRunner> Repository<R> {
    /// The path is not checked here; validation is part of each operation.
    pub fn new(path: impl AsRef<Path>, runner: R, writer: Box<dyn std::io::Write>) -> Self {
        Repository {
            path: path.as_ref().to_path_buf().into_boxed_path(),
            runner,
            writer: RefCell::new(writer),
            workflow_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Held for the whole commit/push run; see `commit_and_push`.
    pub fn workflow_lock(&self) -> &Mutex<()> {
        &self.workflow_lock
    }

    pub fn is_workflow_running(&self) -> bool {
        self.workflow_lock.try_lock().is_err()
    }
}

//! Commit message entry
//!
//! The workflow suspends on a `MessagePrompt` and resumes with either a
//! message or `None` for cancellation. Whatever front end supplies the
//! message only has to implement `ask`.

use derive_new::new;
use std::io::{BufRead, Write};

pub trait MessagePrompt {
    /// Blocks until the user confirms a message (`Some`) or cancels (`None`).
    ///
    /// `default_message` is offered as the pre-filled answer.
    fn ask(&mut self, default_message: &str) -> anyhow::Result<Option<String>>;
}

/// Message offered when the user has nothing specific to say
pub fn default_message() -> String {
    format!(
        "Update {}",
        chrono::Local::now().format("%Y-%m-%d %H-%M-%S")
    )
}

/// Answers with a message decided up front (e.g. from `--message`)
#[derive(Debug, Clone, new)]
pub struct FixedPrompt {
    message: Option<String>,
}

impl MessagePrompt for FixedPrompt {
    fn ask(&mut self, _default_message: &str) -> anyhow::Result<Option<String>> {
        Ok(self.message.clone())
    }
}

/// Line-based prompt: an empty answer takes the default, end of input cancels.
#[derive(new)]
pub struct TerminalPrompt<I: BufRead, W: Write> {
    input: I,
    output: W,
}

impl TerminalPrompt<std::io::StdinLock<'static>, std::io::Stderr> {
    pub fn stdio() -> Self {
        TerminalPrompt::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<I: BufRead, W: Write> MessagePrompt for TerminalPrompt<I, W> {
    fn ask(&mut self, default_message: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "Commit message [{default_message}]: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\n', '\r']);
        if answer.is_empty() {
            Ok(Some(default_message.to_string()))
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}

//! Core utilities and shared types
//!
//! - `error`: the error taxonomy reported to the user
//! - `PagerWriter` / `Output`: where rendered text goes (pager or stdout)

pub mod error;

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables the pager when set to any value
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Adapts the minus pager to `std::io::Write`
///
/// The repository renders into a `Box<dyn Write>`; wrapping the pager lets the
/// status text be paged without the renderer knowing about it.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Destination for long, read-only output such as the status report
pub enum Output {
    Paged(Pager),
    Direct,
}

impl Output {
    /// Page only when stdout is a terminal and paging was not disabled.
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() && std::env::var_os(NO_PAGER_ENV).is_none() {
            Output::Paged(Pager::new())
        } else {
            Output::Direct
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Paged(pager) => Box::new(PagerWriter::new(pager.clone())),
            Output::Direct => Box::new(io::stdout()),
        }
    }

    /// Hands the buffered text to the pager; a no-op for direct output.
    pub fn finish(self) -> anyhow::Result<()> {
        if let Output::Paged(pager) = self {
            minus::page_all(pager)?;
        }

        Ok(())
    }
}

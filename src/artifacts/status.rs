//! Porcelain status parsing
//!
//! `git status --porcelain` prints one `XY path` line per changed file, where
//! `X` is the index (staged) state and `Y` the workspace state. A clean tree
//! prints nothing at all, which is the only fact the workflow relies on; the
//! parsed entries are used for the summary shown before prompting.

use colored::Colorize;
use std::sync::LazyLock;

const LABEL_WIDTH: usize = 14;

static PORCELAIN_LINE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(?<index>.)(?<workspace>.) (?<path>.+)$")
        .unwrap_or_else(|e| panic!("invalid porcelain regex: {e}"))
});

const CHANGE_LABELS: phf::Map<char, &'static str> = phf::phf_map! {
    'M' => "modified:",
    'A' => "new file:",
    'D' => "deleted:",
    'R' => "renamed:",
    'C' => "copied:",
    'T' => "typechange:",
    'U' => "unmerged:",
    '?' => "untracked:",
};

/// True iff the porcelain output reports anything at all.
pub fn porcelain_has_changes(porcelain: &str) -> bool {
    !porcelain.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChange {
    pub index: char,
    pub workspace: char,
    pub path: String,
}

impl PendingChange {
    pub fn parse(line: &str) -> Option<Self> {
        let captures = PORCELAIN_LINE.captures(line)?;
        let index = captures["index"].chars().next()?;
        let workspace = captures["workspace"].chars().next()?;

        Some(PendingChange {
            index,
            workspace,
            path: captures["path"].to_string(),
        })
    }

    /// Parses every recognizable line of a porcelain report.
    pub fn parse_all(porcelain: &str) -> Vec<Self> {
        porcelain
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(Self::parse)
            .collect()
    }

    pub fn is_untracked(&self) -> bool {
        self.index == '?' && self.workspace == '?'
    }

    pub fn is_staged(&self) -> bool {
        !self.is_untracked() && !matches!(self.index, ' ' | '!')
    }

    pub fn is_unstaged(&self) -> bool {
        !self.is_untracked() && !matches!(self.workspace, ' ' | '!')
    }

    fn label(&self) -> &'static str {
        let code = if self.is_staged() {
            self.index
        } else {
            self.workspace
        };
        CHANGE_LABELS.get(&code).copied().unwrap_or("changed:")
    }
}

impl std::fmt::Display for PendingChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = format!("{:<width$}", self.label(), width = LABEL_WIDTH);
        let label = if self.is_staged() {
            label.green()
        } else {
            label.red()
        };
        write!(f, "    {}{}", label, self.path)
    }
}

/// Counts of pending changes by area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub staged: usize,
    pub unstaged: usize,
    pub untracked: usize,
}

impl ChangeSummary {
    pub fn of(changes: &[PendingChange]) -> Self {
        changes.iter().fold(Self::default(), |mut summary, change| {
            if change.is_untracked() {
                summary.untracked += 1;
            }
            if change.is_staged() {
                summary.staged += 1;
            }
            if change.is_unstaged() {
                summary.unstaged += 1;
            }
            summary
        })
    }
}

impl std::fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} staged, {} unstaged, {} untracked",
            self.staged, self.unstaged, self.untracked
        )
    }
}

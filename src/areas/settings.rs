//! Persistent settings
//!
//! Settings live in a small JSON object:
//!
//! ```json
//! {
//!   "repo_path": ".",
//!   "default_branch": "main",
//!   "auto_push": true
//! }
//! ```
//!
//! Loading never fails: a missing file, an unreadable file or invalid JSON
//! all yield the defaults, and missing keys are filled in individually.
//! Saving is only done on explicit request and reports its errors.

use crate::artifacts::core::error::GitPushError;
use derive_new::new;
use file_guard::Lock;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Settings file used when no path is given
pub const DEFAULT_SETTINGS_FILE: &str = "gitpush.json";

/// Overrides the settings file location
pub const SETTINGS_PATH_ENV: &str = "GITPUSH_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub repo_path: String,
    pub default_branch: String,
    pub auto_push: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            repo_path: ".".to_string(),
            default_branch: "main".to_string(),
            auto_push: true,
        }
    }
}

impl Settings {
    /// Replaces the fields the user supplied for this run.
    pub fn with_overrides(
        mut self,
        repo_path: Option<String>,
        default_branch: Option<String>,
        auto_push: Option<bool>,
    ) -> Self {
        if let Some(repo_path) = repo_path {
            self.repo_path = repo_path;
        }
        if let Some(default_branch) = default_branch {
            self.default_branch = default_branch;
        }
        if let Some(auto_push) = auto_push {
            self.auto_push = auto_push;
        }
        self
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "repo_path: {}", self.repo_path)?;
        writeln!(f, "default_branch: {}", self.default_branch)?;
        write!(f, "auto_push: {}", self.auto_push)
    }
}

#[derive(Debug, Clone, new)]
pub struct SettingsStore {
    path: Box<Path>,
}

impl SettingsStore {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Settings {
        match self.try_load() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                debug!(path = %self.path.display(), "no settings file, using defaults");
                Settings::default()
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unusable settings file");
                Settings::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<Settings>, GitPushError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            GitPushError::ConfigIO {
                path: self.path.to_path_buf(),
                source,
            }
        })?;
        let settings = serde_json::from_str(&content).map_err(|source| {
            GitPushError::ConfigParse {
                path: self.path.to_path_buf(),
                source,
            }
        })?;

        Ok(Some(settings))
    }

    pub fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        let io_error = |source| GitPushError::ConfigIO {
            path: self.path.to_path_buf(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let mut content = serde_json::to_string_pretty(settings)?;
        content.push('\n');

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(io_error)?;
        let mut lock = file_guard::lock(&mut file, Lock::Exclusive, 0, 1).map_err(io_error)?;
        lock.deref_mut()
            .write_all(content.as_bytes())
            .map_err(io_error)?;

        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        SettingsStore::new(PathBuf::from(DEFAULT_SETTINGS_FILE).into_boxed_path())
    }
}

//! Search policy: which folders are searched and how probe errors are treated

use serde::{Deserialize, Serialize};

/// What to do when probing a candidate path fails for a reason other than
/// "does not exist" (permission denied, not a directory, ...).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatErrors {
    /// Treat the folder as not containing the file and keep searching
    #[default]
    Skip,
    /// Stop and report [`ConfigError::Stat`](crate::ConfigError::Stat)
    Fail,
}

/// Controls the candidate folders for a lookup.
///
/// Defaults search the current folder and the home folder, skip `/etc`,
/// and use no subfolder. Can be embedded in a host application's own
/// TOML or JSON settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Skip the process working directory
    pub exclude_current_folder: bool,

    /// Skip the user's home directory
    pub exclude_homedir: bool,

    /// Search `/etc` after the other folders (POSIX-style platforms only)
    pub include_etc: bool,

    /// Appended to every folder, e.g. `myapp` searches `~/myapp`
    pub subfolder: Option<String>,

    pub stat_errors: StatErrors,
}

impl SearchPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude_current_folder(mut self, exclude: bool) -> Self {
        self.exclude_current_folder = exclude;
        self
    }

    pub fn exclude_homedir(mut self, exclude: bool) -> Self {
        self.exclude_homedir = exclude;
        self
    }

    pub fn include_etc(mut self, include: bool) -> Self {
        self.include_etc = include;
        self
    }

    pub fn subfolder(mut self, subfolder: impl Into<String>) -> Self {
        self.subfolder = Some(subfolder.into());
        self
    }

    pub fn stat_errors(mut self, stat_errors: StatErrors) -> Self {
        self.stat_errors = stat_errors;
        self
    }

    /// The subfolder, ignoring an empty string.
    pub(crate) fn subfolder_name(&self) -> Option<&str> {
        self.subfolder.as_deref().filter(|s| !s.is_empty())
    }
}

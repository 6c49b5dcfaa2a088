//! Configuration file lookup and loading

use std::fs::File;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::file::ConfigFile;
use crate::folders::list_folders;
use crate::format::Format;
use crate::policy::SearchPolicy;
use crate::resolve::resolve;

/// Looks up configuration files by name according to a [`SearchPolicy`].
///
/// Holds no state besides the policy: the folder list is rebuilt and the
/// filesystem probed again on every call.
#[derive(Debug, Default, Clone)]
pub struct ConfigReader {
    policy: SearchPolicy,
}

impl ConfigReader {
    /// Create a reader searching according to `policy`.
    pub fn new(policy: SearchPolicy) -> Self {
        Self { policy }
    }

    /// The policy this reader was built with.
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Folders searched by this reader, highest priority first.
    pub fn list_folders(&self) -> Result<Vec<PathBuf>> {
        list_folders(&self.policy)
    }

    /// Full path of the first `name` found in the search folders.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let folders = self.list_folders()?;
        resolve(name, &folders, self.policy.stat_errors)
    }

    /// Resolve and open `name`.
    pub fn open(&self, name: &str) -> Result<ConfigFile> {
        let path = self.resolve(name)?;
        ConfigFile::from_path(name, path)
    }

    /// Resolve and open `name`, returning the bare handle.
    pub fn get_file(&self, name: &str) -> Result<File> {
        self.open(name).map(ConfigFile::into_file)
    }

    /// Full contents of `name`.
    pub fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        self.open(name)?.read_all()
    }

    /// Decode `name` as JSON, streaming from the open file.
    pub fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.open(name)?.decode_json()
    }

    /// Decode `name` as TOML.
    pub fn read_toml<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.open(name)?.decode_toml()
    }

    /// Decode `name` with the format implied by its extension.
    pub fn read_structured<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let file = self.open(name)?;
        let format = Format::from_path(file.path());
        file.decode(format)
    }
}

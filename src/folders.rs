//! Candidate folder list construction

use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use crate::error::{ConfigError, Result};
use crate::policy::SearchPolicy;

const ETC_DIR: &str = "/etc";

/// Whether the platform has a POSIX-style `/etc` configuration directory.
pub fn supports_etc() -> bool {
    cfg!(not(windows)) && MAIN_SEPARATOR == '/'
}

/// Returns the current user's home folder.
///
/// Outside Windows a non-empty `HOME` wins over the user profile lookup,
/// which is unreliable when cross-compiling.
pub fn home_dir() -> Result<PathBuf> {
    let env_home = if cfg!(windows) {
        None
    } else {
        env::var_os("HOME")
    };
    home_dir_from(env_home).ok_or(ConfigError::HomeDir)
}

/// Append `part` below `folder`.
///
/// Root and prefix components of `part` are dropped, so the result always
/// stays inside `folder` (`/app` under `/home/me` is `/home/me/app`).
pub(crate) fn join_under(folder: &Path, part: &str) -> PathBuf {
    let mut joined = folder.to_path_buf();
    for component in Path::new(part).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => joined.push(other),
        }
    }
    joined
}

fn home_dir_from(env_home: Option<OsString>) -> Option<PathBuf> {
    match env_home {
        Some(home) if !home.is_empty() => Some(PathBuf::from(home)),
        _ => dirs::home_dir(),
    }
}

/// List the folders searched for configuration files, in priority order:
/// current folder, home folder, `/etc`. Earlier entries win.
///
/// The list is rebuilt on every call.
pub fn list_folders(policy: &SearchPolicy) -> Result<Vec<PathBuf>> {
    let mut folders = Vec::with_capacity(3);

    if !policy.exclude_current_folder {
        folders.push(env::current_dir().map_err(ConfigError::CurrentDir)?);
    }

    if !policy.exclude_homedir {
        folders.push(home_dir()?);
    }

    if policy.include_etc && supports_etc() {
        folders.push(PathBuf::from(ETC_DIR));
    }

    if let Some(subfolder) = policy.subfolder_name() {
        for folder in &mut folders {
            *folder = join_under(folder, subfolder);
        }
    }

    tracing::debug!(?folders, "built configuration folder list");
    Ok(folders)
}

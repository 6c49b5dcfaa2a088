//! Resolve a filename against an ordered folder list

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::folders::join_under;
use crate::policy::StatErrors;

/// Return the full path of `name` in the first folder that contains it.
///
/// Folders are probed in order and the search stops at the first hit. A probe
/// error other than "not found" is handled according to `stat_errors`.
pub fn resolve<P: AsRef<Path>>(
    name: &str,
    folders: &[P],
    stat_errors: StatErrors,
) -> Result<PathBuf> {
    for folder in folders {
        let candidate = join_under(folder.as_ref(), name);
        tracing::trace!(path = %candidate.display(), "probing");

        match fs::metadata(&candidate) {
            Ok(_) => {
                tracing::debug!(path = %candidate.display(), "found configuration file");
                return Ok(candidate);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => match stat_errors {
                StatErrors::Skip => {
                    tracing::debug!(path = %candidate.display(), error = %e, "skipping unreadable candidate");
                }
                StatErrors::Fail => {
                    return Err(ConfigError::Stat {
                        name: name.to_string(),
                        path: candidate,
                        source: e,
                    });
                }
            },
        }
    }

    Err(ConfigError::NotFound {
        name: name.to_string(),
    })
}

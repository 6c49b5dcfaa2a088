//! Error type for configuration lookup and loading

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Error type for configuration lookup and loading.
///
/// Every variant raised for a specific request carries the filename the caller
/// asked for, not the folders that were searched.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The process working directory could not be determined
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// Neither `HOME` nor the user profile yielded a home directory
    #[error("cannot determine home directory")]
    HomeDir,

    /// No candidate folder contains the file
    #[error("configuration file {name} not found")]
    NotFound { name: String },

    /// A probe failed for a reason other than "not found" (strict stat policy only)
    #[error("cannot stat {}: {source}", .path.display())]
    Stat {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but could not be opened
    #[error("unable to read configuration file {name}: not exists or not readable")]
    Open {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the open file failed
    #[error("failed to read configuration file {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    /// JSON decoding failed
    #[error("{source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Text content is not valid UTF-8
    #[error("configuration file {name} is not valid UTF-8: {source}")]
    Utf8 {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// TOML decoding failed
    #[error("{source}")]
    Toml {
        name: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Coarse classification of [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Io,
    Decode,
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::NotFound { .. } => ErrorKind::NotFound,
            ConfigError::Json { .. } | ConfigError::Utf8 { .. } | ConfigError::Toml { .. } => {
                ErrorKind::Decode
            }
            ConfigError::CurrentDir(_)
            | ConfigError::HomeDir
            | ConfigError::Stat { .. }
            | ConfigError::Open { .. }
            | ConfigError::Read { .. } => ErrorKind::Io,
        }
    }

    /// The requested filename, when the error belongs to a lookup.
    pub fn name(&self) -> Option<&str> {
        match self {
            ConfigError::NotFound { name }
            | ConfigError::Stat { name, .. }
            | ConfigError::Open { name, .. }
            | ConfigError::Read { name, .. }
            | ConfigError::Json { name, .. }
            | ConfigError::Utf8 { name, .. }
            | ConfigError::Toml { name, .. } => Some(name),
            ConfigError::CurrentDir(_) | ConfigError::HomeDir => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_only_the_file() {
        let err = ConfigError::NotFound {
            name: "app.json".to_string(),
        };
        assert_eq!(err.to_string(), "configuration file app.json not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.name(), Some("app.json"));
    }

    #[test]
    fn test_json_error_surfaces_decoder_message() {
        let source = serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err();
        let expected = source.to_string();
        let err = ConfigError::Json {
            name: "app.json".to_string(),
            source,
        };
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_environment_errors_are_io() {
        assert_eq!(ConfigError::HomeDir.kind(), ErrorKind::Io);
        assert_eq!(ConfigError::HomeDir.name(), None);

        let err = ConfigError::CurrentDir(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_open_error_message() {
        let err = ConfigError::Open {
            name: "app.json".to_string(),
            path: PathBuf::from("/tmp/app.json"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(
            err.to_string(),
            "unable to read configuration file app.json: not exists or not readable"
        );
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}

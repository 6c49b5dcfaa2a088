//! Structured formats a configuration file can be decoded from

use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Pick the format from the file extension. Anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }

    /// Decode the whole of `reader` into `T`. `name` is only used for errors.
    pub fn decode<T, R>(self, name: &str, reader: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        match self {
            Format::Json => {
                serde_json::from_reader(BufReader::new(reader)).map_err(|source| {
                    ConfigError::Json {
                        name: name.to_string(),
                        source,
                    }
                })
            }
            Format::Toml => {
                // toml has no streaming decoder
                let mut bytes = Vec::new();
                BufReader::new(reader)
                    .read_to_end(&mut bytes)
                    .map_err(|source| ConfigError::Read {
                        name: name.to_string(),
                        source,
                    })?;
                let content = String::from_utf8(bytes).map_err(|source| ConfigError::Utf8 {
                    name: name.to_string(),
                    source,
                })?;
                toml::from_str(&content).map_err(|source| ConfigError::Toml {
                    name: name.to_string(),
                    source,
                })
            }
        }
    }
}

//! A located configuration file with its open handle

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{ConfigError, Result};
use crate::format::Format;
use crate::loader::ConfigReader;
use crate::policy::SearchPolicy;

/// A configuration file found by a lookup, opened for reading.
///
/// The handle is owned by this value and closed when it is dropped; the
/// consuming readers (`read_all`, `decode_*`) release it before returning.
#[derive(Debug)]
pub struct ConfigFile {
    name: String,
    path: PathBuf,
    file: File,
}

impl ConfigFile {
    /// Search for `name` according to `policy` and open the first match.
    pub fn open(name: &str, policy: &SearchPolicy) -> Result<Self> {
        ConfigReader::new(policy.clone()).open(name)
    }

    /// Open an already resolved path.
    pub(crate) fn from_path(name: &str, path: PathBuf) -> Result<Self> {
        match File::open(&path) {
            Ok(file) => Ok(Self {
                name: name.to_string(),
                path,
                file,
            }),
            Err(source) => Err(ConfigError::Open {
                name: name.to_string(),
                path,
                source,
            }),
        }
    }

    /// The filename that was looked up.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path of the file that was found.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format implied by the file extension.
    pub fn format(&self) -> Format {
        Format::from_path(&self.path)
    }

    /// Give up the name and path, keeping the open handle.
    pub fn into_file(self) -> File {
        self.file
    }

    /// Read the remaining contents.
    pub fn read_all(mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.file
            .read_to_end(&mut buf)
            .map_err(|source| ConfigError::Read {
                name: self.name.clone(),
                source,
            })?;
        Ok(buf)
    }

    /// Decode the contents with `format`, closing the handle afterwards.
    pub fn decode<T: DeserializeOwned>(self, format: Format) -> Result<T> {
        format.decode(&self.name, self.file)
    }

    /// Decode the contents as JSON.
    pub fn decode_json<T: DeserializeOwned>(self) -> Result<T> {
        self.decode(Format::Json)
    }

    /// Decode the contents as TOML.
    pub fn decode_toml<T: DeserializeOwned>(self) -> Result<T> {
        self.decode(Format::Toml)
    }
}

impl Read for ConfigFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde::Deserialize;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize)]
    struct Sample {
        a: i64,
    }

    #[test]
    fn test_from_path_missing_is_open_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.json");
        let err = ConfigFile::from_path("gone.json", path.clone()).unwrap_err();
        assert!(matches!(err, ConfigError::Open { path: ref p, .. } if *p == path));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_read_all() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.json");
        fs::write(&path, b"{\"a\":1}").unwrap();

        let file = ConfigFile::from_path("app.json", path.clone()).unwrap();
        assert_eq!(file.name(), "app.json");
        assert_eq!(file.path(), path);
        assert_eq!(file.read_all().unwrap(), b"{\"a\":1}");
    }

    #[test]
    fn test_decode_by_detected_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(&path, "a = 7\n").unwrap();

        let file = ConfigFile::from_path("app.toml", path).unwrap();
        let format = file.format();
        assert_eq!(format, Format::Toml);
        let sample: Sample = file.decode(format).unwrap();
        assert_eq!(sample.a, 7);
    }

    #[test]
    fn test_read_trait_streams_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.json");
        fs::write(&path, "hello").unwrap();

        let mut file = ConfigFile::from_path("app.json", path).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        assert_eq!(content, "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_fails_on_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.json");
        fs::create_dir(&path).unwrap();

        let file = ConfigFile::from_path("app.json", path).unwrap();
        let err = file.read_all().unwrap_err();
        assert!(matches!(err, ConfigError::Read { ref name, .. } if name == "app.json"));
    }
}

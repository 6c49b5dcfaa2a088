//! Locate a named configuration file and load it.
//!
//! Candidate folders are searched in a fixed priority order:
//! - the current working directory
//! - the user's home directory (`HOME` wins outside Windows)
//! - `/etc`, when enabled and the platform has one
//!
//! each optionally suffixed with a subfolder. The first folder containing the
//! file wins. Contents can be read raw or decoded from JSON or TOML.

pub mod error;
pub mod file;
pub mod folders;
pub mod format;
pub mod loader;
pub mod policy;
pub mod resolve;

pub use error::{ConfigError, ErrorKind, Result};
pub use file::ConfigFile;
pub use folders::{home_dir, list_folders, supports_etc};
pub use format::Format;
pub use loader::ConfigReader;
pub use policy::{SearchPolicy, StatErrors};
pub use resolve::resolve;

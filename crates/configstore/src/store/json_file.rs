//! JSON-file-backed configuration store.
//!
//! The store owns nothing but a path.  Every `read` goes back to disk, every
//! `write` rewrites the whole file.  Example of a written file:
//!
//! ```json
//! {
//!     "server_url": "http://localhost:8080",
//!     "timeout": 30
//! }
//! ```
//!
//! # No atomicity
//!
//! `write` truncates and rewrites the target in place.  A reader racing a
//! writer may observe a partially written file; concurrent writers are not
//! coordinated and the last one wins.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use super::{ConfigStore, StoreError};
use crate::domain::config::Configuration;

/// Indentation used when writing config files.
const INDENT: &[u8] = b"    ";

/// A [`ConfigStore`] persisted as a single JSON object at a file path.
///
/// - `read` returns an empty configuration when no regular file exists at the
///   path.
/// - `write` replaces the file's contents (no merge with what was there) and
///   creates missing parent directories first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Creates a store backed by the file at `path`.  No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonConfigStore {
    /// Loads the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read, and
    /// [`StoreError::Parse`] if its contents are not a UTF-8 encoded JSON object.
    fn read(&self) -> Result<Configuration, StoreError> {
        if !self.path.is_file() {
            debug!(path = %self.path.display(), "no config file, using empty config");
            return Ok(Configuration::new());
        }

        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            // Removed between the check above and the open.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "config file vanished, using empty config");
                return Ok(Configuration::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let config: Configuration =
            serde_json::from_slice(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), keys = config.len(), "loaded config");
        Ok(config)
    }

    /// Overwrites the file with `config`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for file-system failures or
    /// [`StoreError::Serialize`] if serialization fails.
    fn write(&mut self, config: Configuration) -> Result<(), StoreError> {
        if let Some(dir) = parent_to_create(&self.path) {
            if !dir.is_dir() {
                debug!(dir = %dir.display(), "creating config directory");
                std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
        }

        let content = to_json_bytes(&config)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), keys = config.len(), "saved config");
        Ok(())
    }
}

/// Serializes `config` as JSON indented with [`INDENT`].
fn to_json_bytes(config: &Configuration) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    config.serialize(&mut ser)?;
    Ok(buf)
}

/// Returns the parent directory of `path`, or `None` for a bare file name or
/// a filesystem root.
fn parent_to_create(path: &Path) -> Option<&Path> {
    path.parent().filter(|dir| !dir.as_os_str().is_empty())
}

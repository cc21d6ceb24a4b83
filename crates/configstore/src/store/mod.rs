//! Storage layer: the [`ConfigStore`] contract and its backends.
//!
//! - [`memory::MemConfigStore`] holds the configuration in process memory.
//! - [`json_file::JsonConfigStore`] persists it as a JSON document on disk.
//!
//! Both backends satisfy the same two-method contract, so callers that only
//! need `read` / `write` can be written against `impl ConfigStore` or
//! `dyn ConfigStore` and be handed either one.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::config::Configuration;

pub mod json_file;
pub mod memory;

/// Error type for configuration store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored document is not valid JSON or is not a JSON object.
    #[error("failed to parse config JSON at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration could not be serialized to JSON.
    ///
    /// A [`Configuration`] always serializes, so the built-in backends never
    /// return this; it exists for backends whose serialization can fail.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read/write access to a configuration.
///
/// # Contract
///
/// - `read` returns an owned snapshot.  Mutating it never changes the store;
///   the only way to change stored state is `write`.
/// - `write` persists `config`.  Whether it merges into or replaces the
///   previous contents is backend-specific.
pub trait ConfigStore {
    /// Returns the current configuration.
    ///
    /// # Errors
    ///
    /// Backend-specific; see the implementing type.
    fn read(&self) -> Result<Configuration, StoreError>;

    /// Persists `config`.
    ///
    /// # Errors
    ///
    /// Backend-specific; see the implementing type.
    fn write(&mut self, config: Configuration) -> Result<(), StoreError>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for &mut S {
    fn read(&self) -> Result<Configuration, StoreError> {
        (**self).read()
    }

    fn write(&mut self, config: Configuration) -> Result<(), StoreError> {
        (**self).write(config)
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Box<S> {
    fn read(&self) -> Result<Configuration, StoreError> {
        (**self).read()
    }

    fn write(&mut self, config: Configuration) -> Result<(), StoreError> {
        (**self).write(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::domain::config::from_value;
    use crate::store::memory::MemConfigStore;

    /// Writes through any store handed in, whichever way it is wrapped.
    fn write_flag<S: ConfigStore>(mut store: S) {
        let update = from_value(json!({ "flag": true })).expect("object");
        store.write(update).expect("write must succeed");
    }

    #[test]
    fn test_mut_ref_forwards_to_inner_store() {
        // Arrange
        let mut store = MemConfigStore::new();

        // Act
        write_flag(&mut store);

        // Assert
        assert_eq!(store.read().unwrap()["flag"], json!(true));
    }

    #[test]
    fn test_boxed_dyn_store_forwards_read_and_write() {
        // Arrange
        let mut store: Box<dyn ConfigStore> = Box::new(MemConfigStore::new());

        // Act
        write_flag(&mut store);

        // Assert
        assert_eq!(store.read().unwrap()["flag"], json!(true));
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/etc/app/config.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/app/config.json"), "got {msg}");
        assert!(msg.contains("denied"), "got {msg}");
    }

    #[test]
    fn test_parse_error_display_includes_path() {
        let source = serde_json::from_str::<Configuration>("{ nope").unwrap_err();
        let err = StoreError::Parse {
            path: PathBuf::from("settings.json"),
            source,
        };
        assert!(err.to_string().starts_with("failed to parse config JSON at settings.json"));
    }

    #[test]
    fn test_serde_json_error_converts_to_serialize_variant() {
        let source = serde_json::from_str::<Configuration>("[").unwrap_err();
        let err = StoreError::from(source);
        assert!(matches!(err, StoreError::Serialize(_)));
        assert!(err.to_string().starts_with("failed to serialize config"));
    }
}

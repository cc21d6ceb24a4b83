//! In-memory configuration store.

use serde_json::Value;
use tracing::trace;

use super::{ConfigStore, StoreError};
use crate::domain::config::{self, Configuration};

/// A [`ConfigStore`] whose state lives only in process memory.
///
/// `write` merges into the stored mapping: keys in the update overwrite stored
/// entries of the same name, all other stored keys are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemConfigStore {
    config: Configuration,
}

impl MemConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `config` as its initial configuration.
    pub fn with_config(config: Configuration) -> Self {
        Self { config }
    }
}

impl<K, V> FromIterator<(K, V)> for MemConfigStore
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let config = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { config }
    }
}

impl ConfigStore for MemConfigStore {
    /// Returns a copy of the stored mapping.  Never fails.
    fn read(&self) -> Result<Configuration, StoreError> {
        Ok(self.config.clone())
    }

    /// Merges `config` into the stored mapping.  Never fails.
    fn write(&mut self, config: Configuration) -> Result<(), StoreError> {
        trace!(keys = config.len(), "merging into in-memory config");
        config::merge(&mut self.config, config);
        Ok(())
    }
}

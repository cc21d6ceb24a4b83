//! # configstore
//!
//! A small key-value configuration store with two interchangeable backends.
//!
//! # Architecture overview
//!
//! - **`domain`** – The [`Configuration`] type: a mapping from string keys to
//!   JSON values.  No schema is enforced.
//!
//! - **`store`** – The [`ConfigStore`] trait (`read` / `write`) and its two
//!   implementations:
//!   - [`MemConfigStore`] keeps the configuration in memory; `write` merges the
//!     given keys into the stored mapping.
//!   - [`JsonConfigStore`] keeps the configuration in a JSON file; `write`
//!     replaces the whole file.
//!
//! The caller picks a backend at construction time and may then use it
//! directly or behind `Box<dyn ConfigStore>`.
//!
//! ```rust
//! use configstore::{ConfigStore, MemConfigStore};
//! use serde_json::json;
//!
//! let mut store: MemConfigStore = [("server_url", json!("http://localhost:8080"))]
//!     .into_iter()
//!     .collect();
//!
//! let update = configstore::domain::config::from_value(json!({ "timeout": 30 })).unwrap();
//! store.write(update).unwrap();
//!
//! let config = store.read().unwrap();
//! assert_eq!(config["server_url"], "http://localhost:8080");
//! assert_eq!(config["timeout"], 30);
//! ```

pub mod domain;
pub mod store;

pub use domain::config::Configuration;
pub use store::json_file::JsonConfigStore;
pub use store::memory::MemConfigStore;
pub use store::{ConfigStore, StoreError};

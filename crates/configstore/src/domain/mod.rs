//! Domain types for configuration stores.
//!
//! Nothing in here touches the file system; the `store` layer depends on this
//! module, never the other way round.

pub mod config;

//! The configuration value model.
//!
//! A [`Configuration`] is a mapping from string keys to arbitrary JSON values
//! (null, booleans, numbers, strings, arrays and nested objects).  No schema is
//! enforced: any JSON object is a valid configuration.

use serde_json::{Map, Value};

/// A configuration snapshot: string keys mapped to JSON values.
pub type Configuration = Map<String, Value>;

/// Converts a JSON value into a [`Configuration`].
///
/// Returns `None` unless `value` is a JSON object, since only objects can act
/// as a top-level configuration.
pub fn from_value(value: Value) -> Option<Configuration> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Shallow-merges `update` into `target`.
///
/// Every key in `update` overwrites the entry of the same name in `target`;
/// keys absent from `update` are left untouched.  Nested objects are replaced
/// wholesale, not merged recursively.
pub fn merge(target: &mut Configuration, update: Configuration) {
    for (key, value) in update {
        target.insert(key, value);
    }
}

//! Mapping of JSON object keys and values.
//!
//! This module provides functions that build a new object from a source
//! object by passing every entry through a transform:
//!
//! - [`map_object`]: Map an object held as a [`serde_json::Value`]
//! - [`map_entries`]: Map a [`serde_json::Map`] directly
//! - [`try_map_object`]: Map with a transform that may fail
//! - [`map_keys`] / [`map_values`]: Rewrite only one side of each entry
//!
//! The source is only ever borrowed, so it is left exactly as it was.
//!
//! # Deep Mapping
//!
//! With [`MapOptions::deep()`], values that are objects, or arrays holding
//! objects, are mapped with the same transform before the transform sees
//! them. Each nested level is written into a fresh object.
//!
//! ```rust
//! use mapobj::mapper::{map_object, MapOptions};
//! use serde_json::{json, Value};
//!
//! let source = json!({"foo": {"bar": 1}, "lorem": {"ipsum": 2}});
//! let mapped = map_object(
//!     &source,
//!     |key, value, _| (key.to_uppercase(), value),
//!     MapOptions::new().deep_by_key(|key| key == "foo"),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     Value::Object(mapped),
//!     json!({"FOO": {"BAR": 1}, "LOREM": {"ipsum": 2}})
//! );
//! ```
//!
//! # Merging Into a Target
//!
//! ```rust
//! use mapobj::mapper::{map_object, MapOptions};
//! use serde_json::{json, Map};
//!
//! let mut seed = Map::new();
//! seed.insert("z".to_string(), json!(0));
//!
//! let merged = map_object(
//!     &json!({"a": 1}),
//!     |key, value, _| (key.to_owned(), value),
//!     MapOptions::new().target(seed),
//! )
//! .unwrap();
//!
//! assert_eq!(merged.get("z"), Some(&json!(0)));
//! assert_eq!(merged.get("a"), Some(&json!(1)));
//! ```
//!
//! # Skipping Entries
//!
//! A transform that returns [`Mapped::Skip`] (or `None` for an
//! `Option<(key, value)>`) leaves the entry out of the result.
//!
//! ```rust
//! use mapobj::mapper::{map_object, MapOptions};
//! use serde_json::json;
//!
//! let public = map_object(
//!     &json!({"name": "ada", "_secret": "x"}),
//!     |key, value, _| (!key.starts_with('_')).then(|| (key.to_owned(), value)),
//!     MapOptions::new(),
//! )
//! .unwrap();
//!
//! assert!(!public.contains_key("_secret"));
//! ```

mod engine;
mod entry;
mod error;
mod options;
mod shortcuts;

pub use engine::{map_entries, map_object, try_map_object};
pub use entry::Mapped;
pub use error::MapObjectError;
pub use options::{MapOptions, Recurse};
pub use shortcuts::{map_keys, map_values};

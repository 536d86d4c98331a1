//! # mapobj
//!
//! Map the keys and values of JSON objects into new objects.
//!
//! ## Overview
//!
//! Given a source object and a transform, this library builds a new object
//! from the transformed entries. It includes:
//!
//! - **Shallow and deep mapping**: recurse into nested objects and objects
//!   inside arrays, everywhere or only under selected keys
//! - **Target merging**: write results into a caller-supplied object
//! - **Skipping**: drop entries by returning [`Mapped::Skip`]
//! - **Fallible transforms**: abort on the first transform error
//!
//! ## Feature Flags
//!
//! - `preserve_order` (default): objects enumerate in insertion order
//!
//! ## Example
//!
//! ```rust
//! use mapobj::prelude::*;
//! use serde_json::{json, Value};
//!
//! let swapped = map_object(
//!     &json!({"a": 1, "b": 2}),
//!     |key, value, _| (value.to_string(), key.to_owned()),
//!     MapOptions::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(Value::Object(swapped), json!({"1": "a", "2": "b"}));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use mapobj::prelude::*;
/// ```
pub mod prelude {
    pub use crate::mapper::*;
}

pub mod mapper;

pub use mapper::{
    MapObjectError, MapOptions, Mapped, Recurse, map_entries, map_keys, map_object, map_values,
    try_map_object,
};

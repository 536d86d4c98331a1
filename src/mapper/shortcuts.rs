//! Key-only and value-only mapping.

use serde_json::{Map, Value};

use super::engine::map_object;
use super::error::MapObjectError;
use super::options::MapOptions;

/// Rewrites every key of `source`, keeping the values.
///
/// # Errors
///
/// Returns [`MapObjectError::InvalidArgument`] if `source` is not an object.
///
/// # Examples
///
/// ```rust
/// use mapobj::mapper::{map_keys, MapOptions};
/// use serde_json::{json, Value};
///
/// let renamed = map_keys(
///     &json!({"user_id": 1, "profile": {"display_name": "ada"}}),
///     |key| key.replace('_', "-"),
///     MapOptions::new().deep(true),
/// )
/// .unwrap();
///
/// assert_eq!(
///     Value::Object(renamed),
///     json!({"user-id": 1, "profile": {"display-name": "ada"}})
/// );
/// ```
pub fn map_keys<F>(
    source: &Value,
    mut rename: F,
    options: MapOptions<'_>,
) -> Result<Map<String, Value>, MapObjectError>
where
    F: FnMut(&str) -> String,
{
    map_object(source, |key, value, _| (rename(key), value), options)
}

/// Rewrites every value of `source`, keeping the keys.
///
/// With recursion enabled, `update` also sees nested containers after their
/// own entries have been rewritten.
///
/// # Errors
///
/// Returns [`MapObjectError::InvalidArgument`] if `source` is not an object.
///
/// # Examples
///
/// ```rust
/// use mapobj::mapper::{map_values, MapOptions};
/// use serde_json::{json, Value};
///
/// let redacted = map_values(
///     &json!({"user": "ada", "password": "hunter2"}),
///     |key, value| if key == "password" { json!("***") } else { value },
///     MapOptions::new(),
/// )
/// .unwrap();
///
/// assert_eq!(Value::Object(redacted), json!({"user": "ada", "password": "***"}));
/// ```
pub fn map_values<F>(
    source: &Value,
    mut update: F,
    options: MapOptions<'_>,
) -> Result<Map<String, Value>, MapObjectError>
where
    F: FnMut(&str, Value) -> Value,
{
    map_object(
        source,
        |key, value, _| (key.to_owned(), update(key, value)),
        options,
    )
}

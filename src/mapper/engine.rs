//! The mapping engine.
//!
//! Every public entry point funnels into [`map_level`], which walks one
//! object, descends into nested containers when the [`Recurse`] setting
//! allows it, and writes each transform result into the target.

use std::convert::Infallible;

use serde_json::{Map, Value};
use tracing::trace;

use super::entry::Mapped;
use super::error::MapObjectError;
use super::options::{MapOptions, Recurse};

/// Maps the keys and values of `source` into a new object.
///
/// `transform` receives each key, its value and the object being iterated,
/// and returns the entry to write (anything convertible into [`Mapped`]).
/// With [`MapOptions::deep()`] enabled, nested objects and objects inside
/// arrays are mapped first and the transform sees the mapped value.
///
/// # Errors
///
/// Returns [`MapObjectError::InvalidArgument`] if `source` is `null` or any
/// other non-object value. Nothing is mapped in that case.
///
/// # Examples
///
/// ```rust
/// use mapobj::mapper::{map_object, MapOptions};
/// use serde_json::json;
///
/// let source = json!({"foo": {"bar": 42}});
/// let mapped = map_object(
///     &source,
///     |key, value, _| (key.to_uppercase(), value),
///     MapOptions::new().deep(true),
/// )
/// .unwrap();
///
/// assert_eq!(serde_json::Value::Object(mapped), json!({"FOO": {"BAR": 42}}));
/// ```
pub fn map_object<F, M>(
    source: &Value,
    transform: F,
    options: MapOptions<'_>,
) -> Result<Map<String, Value>, MapObjectError>
where
    F: FnMut(&str, Value, &Map<String, Value>) -> M,
    M: Into<Mapped>,
{
    let Value::Object(object) = source else {
        return Err(MapObjectError::invalid_source(source));
    };
    Ok(map_entries(object, transform, options))
}

/// Maps the entries of an object already in hand.
///
/// Same as [`map_object`] without the source check.
///
/// # Examples
///
/// ```rust
/// use mapobj::mapper::{map_entries, MapOptions};
/// use serde_json::{json, Map};
///
/// let mut source = Map::new();
/// source.insert("foo".to_string(), json!("bar"));
///
/// let swapped = map_entries(
///     &source,
///     |key, value, _| (value.as_str().unwrap_or_default().to_owned(), key.to_owned()),
///     MapOptions::new(),
/// );
/// assert_eq!(swapped.get("bar"), Some(&json!("foo")));
/// ```
pub fn map_entries<F, M>(
    source: &Map<String, Value>,
    mut transform: F,
    options: MapOptions<'_>,
) -> Map<String, Value>
where
    F: FnMut(&str, Value, &Map<String, Value>) -> M,
    M: Into<Mapped>,
{
    let MapOptions { deep, target } = options;
    let mut target = target.unwrap_or_default();
    let mut infallible = |key: &str, value: Value, level: &Map<String, Value>| {
        Ok::<M, Infallible>(transform(key, value, level))
    };
    let Ok(()) = map_level(source, &mut infallible, &deep, &mut target);
    target
}

/// Maps `source` with a transform that may fail.
///
/// The first transform error aborts the run and is returned as-is; the
/// partially built target is dropped.
///
/// # Errors
///
/// Returns the transform's error, or `E::from(MapObjectError)` if `source`
/// is not an object.
///
/// # Examples
///
/// ```rust
/// use mapobj::mapper::{try_map_object, MapObjectError, MapOptions};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// enum Error {
///     Source(MapObjectError),
///     NotANumber(String),
/// }
///
/// impl From<MapObjectError> for Error {
///     fn from(error: MapObjectError) -> Self {
///         Self::Source(error)
///     }
/// }
///
/// let doubled = try_map_object(
///     &json!({"a": 1, "b": "two"}),
///     |key, value, _| match value.as_i64() {
///         Some(number) => Ok((key.to_owned(), number * 2)),
///         None => Err(Error::NotANumber(key.to_owned())),
///     },
///     MapOptions::new(),
/// );
/// assert_eq!(doubled, Err(Error::NotANumber("b".to_string())));
/// ```
pub fn try_map_object<F, M, E>(
    source: &Value,
    mut transform: F,
    options: MapOptions<'_>,
) -> Result<Map<String, Value>, E>
where
    F: FnMut(&str, Value, &Map<String, Value>) -> Result<M, E>,
    M: Into<Mapped>,
    E: From<MapObjectError>,
{
    let Value::Object(object) = source else {
        return Err(MapObjectError::invalid_source(source).into());
    };
    let MapOptions { deep, target } = options;
    let mut target = target.unwrap_or_default();
    map_level(object, &mut transform, &deep, &mut target)?;
    Ok(target)
}

fn map_level<F, M, E>(
    source: &Map<String, Value>,
    transform: &mut F,
    deep: &Recurse<'_>,
    target: &mut Map<String, Value>,
) -> Result<(), E>
where
    F: FnMut(&str, Value, &Map<String, Value>) -> Result<M, E>,
    M: Into<Mapped>,
{
    for (key, value) in source {
        let recurse = deep.should_recurse(key);
        let value = match value {
            Value::Object(nested) if recurse => {
                trace!(key = key.as_str(), "descending into nested object");
                Value::Object(map_nested(nested, transform, deep)?)
            }
            Value::Array(items) if recurse => {
                trace!(key = key.as_str(), length = items.len(), "descending into array");
                Value::Array(map_sequence(items, transform, deep)?)
            }
            other => other.clone(),
        };

        let mapped: Mapped = transform(key, value, source)?.into();
        if let Mapped::Entry { key, value } = mapped {
            target.insert(key, value);
        }
    }
    Ok(())
}

fn map_nested<F, M, E>(
    source: &Map<String, Value>,
    transform: &mut F,
    deep: &Recurse<'_>,
) -> Result<Map<String, Value>, E>
where
    F: FnMut(&str, Value, &Map<String, Value>) -> Result<M, E>,
    M: Into<Mapped>,
{
    let mut target = Map::new();
    map_level(source, transform, deep, &mut target)?;
    Ok(target)
}

// Only objects directly inside the array are mapped; nested arrays and
// scalars are copied through.
fn map_sequence<F, M, E>(
    items: &[Value],
    transform: &mut F,
    deep: &Recurse<'_>,
) -> Result<Vec<Value>, E>
where
    F: FnMut(&str, Value, &Map<String, Value>) -> Result<M, E>,
    M: Into<Mapped>,
{
    items
        .iter()
        .map(|item| match item {
            Value::Object(nested) => map_nested(nested, transform, deep).map(Value::Object),
            other => Ok(other.clone()),
        })
        .collect()
}

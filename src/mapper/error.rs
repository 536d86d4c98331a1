//! Error types for the mapper.
//!
//! The mapper has a single failure mode of its own: being handed a source
//! that is not an object. Errors raised by a fallible transform belong to
//! the caller and are passed through [`try_map_object`](super::try_map_object)
//! untouched.

use serde_json::Value;
use thiserror::Error;

/// Represents errors raised by the mapper before any entry is visited.
///
/// # Examples
///
/// ```rust
/// use mapobj::mapper::{map_object, MapObjectError, MapOptions};
/// use serde_json::Value;
///
/// let result = map_object(&Value::Null, |key, value, _| (key.to_owned(), value), MapOptions::new());
/// assert_eq!(result, Err(MapObjectError::InvalidArgument { found: "null" }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapObjectError {
    /// The source was absent (`null`) or not an object.
    #[error("invalid argument: expected an object source, found {found}")]
    InvalidArgument {
        /// JSON type name of the rejected source.
        found: &'static str,
    },
}

impl MapObjectError {
    /// Builds an `InvalidArgument` error describing `source`.
    pub(crate) const fn invalid_source(source: &Value) -> Self {
        Self::InvalidArgument {
            found: json_type_name(source),
        }
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Value::Null, "null")]
    #[case(json!(true), "boolean")]
    #[case(json!(3.5), "number")]
    #[case(json!("text"), "string")]
    #[case(json!([1, 2]), "array")]
    fn test_invalid_source_names_json_type(#[case] source: Value, #[case] expected: &'static str) {
        let error = MapObjectError::invalid_source(&source);
        assert_eq!(error, MapObjectError::InvalidArgument { found: expected });
    }

    #[rstest]
    fn test_invalid_argument_display() {
        let error = MapObjectError::invalid_source(&Value::Null);
        assert_eq!(
            format!("{error}"),
            "invalid argument: expected an object source, found null"
        );
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&MapObjectError::invalid_source(&json!(1)));
    }
}

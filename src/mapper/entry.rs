//! Transform results.

use serde_json::Value;

/// The result of applying a transform to one entry.
///
/// Transforms rarely build this directly: any `(key, value)` tuple whose
/// parts convert into `String` and [`Value`] converts into
/// [`Mapped::Entry`], and `Option<(key, value)>` maps `None` to
/// [`Mapped::Skip`].
///
/// # Examples
///
/// ```rust
/// use mapobj::mapper::Mapped;
/// use serde_json::json;
///
/// let entry: Mapped = ("answer", 42).into();
/// assert_eq!(entry, Mapped::entry("answer", json!(42)));
///
/// let skipped: Mapped = None::<(String, i32)>.into();
/// assert!(skipped.is_skip());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mapped {
    /// Write `value` under `key` in the target.
    Entry {
        /// Key written to the target.
        key: String,
        /// Value written to the target.
        value: Value,
    },
    /// Leave the target untouched for this entry.
    Skip,
}

impl Mapped {
    /// Creates a [`Mapped::Entry`].
    pub fn entry<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Entry {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a [`Mapped::Skip`].
    pub const fn skip() -> Self {
        Self::Skip
    }

    /// Returns `true` if this result writes nothing.
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

impl<K, V> From<(K, V)> for Mapped
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::entry(key, value)
    }
}

impl<K, V> From<Option<(K, V)>> for Mapped
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(entry: Option<(K, V)>) -> Self {
        entry.map_or(Self::Skip, Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_tuple_converts_to_entry() {
        let mapped: Mapped = (String::from("key"), json!({"nested": true})).into();
        assert_eq!(
            mapped,
            Mapped::Entry {
                key: "key".to_string(),
                value: json!({"nested": true}),
            }
        );
        assert!(!mapped.is_skip());
    }

    #[rstest]
    fn test_some_converts_to_entry() {
        let mapped: Mapped = Some(("key", "value")).into();
        assert_eq!(mapped, Mapped::entry("key", "value"));
    }

    #[rstest]
    fn test_none_converts_to_skip() {
        let mapped: Mapped = None::<(&str, Value)>.into();
        assert_eq!(mapped, Mapped::skip());
    }
}

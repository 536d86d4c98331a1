//! Configuration for a mapping run.
//!
//! [`MapOptions`] carries the two knobs of the mapper: whether to recurse
//! into nested containers ([`Recurse`]) and which map to write results into.

use std::fmt;

use serde_json::{Map, Value};

/// Decides whether the value under a key is recursively mapped.
///
/// Recursion only ever applies to objects and arrays; scalars are passed to
/// the transform as-is regardless of this setting.
///
/// # Examples
///
/// ```rust
/// use mapobj::mapper::Recurse;
///
/// assert!(!Recurse::Never.should_recurse("foo"));
/// assert!(Recurse::Always.should_recurse("foo"));
///
/// let only_foo = Recurse::by_key(|key| key == "foo");
/// assert!(only_foo.should_recurse("foo"));
/// assert!(!only_foo.should_recurse("lorem"));
/// ```
#[derive(Default)]
pub enum Recurse<'a> {
    /// Never descend into nested containers.
    #[default]
    Never,
    /// Descend into every nested object and array.
    Always,
    /// Descend only when the predicate returns `true` for the key.
    ///
    /// The predicate sees the bare key at whatever depth it appears.
    ByKey(Box<dyn Fn(&str) -> bool + 'a>),
}

impl<'a> Recurse<'a> {
    /// Creates a [`Recurse::ByKey`] from a predicate.
    pub fn by_key<P>(predicate: P) -> Self
    where
        P: Fn(&str) -> bool + 'a,
    {
        Self::ByKey(Box::new(predicate))
    }

    /// Evaluates the setting for `key`.
    pub fn should_recurse(&self, key: &str) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::ByKey(predicate) => predicate(key),
        }
    }
}

impl From<bool> for Recurse<'_> {
    fn from(deep: bool) -> Self {
        if deep { Self::Always } else { Self::Never }
    }
}

impl fmt::Debug for Recurse<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => formatter.write_str("Never"),
            Self::Always => formatter.write_str("Always"),
            Self::ByKey(_) => formatter.write_str("ByKey(<predicate>)"),
        }
    }
}

/// Options for [`map_object`](super::map_object) and friends.
///
/// # Examples
///
/// ```rust
/// use mapobj::mapper::{MapOptions, Recurse};
/// use serde_json::{json, Map, Value};
///
/// let mut seed = Map::new();
/// seed.insert("z".to_string(), json!(0));
///
/// let options = MapOptions::new().deep(true).target(seed);
/// assert!(matches!(options.deep, Recurse::Always));
/// assert_eq!(options.target.unwrap().get("z"), Some(&Value::from(0)));
/// ```
#[derive(Debug, Default)]
pub struct MapOptions<'a> {
    /// Recursion setting, [`Recurse::Never`] by default.
    pub deep: Recurse<'a>,
    /// Map to merge the mapped entries into. A fresh map is used when `None`.
    ///
    /// Only the top level writes here; nested levels always start empty.
    pub target: Option<Map<String, Value>>,
}

impl<'a> MapOptions<'a> {
    /// Creates options with no recursion and a fresh target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recursion setting. Accepts a [`Recurse`] or a `bool`.
    #[must_use]
    pub fn deep<R>(mut self, deep: R) -> Self
    where
        R: Into<Recurse<'a>>,
    {
        self.deep = deep.into();
        self
    }

    /// Recurses only under keys accepted by `predicate`.
    #[must_use]
    pub fn deep_by_key<P>(self, predicate: P) -> Self
    where
        P: Fn(&str) -> bool + 'a,
    {
        self.deep(Recurse::by_key(predicate))
    }

    /// Merges results into `target` instead of a fresh map.
    #[must_use]
    pub fn target(mut self, target: Map<String, Value>) -> Self {
        self.target = Some(target);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_default_never_recurses() {
        let options = MapOptions::default();
        assert!(matches!(options.deep, Recurse::Never));
        assert!(options.target.is_none());
    }

    #[rstest]
    #[case(true, true)]
    #[case(false, false)]
    fn test_recurse_from_bool(#[case] deep: bool, #[case] expected: bool) {
        let recurse = Recurse::from(deep);
        assert_eq!(recurse.should_recurse("anything"), expected);
    }

    #[rstest]
    fn test_by_key_borrows_local_state() {
        let calls = Cell::new(0);
        let recurse = Recurse::by_key(|key| {
            calls.set(calls.get() + 1);
            key.starts_with('n')
        });

        assert!(recurse.should_recurse("nested"));
        assert!(!recurse.should_recurse("flat"));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_deep_by_key_builder() {
        let options = MapOptions::new().deep_by_key(|key| key == "foo");
        assert!(options.deep.should_recurse("foo"));
        assert!(!options.deep.should_recurse("bar"));
    }

    #[rstest]
    fn test_recurse_debug_hides_predicate() {
        assert_eq!(format!("{:?}", Recurse::Always), "Always");
        assert_eq!(
            format!("{:?}", Recurse::by_key(|_| true)),
            "ByKey(<predicate>)"
        );
    }
}

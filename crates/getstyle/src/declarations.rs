//! Ordered property/value declarations.
//!
//! A [`DeclarationSet`] is the unit every style is made of: a map from CSS
//! property name to value that remembers the order in which properties were
//! first introduced. Output order is observable (it becomes the order of the
//! inline CSS), so the set behaves like an insertion-ordered map:
//!
//! - Setting a new property appends it at the end
//! - Setting an existing property replaces its value without moving it
//!
//! ```rust
//! use getstyle::DeclarationSet;
//!
//! let mut decls = DeclarationSet::new()
//!     .with("color", "red")
//!     .with("padding", "4px");
//!
//! decls.set("color", "blue");
//!
//! let props: Vec<_> = decls.iter().collect();
//! assert_eq!(props, vec![("color", "blue"), ("padding", "4px")]);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An insertion-ordered set of CSS declarations.
///
/// Equality is order-sensitive: two sets holding the same declarations in a
/// different order serialize differently and therefore compare unequal.
///
/// Deserializes from any map; string, number, and boolean values are
/// accepted, and numbers and booleans are stored as their text form.
#[derive(Debug, Clone, Default)]
pub struct DeclarationSet {
    /// Declarations in output order.
    entries: Vec<(String, String)>,
    /// Property name → position in `entries`.
    index: HashMap<String, usize>,
}

impl DeclarationSet {
    /// Creates an empty declaration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty declaration set with room for `capacity` properties.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Sets a property, returning the value it replaced.
    ///
    /// A property that already exists keeps its position; a new property is
    /// appended after all existing ones.
    pub fn set(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let property = property.into();
        let value = value.into();

        if let Some(&pos) = self.index.get(&property) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }

        self.index.insert(property.clone(), self.entries.len());
        self.entries.push((property, value));
        None
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Returns the value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.index
            .get(property)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Returns true if the property is set.
    pub fn contains(&self, property: &str) -> bool {
        self.index.contains_key(property)
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(property, value)` pairs in output order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over property names in output order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    /// Merges another set into this one, later-wins.
    ///
    /// Each declaration of `other` is applied with [`set`](Self::set) in
    /// `other`'s order, so overlapping properties take `other`'s value but
    /// stay where they already were.
    pub fn merge(&mut self, other: &DeclarationSet) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }
}

impl PartialEq for DeclarationSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for DeclarationSet {}

/// Borrowing iterator over a [`DeclarationSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DeclarationSet {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for DeclarationSet {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> Extend<(K, V)> for DeclarationSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (property, value) in iter {
            self.set(property, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for DeclarationSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = DeclarationSet::new();
        set.extend(iter);
        set
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for DeclarationSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(declarations: [(K, V); N]) -> Self {
        declarations.into_iter().collect()
    }
}

impl Serialize for DeclarationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (property, value) in self.iter() {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

/// A declaration value as written in a config document.
///
/// Strings are taken as-is; numbers and booleans are stringified so that
/// `z-index: 2` loads the same from YAML and JSON.
struct ScalarValue(String);

struct ScalarValueVisitor;

impl<'de> Visitor<'de> for ScalarValueVisitor {
    type Value = ScalarValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, or boolean CSS value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ScalarValue(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ScalarValue(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ScalarValue(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ScalarValue(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ScalarValue(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ScalarValue(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for ScalarValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarValueVisitor)
    }
}

struct DeclarationSetVisitor;

impl<'de> Visitor<'de> for DeclarationSetVisitor {
    type Value = DeclarationSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of CSS property names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = DeclarationSet::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((property, ScalarValue(value))) =
            access.next_entry::<String, ScalarValue>()?
        {
            set.set(property, value);
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for DeclarationSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DeclarationSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(set: &DeclarationSet) -> Vec<(&str, &str)> {
        set.iter().collect()
    }

    #[test]
    fn test_new_is_empty() {
        let set = DeclarationSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn test_set_appends_new_properties() {
        let mut set = DeclarationSet::new();
        assert_eq!(set.set("color", "red"), None);
        assert_eq!(set.set("margin", "0"), None);

        assert_eq!(pairs(&set), vec![("color", "red"), ("margin", "0")]);
    }

    #[test]
    fn test_set_existing_updates_in_place() {
        let mut set = DeclarationSet::from([("a", "1"), ("b", "2"), ("c", "3")]);

        let previous = set.set("a", "9");

        assert_eq!(previous.as_deref(), Some("1"));
        assert_eq!(pairs(&set), vec![("a", "9"), ("b", "2"), ("c", "3")]);
    }

    #[test]
    fn test_get_and_contains() {
        let set = DeclarationSet::new().with("color", "red");
        assert_eq!(set.get("color"), Some("red"));
        assert_eq!(set.get("margin"), None);
        assert!(set.contains("color"));
        assert!(!set.contains("margin"));
    }

    #[test]
    fn test_merge_is_later_wins_and_position_preserving() {
        let mut base = DeclarationSet::from([("foo", "bar"), ("x", "1")]);
        let top = DeclarationSet::from([("bar", "baz"), ("foo", "qux")]);

        base.merge(&top);

        assert_eq!(
            pairs(&base),
            vec![("foo", "qux"), ("x", "1"), ("bar", "baz")]
        );
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let mut set = DeclarationSet::from([("a", "1")]);
        let before = set.clone();
        set.merge(&DeclarationSet::new());
        assert_eq!(set, before);
    }

    #[test]
    fn test_from_iter_duplicates_keep_first_position() {
        let set: DeclarationSet = vec![("a", "1"), ("b", "2"), ("a", "3")]
            .into_iter()
            .collect();
        assert_eq!(pairs(&set), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let ab = DeclarationSet::from([("a", "1"), ("b", "2")]);
        let ba = DeclarationSet::from([("b", "2"), ("a", "1")]);
        assert_ne!(ab, ba);
        assert_eq!(ab, DeclarationSet::new().with("a", "1").with("b", "2"));
    }

    #[test]
    fn test_properties_in_order() {
        let set = DeclarationSet::from([("z", "1"), ("a", "2")]);
        let props: Vec<_> = set.properties().collect();
        assert_eq!(props, vec!["z", "a"]);
    }

    #[test]
    fn test_owned_into_iter() {
        let set = DeclarationSet::from([("a", "1")]);
        let owned: Vec<(String, String)> = set.into_iter().collect();
        assert_eq!(owned, vec![("a".to_string(), "1".to_string())]);
    }
}

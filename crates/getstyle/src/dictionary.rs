//! Named style collections.
//!
//! A [`StyleDictionary`] maps style names to the [`DeclarationSet`] each name
//! expands to. The reserved name [`GLOBAL_STYLE`] (`"*"`) holds declarations
//! that apply to every resolution.
//!
//! ```rust
//! use getstyle::{DeclarationSet, StyleDictionary};
//!
//! let styles = StyleDictionary::new()
//!     .add("*", DeclarationSet::from([("font-family", "sans-serif")]))
//!     .add("muted", DeclarationSet::from([("color", "#888")]))
//!     .add("button", DeclarationSet::from([("padding", "4px 8px")]));
//!
//! assert!(styles.global().is_some());
//! assert!(styles.contains("muted"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::declarations::DeclarationSet;

/// Reserved style name for declarations applied to every resolution.
pub const GLOBAL_STYLE: &str = "*";

/// A collection of named declaration sets.
///
/// Deserializes from a map of style name to property map, so a host
/// application can build one from whatever config format it already reads:
///
/// ```yaml
/// "*":
///   font-family: sans-serif
/// muted:
///   color: "#888"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleDictionary {
    styles: HashMap<String, DeclarationSet>,
}

impl StyleDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any existing style of the same name.
    pub fn add(
        mut self,
        name: impl Into<String>,
        declarations: impl Into<DeclarationSet>,
    ) -> Self {
        self.insert(name, declarations);
        self
    }

    /// Inserts a named style, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        declarations: impl Into<DeclarationSet>,
    ) -> Option<DeclarationSet> {
        self.styles.insert(name.into(), declarations.into())
    }

    /// Returns the declarations for a style name.
    pub fn get(&self, name: &str) -> Option<&DeclarationSet> {
        self.styles.get(name)
    }

    /// Returns true if the style exists.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Returns the global (`"*"`) style, if defined.
    pub fn global(&self) -> Option<&DeclarationSet> {
        self.get(GLOBAL_STYLE)
    }

    /// Iterates over style names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Number of styles, including the global style.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if no styles are defined.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, DeclarationSet)> for StyleDictionary {
    fn from_iter<I: IntoIterator<Item = (K, DeclarationSet)>>(iter: I) -> Self {
        Self {
            styles: iter
                .into_iter()
                .map(|(name, declarations)| (name.into(), declarations))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let styles = StyleDictionary::new();
        assert!(styles.is_empty());
        assert_eq!(styles.len(), 0);
        assert!(styles.global().is_none());
    }

    #[test]
    fn test_add_and_get() {
        let styles = StyleDictionary::new().add("foo", [("bar", "baz")]);
        assert_eq!(styles.get("foo").and_then(|d| d.get("bar")), Some("baz"));
        assert!(styles.get("missing").is_none());
    }

    #[test]
    fn test_add_replaces_existing() {
        let styles = StyleDictionary::new()
            .add("foo", [("a", "1")])
            .add("foo", [("b", "2")]);

        let foo = styles.get("foo").unwrap();
        assert!(!foo.contains("a"));
        assert_eq!(foo.get("b"), Some("2"));
        assert_eq!(styles.len(), 1);
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut styles = StyleDictionary::new();
        assert!(styles.insert("foo", [("a", "1")]).is_none());

        let previous = styles.insert("foo", [("a", "2")]).unwrap();
        assert_eq!(previous.get("a"), Some("1"));
    }

    #[test]
    fn test_global_style() {
        let styles = StyleDictionary::new().add(GLOBAL_STYLE, [("foo", "bar")]);
        assert_eq!(styles.global().and_then(|d| d.get("foo")), Some("bar"));
        assert!(styles.contains("*"));
    }

    #[test]
    fn test_from_iter() {
        let styles: StyleDictionary = vec![
            ("a", DeclarationSet::from([("x", "1")])),
            ("b", DeclarationSet::new()),
        ]
        .into_iter()
        .collect();

        let mut names: Vec<_> = styles.names().collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
    }
}

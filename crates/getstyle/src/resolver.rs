//! Style resolution.
//!
//! [`StyleResolver`] owns a [`StyleDictionary`] and turns a list of style
//! names plus optional overrides into inline CSS.
//!
//! # Resolution Order
//!
//! Declarations are merged later-wins, in this order:
//!
//! 1. The global style (`"*"`), if the dictionary defines one
//! 2. Each requested name, left to right
//! 3. The caller's overrides
//!
//! A property keeps the position where it was first introduced, even when a
//! later layer replaces its value.

use log::{debug, trace};

use crate::declarations::DeclarationSet;
use crate::dictionary::StyleDictionary;
use crate::error::{Result, StyleError};
use crate::names::split_names;

/// Resolves style names against a fixed dictionary.
///
/// The dictionary is never modified after construction, so a resolver can be
/// shared across threads and `resolve` called concurrently.
///
/// # Example
///
/// ```rust
/// use getstyle::{DeclarationSet, StyleDictionary, StyleResolver};
///
/// let resolver = StyleResolver::new(
///     StyleDictionary::new()
///         .add("*", [("foo", "bar")])
///         .add("foo", [("bar", "baz")]),
/// );
///
/// assert_eq!(resolver.resolve(None, None).unwrap(), "foo: bar;");
/// assert_eq!(resolver.resolve(Some("foo"), None).unwrap(), "foo: bar; bar: baz;");
///
/// let overrides = DeclarationSet::from([("foo", "qux")]);
/// assert_eq!(
///     resolver.resolve(Some("foo"), Some(&overrides)).unwrap(),
///     "foo: qux; bar: baz;"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    styles: StyleDictionary,
}

impl StyleResolver {
    /// Creates a resolver over the given styles. An empty dictionary is valid.
    pub fn new(styles: StyleDictionary) -> Self {
        Self { styles }
    }

    /// Returns the style dictionary.
    pub fn styles(&self) -> &StyleDictionary {
        &self.styles
    }

    /// Consumes the resolver, returning its dictionary.
    pub fn into_styles(self) -> StyleDictionary {
        self.styles
    }

    /// Resolves style names and overrides into an inline CSS string.
    ///
    /// `names` is a space-separated list; `None` and an empty string both
    /// request no named styles (the global style still applies).
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidName`] for the first requested name that
    /// is not in the dictionary. No CSS is produced in that case.
    pub fn resolve(
        &self,
        names: Option<&str>,
        overrides: Option<&DeclarationSet>,
    ) -> Result<String> {
        self.resolve_declarations(names, overrides)
            .map(|declarations| declarations.to_string())
    }

    /// Merges styles and overrides without serializing them.
    ///
    /// Same semantics and errors as [`resolve`](Self::resolve).
    pub fn resolve_declarations(
        &self,
        names: Option<&str>,
        overrides: Option<&DeclarationSet>,
    ) -> Result<DeclarationSet> {
        let requested = names.unwrap_or_default();
        debug!("resolving styles {:?}", requested);

        let mut merged = self.styles.global().cloned().unwrap_or_default();
        if !merged.is_empty() {
            trace!("applied global style ({} declarations)", merged.len());
        }

        for name in split_names(requested) {
            let Some(declarations) = self.styles.get(name) else {
                debug!("unknown style '{}'", name);
                return Err(StyleError::invalid_name(name));
            };
            trace!(
                "applying style '{}' ({} declarations)",
                name,
                declarations.len()
            );
            merged.merge(declarations);
        }

        if let Some(overrides) = overrides {
            trace!("applying {} overrides", overrides.len());
            merged.merge(overrides);
        }

        debug!("resolved {} declarations", merged.len());
        Ok(merged)
    }
}

impl From<StyleDictionary> for StyleResolver {
    fn from(styles: StyleDictionary) -> Self {
        Self::new(styles)
    }
}

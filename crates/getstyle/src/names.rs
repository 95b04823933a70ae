//! Style name list tokenizer.

/// Splits a space-separated list of style names.
///
/// Only the space character separates names; empty tokens from leading,
/// trailing, or repeated spaces are dropped. Tabs and newlines are part of a
/// name.
///
/// ```rust
/// use getstyle::split_names;
///
/// let names: Vec<_> = split_names("  title   muted ").collect();
/// assert_eq!(names, vec!["title", "muted"]);
/// ```
pub fn split_names(names: &str) -> impl Iterator<Item = &str> {
    names.split(' ').filter(|name| !name.is_empty())
}

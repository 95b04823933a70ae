//! Inline CSS serialization.
//!
//! Declarations are written as `property: value;` segments joined by a single
//! space, the form expected inside an HTML `style="..."` attribute. Nothing
//! is escaped or validated.

use std::fmt;

use crate::declarations::DeclarationSet;

/// Serializes declarations into an inline CSS string.
///
/// An empty set produces an empty string.
///
/// ```rust
/// use getstyle::{to_inline_css, DeclarationSet};
///
/// let decls = DeclarationSet::from([("color", "red"), ("margin", "0")]);
/// assert_eq!(to_inline_css(&decls), "color: red; margin: 0;");
/// ```
pub fn to_inline_css(declarations: &DeclarationSet) -> String {
    declarations.to_string()
}

impl fmt::Display for DeclarationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_serializes_to_empty_string() {
        assert_eq!(to_inline_css(&DeclarationSet::new()), "");
    }

    #[test]
    fn test_single_declaration() {
        let decls = DeclarationSet::from([("foo", "bar")]);
        assert_eq!(to_inline_css(&decls), "foo: bar;");
    }

    #[test]
    fn test_declarations_joined_by_single_space() {
        let decls = DeclarationSet::from([("foo", "bar"), ("bar", "baz")]);
        assert_eq!(to_inline_css(&decls), "foo: bar; bar: baz;");
    }

    #[test]
    fn test_values_written_verbatim() {
        let decls = DeclarationSet::from([("font-family", "\"Helvetica Neue\", sans-serif")]);
        assert_eq!(
            to_inline_css(&decls),
            "font-family: \"Helvetica Neue\", sans-serif;"
        );
    }

    #[test]
    fn test_display_matches_to_inline_css() {
        let decls = DeclarationSet::from([("a", "1"), ("b", "2")]);
        assert_eq!(format!("{}", decls), to_inline_css(&decls));
    }
}

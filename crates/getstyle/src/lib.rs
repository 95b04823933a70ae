//! Getstyle - Resolve named CSS declaration groups into inline styles.
//!
//! Getstyle keeps a dictionary of named declaration groups (styles) and
//! turns a space-separated list of names into the inline CSS you would put
//! in an HTML `style="..."` attribute. It is meant for places where
//! stylesheets are unavailable, such as HTML email.
//!
//! # Quick Start
//!
//! ```rust
//! use getstyle::{DeclarationSet, StyleDictionary, StyleResolver};
//!
//! let resolver = StyleResolver::new(
//!     StyleDictionary::new()
//!         // Applied to every resolution
//!         .add("*", [("font-family", "Arial, sans-serif")])
//!         .add("button", [("padding", "8px 16px"), ("color", "#fff")])
//!         .add("danger", [("background", "#c00")]),
//! );
//!
//! let css = resolver.resolve(Some("button danger"), None).unwrap();
//! assert_eq!(
//!     css,
//!     "font-family: Arial, sans-serif; padding: 8px 16px; color: #fff; background: #c00;"
//! );
//!
//! // Ad-hoc overrides apply last
//! let overrides = DeclarationSet::from([("color", "#ff0")]);
//! let css = resolver.resolve(Some("button"), Some(&overrides)).unwrap();
//! assert_eq!(
//!     css,
//!     "font-family: Arial, sans-serif; padding: 8px 16px; color: #ff0;"
//! );
//! ```
//!
//! # Merge Semantics
//!
//! Styles are merged later-wins: the global style `"*"` first (when
//! defined), then each requested name left to right, then the overrides.
//! A property that is set again keeps its original position and takes the
//! new value; a new property is appended.
//!
//! Requesting a name the dictionary does not define fails with
//! [`StyleError::InvalidName`]. The global style is optional and never fails.
//!
//! # Features
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `minijinja` | A `style()` template function, see `register_style_function` |

mod css;
mod declarations;
mod dictionary;
mod error;
mod names;
mod resolver;

#[cfg(feature = "minijinja")]
mod template;

// Re-export public API
pub use css::to_inline_css;
pub use declarations::{DeclarationSet, Iter};
pub use dictionary::{StyleDictionary, GLOBAL_STYLE};
pub use error::{Result, StyleError};
pub use names::split_names;
pub use resolver::StyleResolver;

#[cfg(feature = "minijinja")]
pub use template::{register_style_function, register_style_function_as, STYLE_FUNCTION};

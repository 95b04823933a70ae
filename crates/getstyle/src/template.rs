//! MiniJinja integration.
//!
//! Registers a `style()` global function so templates can write resolved
//! inline CSS straight into a `style` attribute:
//!
//! ```jinja
//! <td style="{{ style('cell muted', width='120px') }}">...</td>
//! ```
//!
//! The first positional argument is the space-separated style name list and
//! may be omitted or `none`. Keyword arguments become overrides in the order
//! they are written; non-string values are stringified, so
//! `style(none, width=10)` yields `width: 10;`. A `none` or undefined value
//! sets nothing. Pass the names (or `none`) explicitly whenever overrides are
//! given.

use std::sync::Arc;

use minijinja::value::{Kwargs, Value};
use minijinja::{Environment, Error, ErrorKind};

use crate::declarations::DeclarationSet;
use crate::resolver::StyleResolver;

/// Default name of the template function.
pub const STYLE_FUNCTION: &str = "style";

/// Registers the `style()` function on a MiniJinja environment.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use getstyle::{register_style_function, StyleDictionary, StyleResolver};
/// use minijinja::Environment;
///
/// let resolver = StyleResolver::new(
///     StyleDictionary::new().add("title", [("font-weight", "bold")]),
/// );
///
/// let mut env = Environment::new();
/// register_style_function(&mut env, Arc::new(resolver));
///
/// let html = env
///     .render_str(r#"<h1 style="{{ style('title') }}">Hi</h1>"#, ())
///     .unwrap();
/// assert_eq!(html, r#"<h1 style="font-weight: bold;">Hi</h1>"#);
/// ```
pub fn register_style_function(env: &mut Environment<'static>, resolver: Arc<StyleResolver>) {
    register_style_function_as(env, STYLE_FUNCTION, resolver);
}

/// Registers the style function under a custom name.
pub fn register_style_function_as(
    env: &mut Environment<'static>,
    name: &'static str,
    resolver: Arc<StyleResolver>,
) {
    env.add_function(
        name,
        move |names: Option<String>, kwargs: Kwargs| -> Result<String, Error> {
            let overrides = overrides_from_kwargs(&kwargs)?;
            kwargs.assert_all_used()?;

            resolver
                .resolve(names.as_deref(), Some(&overrides))
                .map_err(|e| {
                    Error::new(ErrorKind::InvalidOperation, e.to_string()).with_source(e)
                })
        },
    );
}

fn overrides_from_kwargs(kwargs: &Kwargs) -> Result<DeclarationSet, Error> {
    let mut overrides = DeclarationSet::new();
    for property in kwargs.args() {
        let value: Value = kwargs.get(property)?;
        if value.is_none() || value.is_undefined() {
            continue;
        }
        overrides.set(property, value.to_string());
    }
    Ok(overrides)
}

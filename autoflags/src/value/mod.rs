//! Settable values bound to flags.
//!
//! A [`Value`] knows how to parse itself from a command-line argument and how
//! to render itself for usage output. Built-in scalars are wrapped in
//! [`ScalarValue`]; user-defined types implement [`Value`] directly and take
//! priority over the built-in kinds when a structure is bound.

use std::fmt;

use crate::ValueError;

mod func;
mod parse;
mod scalar;
mod text;

pub use func::FuncValue;
pub use scalar::{Scalar, ScalarValue};
pub use text::TextValue;

#[cfg(test)]
mod tests;

/// A flag value that can be set from text and rendered back as text.
///
/// The [`Display`](fmt::Display) implementation provides the textual form
/// shown as the flag's default in usage output.
///
/// # Examples
///
/// ```
/// use std::fmt;
/// use autoflags::{Value, ValueError};
///
/// #[derive(Default)]
/// struct Hosts(Vec<String>);
///
/// impl fmt::Display for Hosts {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(&self.0.join(","))
///     }
/// }
///
/// impl Value for Hosts {
///     fn set(&mut self, text: &str) -> Result<(), ValueError> {
///         self.0.extend(text.split(',').map(str::to_owned));
///         Ok(())
///     }
/// }
///
/// let mut hosts = Hosts::default();
/// hosts.set("a,b").unwrap();
/// assert_eq!(hosts.to_string(), "a,b");
/// ```
pub trait Value: fmt::Display + Send {
    /// Parses `text` and stores the result.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when `text` is not a valid representation.
    fn set(&mut self, text: &str) -> Result<(), ValueError>;

    /// Returns `true` when a bare `-flag` should be treated as `-flag=true`.
    fn is_bool_flag(&self) -> bool {
        false
    }

    /// Placeholder used for the flag's argument in usage output.
    fn type_name(&self) -> &'static str {
        "value"
    }

    /// Returns `true` when `text` is the rendering of the type's zero value.
    ///
    /// Usage output omits the `(default …)` suffix for zero defaults.
    fn is_zero_text(&self, text: &str) -> bool {
        text.is_empty()
    }
}

impl<V: Value + ?Sized> Value for &mut V {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        (**self).set(text)
    }

    fn is_bool_flag(&self) -> bool {
        (**self).is_bool_flag()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn is_zero_text(&self, text: &str) -> bool {
        (**self).is_zero_text(text)
    }
}

impl<V: Value + ?Sized> Value for Box<V> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        (**self).set(text)
    }

    fn is_bool_flag(&self) -> bool {
        (**self).is_bool_flag()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn is_zero_text(&self, text: &str) -> bool {
        (**self).is_zero_text(text)
    }
}

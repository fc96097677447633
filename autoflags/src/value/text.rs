//! Values for any type with `FromStr` and `Display` implementations.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use super::Value;
use crate::ValueError;

/// A [`Value`] writing through to a type parsed with [`FromStr`].
///
/// Parse failures keep the type's own error as the source of
/// [`ValueError::Other`].
pub struct TextValue<'a, T> {
    target: &'a mut T,
}

impl<'a, T> TextValue<'a, T> {
    /// Wraps `target`; parsed arguments are stored in it.
    pub const fn new(target: &'a mut T) -> Self {
        Self { target }
    }
}

impl<T: fmt::Display> fmt::Display for TextValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.target, f)
    }
}

impl<T> Value for TextValue<'_, T>
where
    T: FromStr + fmt::Display + Send,
    T::Err: Error + Send + Sync + 'static,
{
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        *self.target = text.parse().map_err(ValueError::other)?;
        Ok(())
    }
}

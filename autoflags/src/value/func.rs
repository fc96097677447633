//! Closure-backed flag values.

use std::fmt;

use super::Value;
use crate::ValueError;

/// A [`Value`] that hands every occurrence of the flag to a closure.
///
/// Registered through [`FlagSet::func`](crate::FlagSet::func) and
/// [`FlagSet::bool_func`](crate::FlagSet::bool_func). The value renders as
/// empty text, so usage output never shows a default for it.
pub struct FuncValue<F> {
    callback: F,
    is_bool: bool,
}

impl<F> FuncValue<F>
where
    F: FnMut(&str) -> Result<(), ValueError> + Send,
{
    /// Creates a value that requires an argument.
    pub const fn new(callback: F) -> Self {
        Self {
            callback,
            is_bool: false,
        }
    }

    /// Creates a value that may appear bare, receiving `"true"`.
    pub const fn boolean(callback: F) -> Self {
        Self {
            callback,
            is_bool: true,
        }
    }
}

impl<F> fmt::Display for FuncValue<F> {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl<F> Value for FuncValue<F>
where
    F: FnMut(&str) -> Result<(), ValueError> + Send,
{
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        (self.callback)(text)
    }

    fn is_bool_flag(&self) -> bool {
        self.is_bool
    }
}

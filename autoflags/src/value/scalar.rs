//! Built-in scalar kinds and the value wrapper that binds them to flags.

use std::fmt;
use std::time::Duration;

use super::Value;
use super::parse::{parse_bool, parse_f64, parse_i64, parse_u64};
use crate::ValueError;
use crate::reflect::{Kind, Slot};

mod sealed {
    pub trait Sealed {}
}

/// Types the binder registers without a [`Value`] implementation.
///
/// The set is closed: `isize`, `i64`, `usize`, `u64`, `f64`, `bool`,
/// `String` and [`Duration`].
pub trait Scalar: sealed::Sealed + Default + Send + Sized {
    /// Runtime type tag reported for fields of this type.
    const KIND: Kind;

    /// Placeholder used for the flag's argument in usage output.
    const TYPE_NAME: &'static str;

    /// Parses the command-line form of the scalar.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] when `text` is malformed or out of range.
    fn parse_text(text: &str) -> Result<Self, ValueError>;

    /// Renders the scalar for usage output.
    fn render(&self) -> String;

    /// Describes `target` as a field slot of the matching kind.
    fn slot(target: &mut Self) -> Slot<'_>;
}

macro_rules! impl_scalar {
    ($ty:ty, $kind:ident, $type_name:literal, $parse:expr) => {
        impl sealed::Sealed for $ty {}

        impl Scalar for $ty {
            const KIND: Kind = Kind::$kind;
            const TYPE_NAME: &'static str = $type_name;

            fn parse_text(text: &str) -> Result<Self, ValueError> {
                $parse(text)
            }

            fn render(&self) -> String {
                self.to_string()
            }

            fn slot(target: &mut Self) -> Slot<'_> {
                Slot::$kind(target)
            }
        }
    };
}

impl_scalar!(i64, Int64, "int", parse_i64);
impl_scalar!(u64, Uint64, "uint", parse_u64);
impl_scalar!(f64, Float64, "float", parse_f64);
impl_scalar!(bool, Bool, "bool", parse_bool);
impl_scalar!(isize, Int, "int", |text| parse_i64(text)
    .and_then(|value| isize::try_from(value).map_err(|_| ValueError::Range)));
impl_scalar!(usize, Uint, "uint", |text| parse_u64(text)
    .and_then(|value| usize::try_from(value).map_err(|_| ValueError::Range)));
impl_scalar!(String, String, "string", |text: &str| -> Result<String, ValueError> {
    Ok(text.to_owned())
});

impl sealed::Sealed for Duration {}

impl Scalar for Duration {
    const KIND: Kind = Kind::Duration;
    const TYPE_NAME: &'static str = "duration";

    fn parse_text(text: &str) -> Result<Self, ValueError> {
        Ok(humantime::parse_duration(text)?)
    }

    fn render(&self) -> String {
        humantime::format_duration(*self).to_string()
    }

    fn slot(target: &mut Self) -> Slot<'_> {
        Slot::Duration(target)
    }
}

/// A [`Value`] writing through to a built-in scalar.
pub struct ScalarValue<'a, T> {
    target: &'a mut T,
}

impl<'a, T: Scalar> ScalarValue<'a, T> {
    /// Wraps `target`; parsed arguments are stored in it.
    pub const fn new(target: &'a mut T) -> Self {
        Self { target }
    }
}

impl<T: Scalar> fmt::Display for ScalarValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target.render())
    }
}

impl<T: Scalar> fmt::Debug for ScalarValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarValue")
            .field("kind", &T::KIND)
            .field("value", &self.target.render())
            .finish()
    }
}

impl<T: Scalar> Value for ScalarValue<'_, T> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        *self.target = T::parse_text(text)?;
        Ok(())
    }

    fn is_bool_flag(&self) -> bool {
        T::KIND == Kind::Bool
    }

    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn is_zero_text(&self, text: &str) -> bool {
        text == T::default().render()
    }
}

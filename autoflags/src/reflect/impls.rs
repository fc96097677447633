//! `Flags` and `Bindable` implementations for standard types.

use std::time::Duration;

use super::{Bindable, Flags, Shape};
use crate::BindError;

impl<'a, T: Flags + ?Sized> Bindable<'a> for &'a mut T {
    fn into_shape(self) -> Result<Shape<'a>, BindError> {
        Ok(T::reflect(self))
    }
}

impl<'a, T: Flags + ?Sized> Bindable<'a> for Option<&'a mut T> {
    fn into_shape(self) -> Result<Shape<'a>, BindError> {
        self.ok_or(BindError::InvalidArgument)?.into_shape()
    }
}

impl<'a> Bindable<'a> for &str {
    fn into_shape(self) -> Result<Shape<'a>, BindError> {
        Err(BindError::PointerExpected)
    }
}

impl Flags for str {
    fn reflect(&mut self) -> Shape<'_> {
        Shape::Other { kind: "string" }
    }
}

macro_rules! non_struct {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl Flags for $ty {
                fn reflect(&mut self) -> Shape<'_> {
                    Shape::Other { kind: $kind }
                }
            }

            impl<'a> Bindable<'a> for $ty {
                fn into_shape(self) -> Result<Shape<'a>, BindError> {
                    Err(BindError::PointerExpected)
                }
            }
        )*
    };
}

non_struct!(
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    isize => "int",
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
    usize => "uint",
    f32 => "float32",
    f64 => "float64",
    bool => "bool",
    char => "char",
    String => "string",
    Duration => "duration",
);

impl<T> Flags for Vec<T> {
    fn reflect(&mut self) -> Shape<'_> {
        Shape::Other { kind: "slice" }
    }
}

impl<T: ?Sized> Flags for Box<T> {
    fn reflect(&mut self) -> Shape<'_> {
        Shape::Other { kind: "pointer" }
    }
}

impl<T: ?Sized> Flags for &mut T {
    fn reflect(&mut self) -> Shape<'_> {
        Shape::Other { kind: "pointer" }
    }
}

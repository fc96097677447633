//! Autoref probes that classify field types inside generated code.
//!
//! Generated code calls `(&&&Probe::new(&mut field)).slot()` with the three
//! probe traits in scope. Method resolution tries the receiver with the most
//! references first, so a field type implementing [`Value`] wins over a
//! built-in [`Scalar`], and any other type falls through to
//! [`Slot::Unsupported`].

use std::cell::Cell;

use super::Slot;
use crate::{Scalar, Value};

/// Holds the field borrow until a probe trait claims it.
pub struct Probe<'a, T: ?Sized> {
    target: Cell<Option<&'a mut T>>,
}

impl<'a, T: ?Sized> Probe<'a, T> {
    /// Wraps the storage of one field.
    pub const fn new(target: &'a mut T) -> Self {
        Self {
            target: Cell::new(Some(target)),
        }
    }

    fn take(&self) -> Option<&'a mut T> {
        self.target.take()
    }
}

/// Highest priority: settable values.
pub trait ValueSlot<'a> {
    /// Describes the probed field.
    fn slot(&self) -> Slot<'a>;
}

impl<'a, T: Value + 'a> ValueSlot<'a> for &&Probe<'a, T> {
    fn slot(&self) -> Slot<'a> {
        self.take()
            .map_or(Slot::Unaddressable, |target| Slot::Value(target))
    }
}

/// Second priority: built-in scalars.
pub trait ScalarSlot<'a> {
    /// Describes the probed field.
    fn slot(&self) -> Slot<'a>;
}

impl<'a, T: Scalar> ScalarSlot<'a> for &Probe<'a, T> {
    fn slot(&self) -> Slot<'a> {
        self.take().map_or(Slot::Unaddressable, <T as Scalar>::slot)
    }
}

/// Lowest priority: everything else.
pub trait FallbackSlot<'a> {
    /// Describes the probed field.
    fn slot(&self) -> Slot<'a>;
}

impl<'a, T: ?Sized> FallbackSlot<'a> for Probe<'a, T> {
    fn slot(&self) -> Slot<'a> {
        Slot::Unsupported
    }
}

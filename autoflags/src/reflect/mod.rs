//! Field descriptors produced by `#[derive(Flags)]`.
//!
//! Rust has no runtime reflection, so the derive emits a [`Shape`] describing
//! the deriving type: for structs, one [`Field`] per declared field carrying
//! the field name, its `#[flag = "..."]` annotation and a [`Slot`] that
//! borrows the field's storage with its runtime type tag.

use std::fmt;
use std::time::Duration;

use crate::{BindError, Value};

mod impls;
pub(crate) mod probe;


/// Runtime type tag of a bindable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `isize`.
    Int,
    /// `i64`.
    Int64,
    /// `usize`.
    Uint,
    /// `u64`.
    Uint64,
    /// `f64`.
    Float64,
    /// `bool`.
    Bool,
    /// `String`.
    String,
    /// [`std::time::Duration`].
    Duration,
    /// A type implementing [`Value`].
    Value,
}

impl Kind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint64 => "uint64",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Duration => "duration",
            Self::Value => "value",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed storage of a single field, tagged with its kind.
pub enum Slot<'a> {
    /// Machine-word signed integer.
    Int(&'a mut isize),
    /// 64-bit signed integer.
    Int64(&'a mut i64),
    /// Machine-word unsigned integer.
    Uint(&'a mut usize),
    /// 64-bit unsigned integer.
    Uint64(&'a mut u64),
    /// 64-bit float.
    Float64(&'a mut f64),
    /// Boolean.
    Bool(&'a mut bool),
    /// Owned string.
    String(&'a mut String),
    /// Duration, written as `15m`, `1500ms` and similar.
    Duration(&'a mut Duration),
    /// A type implementing the settable-value protocol.
    Value(&'a mut dyn Value),
    /// A type the binder cannot register.
    Unsupported,
    /// A field whose storage cannot be written through, such as a shared
    /// reference.
    Unaddressable,
}

impl Slot<'_> {
    /// Returns the kind of a registrable slot.
    ///
    /// Unsupported and unaddressable slots have no kind.
    #[must_use]
    pub const fn kind(&self) -> Option<Kind> {
        Some(match self {
            Self::Int(_) => Kind::Int,
            Self::Int64(_) => Kind::Int64,
            Self::Uint(_) => Kind::Uint,
            Self::Uint64(_) => Kind::Uint64,
            Self::Float64(_) => Kind::Float64,
            Self::Bool(_) => Kind::Bool,
            Self::String(_) => Kind::String,
            Self::Duration(_) => Kind::Duration,
            Self::Value(_) => Kind::Value,
            Self::Unsupported | Self::Unaddressable => return None,
        })
    }

    /// Returns `false` for storage that cannot be written through.
    #[must_use]
    pub const fn is_addressable(&self) -> bool {
        !matches!(self, Self::Unaddressable)
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.kind()) {
            (Self::Unsupported, _) => f.write_str("Unsupported"),
            (Self::Unaddressable, _) | (_, None) => f.write_str("Unaddressable"),
            (_, Some(kind)) => f.debug_tuple("Slot").field(&kind).finish(),
        }
    }
}

/// Descriptor of one field of a bindable structure.
#[derive(Debug)]
pub struct Field<'a> {
    pub(crate) name: &'static str,
    pub(crate) annotation: Option<&'static str>,
    pub(crate) slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Describes a field named `name`.
    ///
    /// `annotation` is the raw `"<flag>[,<usage>]"` tag, if any.
    #[must_use]
    pub const fn new(name: &'static str, annotation: Option<&'static str>, slot: Slot<'a>) -> Self {
        Self {
            name,
            annotation,
            slot,
        }
    }

    /// Declared field name; tuple fields use their index.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Raw annotation text.
    #[must_use]
    pub const fn annotation(&self) -> Option<&'static str> {
        self.annotation
    }

    /// Borrowed storage of the field.
    #[must_use]
    pub const fn slot(&self) -> &Slot<'a> {
        &self.slot
    }
}

/// Structural description of a value passed to the binder.
#[derive(Debug)]
pub enum Shape<'a> {
    /// A struct and its fields in declaration order.
    Struct(Vec<Field<'a>>),
    /// Anything else; `kind` names it for diagnostics.
    Other {
        /// Short description such as `enum` or `int64`.
        kind: &'static str,
    },
}

/// Types that can describe their fields to the binder.
///
/// Usually derived with `#[derive(Flags)]`. Manual implementations build
/// [`Field`]s directly:
///
/// ```
/// use autoflags::{Field, FlagSet, Flags, Shape, Slot};
///
/// struct Server {
///     port: u64,
/// }
///
/// impl Flags for Server {
///     fn reflect(&mut self) -> Shape<'_> {
///         Shape::Struct(vec![Field::new(
///             "port",
///             Some("port,listen port"),
///             Slot::Uint64(&mut self.port),
///         )])
///     }
/// }
///
/// let mut server = Server { port: 8080 };
/// {
///     let mut flags = FlagSet::new("server", autoflags::ErrorHandling::ContinueOnError);
///     autoflags::define_with_registry(&mut flags, &mut server).unwrap();
///     flags.parse(["-port", "9090"]).unwrap();
/// }
/// assert_eq!(server.port, 9090);
/// ```
pub trait Flags {
    /// Describes `self`, borrowing every described field.
    fn reflect(&mut self) -> Shape<'_>;
}

/// Inputs accepted by [`define`](crate::define) and
/// [`define_with_registry`](crate::define_with_registry).
///
/// Only mutable references to structs bind successfully. Values passed by
/// value report [`BindError::PointerExpected`]; absent references and
/// references to non-structs report [`BindError::InvalidArgument`].
pub trait Bindable<'a> {
    /// Resolves the input to the shape of the referenced value.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::PointerExpected`] or
    /// [`BindError::InvalidArgument`] for inputs that cannot be bound.
    fn into_shape(self) -> Result<Shape<'a>, BindError>;
}

//! Binds tagged struct fields to flags.

use crate::reflect::{Bindable, Field, Shape, Slot};
use crate::{BindError, FlagError, FlagSet};


/// The two parts of a `#[flag = "<name>[,<usage>]"]` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Annotation<'t> {
    pub(crate) name: &'t str,
    pub(crate) usage: &'t str,
}

impl<'t> Annotation<'t> {
    /// Splits `tag` on its first comma. The name is not validated.
    pub(crate) fn parse(tag: &'t str) -> Self {
        tag.split_once(',').map_or(
            Self {
                name: tag,
                usage: "",
            },
            |(name, usage)| Self { name, usage },
        )
    }
}

/// Binds `config` against a fresh [`FlagSet::command_line`] and returns it.
///
/// Call [`FlagSet::parse_command_line`] on the result to populate the
/// structure from the process arguments.
///
/// Every call returns its own set, so a program splitting its flags across
/// several structures should create one [`FlagSet`] and bind each structure
/// into it with [`define_with_registry`] before parsing once. Parsing a set
/// returned here rejects flags that belong to another structure.
///
/// # Errors
///
/// See [`define_with_registry`].
///
/// # Examples
///
/// ```no_run
/// use autoflags::Flags;
///
/// #[derive(Flags)]
/// struct Config {
///     #[flag = "name,name of user"]
///     name: String,
///     #[flag = "age"]
///     age: usize,
///     married: bool,
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut config = Config { name: "John Doe".into(), age: 34, married: false };
/// autoflags::define(&mut config)?.parse_command_line()?;
/// # Ok(())
/// # }
/// ```
pub fn define<'a, T>(config: T) -> Result<FlagSet<'a>, BindError>
where
    T: Bindable<'a>,
{
    let mut flags = FlagSet::command_line();
    define_with_registry(&mut flags, config)?;
    Ok(flags)
}

/// Registers a flag for every tagged field of `config` in `registry`.
///
/// Each field annotated `#[flag = "<name>"]` or
/// `#[flag = "<name>,<usage>"]` is registered under `<name>` with its current
/// value as the default. Fields implementing [`Value`](crate::Value) register
/// through [`FlagSet::var`]; `isize`, `i64`, `usize`, `u64`, `f64`, `bool`,
/// `String` and `Duration` fields use the matching typed definition.
///
/// Untagged fields, fields with an empty tag, shared-reference fields and
/// fields of any other type are skipped without error.
///
/// # Errors
///
/// Validation happens before any field is registered, in this order:
/// [`BindError::PointerExpected`] for inputs passed by value,
/// [`BindError::InvalidArgument`] for absent references or non-structs, and
/// [`BindError::InvalidRegistry`] when `registry` is `None`.
/// A definition refused by the registry, such as a duplicate name, is
/// returned as [`BindError::Flag`]; fields processed before it stay
/// registered.
pub fn define_with_registry<'r, 'a: 'r, R, T>(registry: R, config: T) -> Result<(), BindError>
where
    R: Into<Option<&'r mut FlagSet<'a>>>,
    T: Bindable<'a>,
{
    let Shape::Struct(fields) = config.into_shape()? else {
        return Err(BindError::InvalidArgument);
    };
    let flags = registry.into().ok_or(BindError::InvalidRegistry)?;
    for field in fields {
        bind_field(flags, field)?;
    }
    Ok(())
}

fn bind_field<'a>(registry: &mut FlagSet<'a>, field: Field<'a>) -> Result<(), FlagError> {
    let Field {
        name: field_name,
        annotation,
        slot,
    } = field;
    if !slot.is_addressable() {
        return Ok(());
    }
    let Some(tag) = annotation.filter(|tag| !tag.is_empty()) else {
        return Ok(());
    };
    let Some(kind) = slot.kind() else {
        return Ok(());
    };
    let Annotation { name, usage } = Annotation::parse(tag);
    match slot {
        Slot::Value(value) => registry.var(value, name, usage)?,
        Slot::Int(target) => {
            let current = *target;
            registry.int_var(target, name, current, usage)?;
        }
        Slot::Int64(target) => {
            let current = *target;
            registry.int64_var(target, name, current, usage)?;
        }
        Slot::Uint(target) => {
            let current = *target;
            registry.uint_var(target, name, current, usage)?;
        }
        Slot::Uint64(target) => {
            let current = *target;
            registry.uint64_var(target, name, current, usage)?;
        }
        Slot::Float64(target) => {
            let current = *target;
            registry.float64_var(target, name, current, usage)?;
        }
        Slot::Bool(target) => {
            let current = *target;
            registry.bool_var(target, name, current, usage)?;
        }
        Slot::String(target) => {
            let current = target.clone();
            registry.string_var(target, name, current, usage)?;
        }
        Slot::Duration(target) => {
            let current = *target;
            registry.duration_var(target, name, current, usage)?;
        }
        Slot::Unsupported | Slot::Unaddressable => return Ok(()),
    }
    tracing::debug!(field = field_name, flag = name, %kind, "bound field to flag");
    Ok(())
}

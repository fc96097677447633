//! Primary error enums for binding, registration and parsing flows.

use thiserror::Error;

/// Errors returned when binding a structure to a flag set.
///
/// The first three variants describe caller mistakes detected before any
/// field is inspected. They are terminal: retrying with the same inputs fails
/// the same way.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    /// The configuration was passed by value instead of by reference.
    #[error("pointer expected")]
    PointerExpected,

    /// The reference was absent or did not point at a struct.
    #[error("mutable reference to a struct expected")]
    InvalidArgument,

    /// An explicit flag set was required but none was supplied.
    #[error("flag set expected")]
    InvalidRegistry,

    /// The flag set refused to register one of the tagged fields.
    #[error(transparent)]
    Flag(#[from] FlagError),
}

/// Errors raised by [`FlagSet`](crate::FlagSet) while defining or parsing
/// flags.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlagError {
    /// `-h` or `-help` was given without a matching flag definition.
    #[error("flag: help requested")]
    Help,

    /// An argument started with `-` but could not name a flag.
    #[error("bad flag syntax: {0}")]
    BadSyntax(String),

    /// An argument named a flag that was never defined.
    #[error("flag provided but not defined: -{0}")]
    NotDefined(String),

    /// A non-boolean flag appeared as the final argument without a value.
    #[error("flag needs an argument: -{0}")]
    MissingArgument(String),

    /// A flag value could not be parsed.
    #[error("invalid value {value:?} for flag -{name}: {source}")]
    InvalidValue {
        /// Flag that received the value.
        name: String,
        /// Text supplied on the command line.
        value: String,
        /// Reason reported by the flag's value.
        #[source]
        source: ValueError,
    },

    /// An explicit `-flag=value` for a boolean flag could not be parsed.
    #[error("invalid boolean value {value:?} for -{name}: {source}")]
    InvalidBool {
        /// Flag that received the value.
        name: String,
        /// Text supplied on the command line.
        value: String,
        /// Reason reported by the flag's value.
        #[source]
        source: ValueError,
    },

    /// A bare boolean flag rejected the implicit `true`.
    #[error("invalid boolean flag {name}: {source}")]
    InvalidBoolFlag {
        /// Flag that was toggled.
        name: String,
        /// Reason reported by the flag's value.
        #[source]
        source: ValueError,
    },

    /// [`FlagSet::set`](crate::FlagSet::set) named an unknown flag.
    #[error("no such flag -{0}")]
    NoSuchFlag(String),

    /// [`FlagSet::set`](crate::FlagSet::set) supplied an unparsable value.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// A flag with the same name already exists in the set.
    #[error("{}flag redefined: {name}", set_prefix(.set))]
    Redefined {
        /// Name of the flag set, possibly empty.
        set: String,
        /// Name of the duplicated flag.
        name: String,
    },

    /// The flag name can never be matched on a command line.
    #[error("flag {name:?} {reason}")]
    InvalidName {
        /// Rejected flag name.
        name: String,
        /// Short explanation such as `begins with -`.
        reason: &'static str,
    },
}

fn set_prefix(set: &str) -> String {
    if set.is_empty() {
        String::new()
    } else {
        format!("{set} ")
    }
}

/// Errors reported by a [`Value`](crate::Value) when parsing its textual
/// form.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The text is not a valid literal for the value's type.
    #[error("parse error")]
    Syntax,

    /// The literal is valid but does not fit the value's type.
    #[error("value out of range")]
    Range,

    /// The text is not a valid duration.
    #[error(transparent)]
    Duration(#[from] humantime::DurationError),

    /// The value rejected the text with a custom explanation.
    #[error("{0}")]
    Invalid(String),

    /// Any other error produced by a custom value.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl ValueError {
    /// Wraps an arbitrary error produced while parsing a custom value.
    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(err))
    }
}

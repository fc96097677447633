//! Expose tagged struct fields as command-line flags.
//!
//! Derive [`Flags`] on a configuration struct, tag the fields to expose with
//! `#[flag = "<name>"]` or `#[flag = "<name>,<usage>"]`, and bind the struct
//! to a [`FlagSet`]. Parsing the set writes straight into the tagged fields;
//! their values before binding become the flags' defaults.
//!
//! ```
//! use autoflags::{ErrorHandling, FlagSet, Flags};
//!
//! #[derive(Debug, PartialEq, Flags)]
//! struct Config {
//!     #[flag = "name,name of user"]
//!     name: String,
//!     #[flag = "age"]
//!     age: usize,
//!     married: bool, // not exposed
//! }
//!
//! let mut config = Config { name: "John Doe".into(), age: 34, married: false };
//! {
//!     let mut flags = FlagSet::new("users", ErrorHandling::ContinueOnError);
//!     autoflags::define_with_registry(&mut flags, &mut config).unwrap();
//!     flags.parse(["-name", "Jane Roe", "-age", "29"]).unwrap();
//! }
//! assert_eq!(config, Config { name: "Jane Roe".into(), age: 29, married: false });
//! ```
//!
//! Field types implementing [`Value`] are bound through that implementation;
//! the built-in kinds are `isize`, `i64`, `usize`, `u64`, `f64`, `bool`,
//! `String` and [`std::time::Duration`]. Other field types, shared-reference
//! fields, and untagged fields are skipped.

pub use autoflags_macros::Flags;

mod bind;
mod error;
mod flag_set;
mod reflect;
mod value;

pub use bind::{define, define_with_registry};
pub use error::{BindError, FlagError, ValueError};
pub use flag_set::{ErrorHandling, Flag, FlagSet};
pub use reflect::{Bindable, Field, Flags, Kind, Shape, Slot};
pub use value::{FuncValue, Scalar, ScalarValue, TextValue, Value};

#[doc(hidden)]
pub mod __private {
    //! Items referenced by `#[derive(Flags)]` output. Not public API.

    pub mod probe {
        //! Field classification used by generated code.

        pub use crate::reflect::probe::{FallbackSlot, Probe, ScalarSlot, ValueSlot};
    }
}

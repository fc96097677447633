//! Error types produced while binding structures and parsing flags.

mod types;

pub use types::{BindError, FlagError, ValueError};

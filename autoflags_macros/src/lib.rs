//! Procedural macros for `autoflags`.
//!
//! The [`Flags`] derive describes a type's fields to the `autoflags` binder.
//! Fields tagged `#[flag = "<name>[,<usage>]"]` become flags once the value is
//! bound to a flag set; untagged fields are described but never registered.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `autoflags::Flags`.
///
/// Field attributes:
///
/// - `#[flag = "name"]` or `#[flag = "name,usage"]` exposes the field as
///   `-name`. `#[flag("name,usage")]` is accepted as well.
///
/// Container attributes:
///
/// - `#[flags(crate = "path")]` references the runtime crate through `path`
///   when it is imported under another name.
#[proc_macro_derive(Flags, attributes(flag, flags))]
pub fn derive_flags(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    derive::expand(&derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

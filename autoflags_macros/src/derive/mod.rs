//! Expansion of `#[derive(Flags)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod parse;

#[cfg(test)]
mod tests;

/// Parses `input` and generates the `Flags` and `Bindable` implementations.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let krate = crate_path::resolve(parsed.attrs.crate_path.as_ref());
    Ok(generate::implementations(&parsed, &krate))
}

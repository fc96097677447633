//! Path prefix for runtime items referenced by generated code.
//!
//! A caller that renamed the dependency points the derive at the new name
//! with `#[flags(crate = "...")]`; otherwise items resolve through
//! `autoflags`.

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::Ident;

/// Name the runtime crate is expected under when no override is given.
const RUNTIME_CRATE: &str = "autoflags";

pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(
        || Ident::new(RUNTIME_CRATE, Span::call_site()).into_token_stream(),
        ToTokens::to_token_stream,
    )
}

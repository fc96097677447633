//! Literal parsing helpers for derive attributes.

use syn::{Expr, ExprLit, Lit, LitStr, Meta};

/// Parses a string literal from a nested `key = "..."` attribute entry.
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}

/// Extracts the string literal from `#[key = "..."]` or `#[key("...")]`.
///
/// Bare `#[key]` and non-string values are rejected.
pub(crate) fn attr_lit_str(meta: &Meta, key: &str) -> syn::Result<LitStr> {
    let message = || format!("`{key}` expects a string literal, as in #[{key} = \"name,usage\"]");
    match meta {
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) => Ok(s.clone()),
            other => Err(syn::Error::new_spanned(other, message())),
        },
        Meta::List(list) => list
            .parse_args::<LitStr>()
            .map_err(|err| syn::Error::new(err.span(), message())),
        Meta::Path(path) => Err(syn::Error::new_spanned(path, message())),
    }
}

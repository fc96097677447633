//! Parsing utilities for the `Flags` derive macro.

use syn::{Attribute, LitStr};

mod input;
mod literals;
mod type_utils;

pub(crate) use input::{Body, FieldInput, ParsedInput, parse_input};
use literals::{attr_lit_str, lit_str};
use type_utils::is_shared_reference;

/// Container-level `#[flags(...)]` settings.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[flags(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `autoflags::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level `#[flag = "..."]` annotation.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub annotation: Option<LitStr>,
}

/// Extracts `#[flags(...)]` metadata applied to the deriving type.
///
/// Only `crate` is recognised; any other key is rejected so misspellings
/// surface at compile time.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("flags")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let s = lit_str(&meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            } else {
                Err(meta.error("unknown `flags` attribute key; expected `crate`"))
            }
        })?;
    }
    Ok(out)
}

/// Parses the `#[flag]` annotation of a single field.
///
/// A field carries at most one annotation; its text is kept verbatim and
/// split into name and usage by the runtime binder.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("flag")) {
        if out.annotation.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate `flag` attribute; a field takes a single annotation",
            ));
        }
        out.annotation = Some(attr_lit_str(&attr.meta, "flag")?);
    }
    Ok(out)
}

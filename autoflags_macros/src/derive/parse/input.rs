//! Input parsing for the `Flags` derive macro.
//!
//! Gathers the type identifier, generics, container attributes and, for
//! structs, every field with its annotation in one pass so expansion fails
//! fast on malformed attributes.

use syn::ext::IdentExt as _;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Index, LitStr, Member};

use super::{StructAttrs, is_shared_reference, parse_field_attrs, parse_struct_attrs};

/// Everything generation needs from the deriving type.
pub(crate) struct ParsedInput {
    pub ident: Ident,
    pub generics: Generics,
    pub attrs: StructAttrs,
    pub body: Body,
}

/// Structs list their fields; other items only report what they are.
pub(crate) enum Body {
    Struct(Vec<FieldInput>),
    Other(&'static str),
}

/// One declared field.
pub(crate) struct FieldInput {
    /// Accessor used as `self.#member`.
    pub member: Member,
    /// Field name as reported at runtime; tuple fields use their index.
    pub name: String,
    pub annotation: Option<LitStr>,
    /// Shared-reference fields cannot be borrowed mutably through them.
    pub unaddressable: bool,
}

pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let body = match &input.data {
        Data::Struct(data) => Body::Struct(parse_fields(&data.fields)?),
        Data::Enum(_) => Body::Other("enum"),
        Data::Union(_) => Body::Other("union"),
    };
    Ok(ParsedInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        body,
    })
}

fn parse_fields(fields: &Fields) -> syn::Result<Vec<FieldInput>> {
    fields
        .iter()
        .enumerate()
        .map(|(position, field)| {
            let (member, name) = field.ident.as_ref().map_or_else(
                || (Member::Unnamed(Index::from(position)), position.to_string()),
                |ident| (Member::Named(ident.clone()), ident.unraw().to_string()),
            );
            Ok(FieldInput {
                member,
                name,
                annotation: parse_field_attrs(&field.attrs)?.annotation,
                unaddressable: is_shared_reference(&field.ty),
            })
        })
        .collect()
}


//! Token generation for `#[derive(Flags)]`.
//!
//! Two implementations are emitted: `Flags`, describing the fields of a
//! `&mut` borrow, and a by-value `Bindable` that reports the missing
//! reference when the type itself is handed to the binder.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, Lifetime, LifetimeParam};

use super::parse::{Body, FieldInput, ParsedInput};

/// Lifetime introduced on the by-value `Bindable` impl.
const BIND_LIFETIME: &str = "'__autoflags";

pub(crate) fn implementations(input: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let flags_impl = flags_impl(input, krate);
    let bindable_impl = bindable_impl(input, krate);
    quote! {
        #flags_impl
        #bindable_impl
    }
}

fn flags_impl(input: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let shape = match &input.body {
        Body::Struct(fields) => {
            let descriptors = fields.iter().map(|field| field_descriptor(field, krate));
            quote! { #krate::Shape::Struct(::std::vec![#(#descriptors),*]) }
        }
        Body::Other(kind) => quote! { #krate::Shape::Other { kind: #kind } },
    };
    quote! {
        impl #impl_generics #krate::Flags for #ident #ty_generics #where_clause {
            fn reflect(&mut self) -> #krate::Shape<'_> {
                #shape
            }
        }
    }
}

/// Builds the `Field::new(..)` expression for one field.
///
/// The slot is chosen by autoref probing: a type implementing `Value` binds
/// through it, a built-in scalar binds by kind, anything else is unsupported.
fn field_descriptor(field: &FieldInput, krate: &TokenStream) -> TokenStream {
    let name = &field.name;
    let annotation = field.annotation.as_ref().map_or_else(
        || quote! { ::core::option::Option::None },
        |lit| quote! { ::core::option::Option::Some(#lit) },
    );
    let slot = if field.unaddressable {
        quote! { #krate::Slot::Unaddressable }
    } else {
        let member = &field.member;
        quote! {{
            use #krate::__private::probe::*;
            (&&&Probe::new(&mut self.#member)).slot()
        }}
    };
    quote! { #krate::Field::new(#name, #annotation, #slot) }
}

fn bindable_impl(input: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let lifetime = Lifetime::new(BIND_LIFETIME, proc_macro2::Span::call_site());
    let mut generics = input.generics.clone();
    generics
        .params
        .insert(0, GenericParam::Lifetime(LifetimeParam::new(lifetime.clone())));
    let (impl_generics, _, _) = generics.split_for_impl();
    let (_, ty_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        impl #impl_generics #krate::Bindable<#lifetime> for #ident #ty_generics #where_clause {
            fn into_shape(
                self,
            ) -> ::core::result::Result<#krate::Shape<#lifetime>, #krate::BindError> {
                ::core::result::Result::Err(#krate::BindError::PointerExpected)
            }
        }
    }
}

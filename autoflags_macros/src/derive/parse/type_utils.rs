//! Type introspection helpers.

use syn::Type;

/// Reports whether `ty` is a shared reference such as `&'static str`.
///
/// Fields of such types cannot be written through `&mut self`, so they are
/// described as unaddressable. Invisible groups and parentheses are peeled
/// first; the check is otherwise syntactic, so aliases are not resolved.
pub(crate) fn is_shared_reference(ty: &Type) -> bool {
    match ty {
        Type::Group(group) => is_shared_reference(&group.elem),
        Type::Paren(paren) => is_shared_reference(&paren.elem),
        Type::Reference(reference) => reference.mutability.is_none(),
        _ => false,
    }
}

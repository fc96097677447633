//! Unit tests for the generated `Flags` and `Bindable` implementations.

use anyhow::{Result, ensure};
use quote::quote;
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use super::expand;

fn expand_to_string(input: &DeriveInput) -> Result<String> {
    Ok(expand(input)?.to_string())
}

#[rstest]
fn named_struct_expands_to_field_descriptors() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Config {
            #[flag = "name,name of user"]
            name: String,
            married: bool,
        }
    };
    let expected = quote! {
        impl autoflags::Flags for Config {
            fn reflect(&mut self) -> autoflags::Shape<'_> {
                autoflags::Shape::Struct(::std::vec![
                    autoflags::Field::new(
                        "name",
                        ::core::option::Option::Some("name,name of user"),
                        {
                            use autoflags::__private::probe::*;
                            (&&&Probe::new(&mut self.name)).slot()
                        }
                    ),
                    autoflags::Field::new(
                        "married",
                        ::core::option::Option::None,
                        {
                            use autoflags::__private::probe::*;
                            (&&&Probe::new(&mut self.married)).slot()
                        }
                    )
                ])
            }
        }
        impl<'__autoflags> autoflags::Bindable<'__autoflags> for Config {
            fn into_shape(
                self,
            ) -> ::core::result::Result<autoflags::Shape<'__autoflags>, autoflags::BindError> {
                ::core::result::Result::Err(autoflags::BindError::PointerExpected)
            }
        }
    };
    ensure!(expand_to_string(&input)? == expected.to_string());
    Ok(())
}

#[rstest]
fn shared_reference_fields_are_unaddressable() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Labels {
            #[flag = "label"]
            label: &'static str,
        }
    };
    let tokens = expand_to_string(&input)?;
    let slot = quote! { autoflags::Slot::Unaddressable }.to_string();
    ensure!(tokens.contains(&slot), "{tokens}");
    ensure!(!tokens.contains("self . label"), "{tokens}");
    Ok(())
}

#[rstest]
fn tuple_fields_use_index_members() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Port(#[flag = "port"] u64);
    };
    let tokens = expand_to_string(&input)?;
    ensure!(tokens.contains("& mut self . 0"), "{tokens}");
    ensure!(tokens.contains("\"0\""), "{tokens}");
    Ok(())
}

#[rstest]
#[case::enumeration(parse_quote! { enum Mode { Fast } }, "enum")]
#[case::union(parse_quote! { union Bits { int: u32 } }, "union")]
fn non_structs_describe_themselves(#[case] input: DeriveInput, #[case] kind: &str) -> Result<()> {
    let tokens = expand_to_string(&input)?;
    let shape = quote! { autoflags::Shape::Other { kind: #kind } }.to_string();
    ensure!(tokens.contains(&shape), "{tokens}");
    Ok(())
}

#[rstest]
fn generics_are_carried_to_both_impls() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Holder<'a, T: Clone> where T: Send {
            #[flag = "value"]
            value: T,
            name: &'a mut String,
        }
    };
    let tokens = expand_to_string(&input)?;
    let flags_header = quote! {
        impl<'a, T: Clone> autoflags::Flags for Holder<'a, T> where T: Send
    }
    .to_string();
    let bindable_header = quote! {
        impl<'__autoflags, 'a, T: Clone> autoflags::Bindable<'__autoflags> for Holder<'a, T>
        where T: Send
    }
    .to_string();
    ensure!(tokens.contains(&flags_header), "{tokens}");
    ensure!(tokens.contains(&bindable_header), "{tokens}");
    Ok(())
}

#[rstest]
fn crate_override_replaces_runtime_paths() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[flags(crate = "flags_alias")]
        struct Config {
            #[flag = "n"]
            n: u64,
        }
    };
    let tokens = expand_to_string(&input)?;
    ensure!(tokens.contains("flags_alias :: Flags"), "{tokens}");
    ensure!(tokens.contains("flags_alias :: __private :: probe"), "{tokens}");
    ensure!(!tokens.contains("autoflags ::"), "{tokens}");
    Ok(())
}

#[rstest]
fn malformed_annotations_fail_expansion() {
    let input: DeriveInput = parse_quote! {
        struct Config {
            #[flag = "a"]
            #[flag = "b"]
            n: u64,
        }
    };
    assert!(expand(&input).is_err());
}

#[rstest]
fn unit_structs_describe_no_fields() -> Result<()> {
    let input: DeriveInput = parse_quote! { struct Marker; };
    let tokens = expand_to_string(&input)?;
    let shape = quote! { autoflags::Shape::Struct(::std::vec![]) }.to_string();
    ensure!(tokens.contains(&shape), "{tokens}");
    Ok(())
}

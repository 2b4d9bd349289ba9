//! Component and injectable attribute macros
//!
//! `#[component]` describes a struct as a class in the catalog.
//! `#[injectable]` does the same and attaches a lifetime marker, which makes
//! the struct eligible for marker-based registration.
//!
//! Declared contracts are checked at compile time: the generated code fails
//! to build when the struct does not implement a trait listed in
//! `implements(...)`.

use crate::args::{DeclArgs, LifetimeArg};
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Which attribute is being expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// `#[component]`: no marker
    Component,
    /// `#[injectable]`: marker, scoped unless a lifetime is given
    Injectable,
}

/// Implements the `#[component]` and `#[injectable]` attribute macros
///
/// # Example
///
/// ```rust,ignore
/// use wireup::{contract, injectable};
///
/// #[contract]
/// pub trait IMailer {}
///
/// #[injectable(lifetime = "transient", implements(IMailer))]
/// pub struct Mailer;
///
/// impl IMailer for Mailer {}
/// ```
pub fn component_impl(flavor: Flavor, attr: TokenStream, input: TokenStream) -> TokenStream {
    let args = match DeclArgs::parse(attr) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    if !matches!(input.data, syn::Data::Struct(_)) {
        let attr_name = match flavor {
            Flavor::Component => "component",
            Flavor::Injectable => "injectable",
        };
        return syn::Error::new_spanned(
            &input,
            format!("{attr_name} can only be used on structs"),
        )
        .to_compile_error();
    }
    if let syn::Data::Struct(data) = &input.data {
        if matches!(data.fields, syn::Fields::Unnamed(_)) {
            return syn::Error::new_spanned(&input.ident, "tuple structs cannot be declared")
                .to_compile_error();
        }
    }
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "generic types cannot be declared")
            .to_compile_error();
    }

    let marker = match (flavor, args.lifetime) {
        (Flavor::Component, Some((_, span))) => {
            return syn::Error::new(span, "use #[injectable] to declare a lifetime")
                .to_compile_error();
        }
        (Flavor::Component, None) => quote!(::core::option::Option::None),
        (Flavor::Injectable, lifetime) => {
            let lifetime = lifetime
                .map(|(lifetime, _)| lifetime)
                .unwrap_or(LifetimeArg::Scoped)
                .to_tokens();
            quote!(::core::option::Option::Some(#lifetime))
        }
    };
    let kind = if args.abstract_class.is_some() {
        quote!(::wireup::TypeKind::AbstractClass)
    } else {
        quote!(::wireup::TypeKind::Class)
    };

    let name = &input.ident;
    let name_str = name.to_string();
    let implements = &args.implements;

    quote! {
        #input

        impl ::wireup::catalog::Describe for #name {
            const QUALIFIED_NAME: &'static str =
                ::core::concat!(::core::module_path!(), "::", #name_str);

            fn descriptor() -> ::wireup::catalog::TypeDescriptor {
                ::wireup::catalog::TypeDescriptor::new(Self::QUALIFIED_NAME, #kind)
                    #(
                        .implementing(<dyn #implements as ::wireup::catalog::Describe>::QUALIFIED_NAME)
                    )*
                    .with_marker(#marker)
            }
        }

        const _: fn() = || {
            #(
                {
                    fn implements<T: ?Sized + #implements>() {}
                    implements::<#name>();
                }
            )*
        };

        ::wireup::inventory::submit! {
            ::wireup::catalog::CatalogEntry {
                module: ::core::module_path!(),
                line: ::core::line!(),
                describe: <#name as ::wireup::catalog::Describe>::descriptor,
            }
        }
    }
}

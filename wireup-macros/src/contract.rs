//! Contract attribute macro
//!
//! Provides the `#[contract]` attribute macro that:
//! 1. Adds `Send + Sync + 'static` bounds to the trait definition
//! 2. Describes `dyn Trait` as an interface type
//! 3. Submits the description to the inventory-collected catalog

use crate::args::DeclArgs;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemTrait;

fn has_supertrait(item_trait: &ItemTrait, name: &str) -> bool {
    item_trait.supertraits.iter().any(|bound| {
        if let syn::TypeParamBound::Trait(trait_bound) = bound {
            trait_bound
                .path
                .segments
                .last()
                .map(|s| s.ident == name)
                .unwrap_or(false)
        } else {
            false
        }
    })
}

/// Implements the `#[contract]` attribute macro
///
/// ```rust,ignore
/// #[contract(lifetime = "singleton")]
/// pub trait IMailer {
///     fn send(&self, to: &str, body: &str);
/// }
/// ```
///
/// The trait must be dyn-compatible: the description is attached to
/// `dyn IMailer`.
pub fn contract_impl(attr: TokenStream, input: TokenStream) -> TokenStream {
    let args = match DeclArgs::parse(attr) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };
    if let Some(span) = args.abstract_class {
        return syn::Error::new(span, "abstract_class is only valid on #[component]")
            .to_compile_error();
    }
    if let Some(path) = args.implements.first() {
        return syn::Error::new_spanned(path, "contracts do not take implements(...)")
            .to_compile_error();
    }

    let mut item_trait: ItemTrait = match syn::parse2(input) {
        Ok(item) => item,
        Err(err) => return err.to_compile_error(),
    };

    if !item_trait.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &item_trait.generics,
            "contract does not support generic traits",
        )
        .to_compile_error();
    }

    // Add missing bounds
    if !has_supertrait(&item_trait, "Send") {
        item_trait.supertraits.push(syn::parse_quote!(Send));
    }
    if !has_supertrait(&item_trait, "Sync") {
        item_trait.supertraits.push(syn::parse_quote!(Sync));
    }
    let has_static = item_trait
        .supertraits
        .iter()
        .any(|bound| matches!(bound, syn::TypeParamBound::Lifetime(lt) if lt.ident == "static"));
    if !has_static {
        item_trait.supertraits.push(syn::parse_quote!('static));
    }

    let trait_name = &item_trait.ident;
    let trait_name_str = trait_name.to_string();
    let marker = match args.lifetime {
        Some((lifetime, _)) => {
            let lifetime = lifetime.to_tokens();
            quote!(::core::option::Option::Some(#lifetime))
        }
        None => quote!(::core::option::Option::None),
    };

    quote! {
        #item_trait

        impl ::wireup::catalog::Describe for dyn #trait_name {
            const QUALIFIED_NAME: &'static str =
                ::core::concat!(::core::module_path!(), "::", #trait_name_str);

            fn descriptor() -> ::wireup::catalog::TypeDescriptor {
                ::wireup::catalog::TypeDescriptor::interface(Self::QUALIFIED_NAME)
                    .with_marker(#marker)
            }
        }

        ::wireup::inventory::submit! {
            ::wireup::catalog::CatalogEntry {
                module: ::core::module_path!(),
                line: ::core::line!(),
                describe: <dyn #trait_name as ::wireup::catalog::Describe>::descriptor,
            }
        }
    }
}

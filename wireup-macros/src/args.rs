//! Attribute argument parsing shared by the declaration macros
//!
//! Accepted forms:
//! - `lifetime = "transient" | "scoped" | "singleton"`
//! - `implements(TraitA, path::TraitB)`
//! - `abstract_class`

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{Expr, Lit, Meta, Path, Token};

/// Lifetime named in an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifetimeArg {
    Transient,
    Scoped,
    Singleton,
}

impl LifetimeArg {
    fn parse(value: &str, span: Span) -> syn::Result<Self> {
        match value {
            "transient" => Ok(Self::Transient),
            "scoped" => Ok(Self::Scoped),
            "singleton" => Ok(Self::Singleton),
            other => Err(syn::Error::new(
                span,
                format!("unknown lifetime '{other}', expected 'transient', 'scoped' or 'singleton'"),
            )),
        }
    }

    pub fn to_tokens(self) -> TokenStream {
        match self {
            Self::Transient => quote!(::wireup::Lifetime::Transient),
            Self::Scoped => quote!(::wireup::Lifetime::Scoped),
            Self::Singleton => quote!(::wireup::Lifetime::Singleton),
        }
    }
}

/// Parsed declaration arguments
#[derive(Default)]
pub struct DeclArgs {
    pub lifetime: Option<(LifetimeArg, Span)>,
    pub implements: Vec<Path>,
    pub abstract_class: Option<Span>,
}

impl DeclArgs {
    /// Parse a comma-separated argument list
    pub fn parse(tokens: TokenStream) -> syn::Result<Self> {
        let mut args = DeclArgs::default();
        if tokens.is_empty() {
            return Ok(args);
        }

        let parser = Punctuated::<Meta, Token![,]>::parse_terminated;
        let metas = syn::parse::Parser::parse2(parser, tokens)?;

        for meta in metas {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("lifetime") => {
                    let Expr::Lit(expr_lit) = &nv.value else {
                        return Err(syn::Error::new_spanned(&nv.value, "lifetime must be a string literal"));
                    };
                    let Lit::Str(lit_str) = &expr_lit.lit else {
                        return Err(syn::Error::new_spanned(&nv.value, "lifetime must be a string literal"));
                    };
                    let lifetime = LifetimeArg::parse(&lit_str.value(), lit_str.span())?;
                    args.lifetime = Some((lifetime, lit_str.span()));
                }
                Meta::List(list) if list.path.is_ident("implements") => {
                    let paths = list.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
                    args.implements.extend(paths);
                }
                Meta::Path(path) if path.is_ident("abstract_class") => {
                    args.abstract_class = Some(syn::spanned::Spanned::span(path));
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown argument, expected 'lifetime = \"...\"', 'implements(...)' or 'abstract_class'",
                    ))
                }
            }
        }

        Ok(args)
    }
}

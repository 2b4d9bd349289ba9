//! Procedural macros for wireup
//!
//! This crate provides the declaration attributes that build type catalogs
//! at compile time:
//! - `#[contract]` for traits resolved to an implementation
//! - `#[component]` for structs listed in the catalog
//! - `#[injectable]` for structs carrying a lifetime marker

use proc_macro::TokenStream;

mod args;
mod component;
mod contract;

use component::Flavor;

/// Declare a trait as a contract
///
/// This attribute macro adds `Send + Sync + 'static` bounds to the trait,
/// describes `dyn Trait` as an interface and adds it to the catalog of the
/// enclosing module. An optional lifetime applies to every implementation
/// that does not declare its own.
///
/// # Example
///
/// ```rust,ignore
/// use wireup::contract;
///
/// #[contract(lifetime = "singleton")]
/// pub trait IMailer {
///     fn send(&self, to: &str, body: &str);
/// }
///
/// // This expands to:
/// pub trait IMailer: Send + Sync + 'static {
///     fn send(&self, to: &str, body: &str);
/// }
/// // plus a `Describe` impl for `dyn IMailer` and a catalog entry
/// ```
#[proc_macro_attribute]
pub fn contract(attr: TokenStream, input: TokenStream) -> TokenStream {
    contract::contract_impl(attr.into(), input.into()).into()
}

/// Declare a struct as a class in the catalog, without a lifetime marker
///
/// # Example
///
/// ```rust,ignore
/// use wireup::{component, contract};
///
/// #[contract]
/// pub trait ISimpleObject {}
///
/// #[component(implements(ISimpleObject))]
/// pub struct SimpleObject;
///
/// impl ISimpleObject for SimpleObject {}
/// ```
///
/// `abstract_class` declares a class that is never registered on its own.
#[proc_macro_attribute]
pub fn component(attr: TokenStream, input: TokenStream) -> TokenStream {
    component::component_impl(Flavor::Component, attr.into(), input.into()).into()
}

/// Declare a struct as a class carrying a lifetime marker
///
/// Marked classes are picked up by marker-based registration, and the marker
/// wins over the contract's lifetime when the class is bound to a contract.
/// Without a `lifetime` argument the marker is `scoped`.
///
/// # Example
///
/// ```rust,ignore
/// use wireup::injectable;
///
/// #[injectable(lifetime = "singleton")]
/// pub struct Clock;
///
/// // Registered by:
/// services.register_by_marker(&TypeCatalog::from_module(module_path!()));
/// ```
#[proc_macro_attribute]
pub fn injectable(attr: TokenStream, input: TokenStream) -> TokenStream {
    component::component_impl(Flavor::Injectable, attr.into(), input.into()).into()
}

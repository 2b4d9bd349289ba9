//! Registration strategies
//!
//! Three independent strategies write into the same registry:
//! - Contract resolution: `ISimpleObject` bound to `SimpleObject` by name
//!   and assignability ([`ContractResolver`])
//! - Base type: every class assignable to a base type, under its own type
//!   ([`base_type::register`])
//! - Marker: every class carrying a lifetime marker, under its own type
//!   ([`marker::register`])
//!
//! [`Registrator`] exposes all of them as chainable methods on any
//! [`ServiceRegistry`]. Every strategy checks registry membership before
//! appending, so running one twice, or running two strategies over the same
//! class, never produces a second binding for a service-key.
//!
//! # Example
//!
//! ```rust,ignore
//! use wireup::{DuplicationPolicy, Registrator, ServiceCollection, TypeCatalog};
//!
//! let catalog = TypeCatalog::from_module("app");
//! let mut services = ServiceCollection::new();
//! services
//!     .register_by_marker(&catalog)
//!     .register_contracts_with(DuplicationPolicy::TakeFirst, [&catalog])?;
//! ```

pub mod base_type;
pub mod contracts;
pub mod convention;
pub mod marker;
pub mod policy;

pub use contracts::ContractResolver;
pub use convention::{Convention, InterfacePrefix};
pub use policy::DuplicationPolicy;

use crate::catalog::{TypeCatalog, TypeDescriptor};
use crate::config::RegistrationConfig;
use crate::error::Result;
use crate::registry::ServiceRegistry;

/// Registration entry points, implemented for every registry
///
/// Each method returns the registry it was called on so calls can be
/// chained.
pub trait Registrator: ServiceRegistry + Sized {
    /// Register the contracts of each catalog, failing on ambiguous contracts
    fn register_contracts<'c, I>(&mut self, catalogs: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = &'c TypeCatalog>,
    {
        self.register_contracts_with(DuplicationPolicy::ThrowOnDuplicate, catalogs)
    }

    /// Register the contracts of each catalog under an explicit policy
    fn register_contracts_with<'c, I>(
        &mut self,
        policy: DuplicationPolicy,
        catalogs: I,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = &'c TypeCatalog>,
    {
        ContractResolver::new(policy).resolve(self, catalogs)?;
        Ok(self)
    }

    /// Register the contracts of each catalog with the configured policy and
    /// contract prefix
    fn register_contracts_configured<'c, I>(
        &mut self,
        config: &RegistrationConfig,
        catalogs: I,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = &'c TypeCatalog>,
    {
        ContractResolver::from_config(config).resolve(self, catalogs)?;
        Ok(self)
    }

    /// Register every concrete class assignable to `base` under its own type
    fn register_by_base_type(&mut self, catalog: &TypeCatalog, base: &TypeDescriptor) -> &mut Self {
        base_type::register(self, catalog, base);
        self
    }

    /// Register every concrete class carrying a lifetime marker
    fn register_by_marker(&mut self, catalog: &TypeCatalog) -> &mut Self {
        marker::register(self, catalog);
        self
    }
}

impl<R: ServiceRegistry> Registrator for R {}

//! Convention-based service registration
//!
//! Scans an explicit catalog of type descriptors and registers bindings into
//! a service registry:
//! - contracts (`ISimpleObject`) bound to their single implementation
//!   (`SimpleObject`), with a policy for ambiguous contracts
//! - classes assignable to a base type, under their own type
//! - classes carrying a lifetime marker, under their own type
//!
//! # Example
//!
//! ```rust
//! use wireup::{Lifetime, Registrator, ServiceCollection, ServiceRegistry, TypeCatalog, TypeDescriptor};
//!
//! let catalog = TypeCatalog::new("app")
//!     .with_type(TypeDescriptor::interface("app::ISimpleObject"))
//!     .with_type(TypeDescriptor::class("app::SimpleObject").implementing("app::ISimpleObject"));
//!
//! let mut services = ServiceCollection::new();
//! services.register_contracts([&catalog]).unwrap();
//!
//! let binding = services.get("app::ISimpleObject").unwrap();
//! assert_eq!(binding.implementation().name(), "SimpleObject");
//! assert_eq!(binding.lifetime(), Lifetime::Scoped);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod lifetime;
pub mod registry;
pub mod resolver;

pub use catalog::{CatalogEntry, Describe, TypeCatalog, TypeDescriptor, TypeKind};
pub use config::RegistrationConfig;
pub use error::{RegistrationError, Result};
pub use lifetime::Lifetime;
pub use registry::{ServiceCollection, ServiceDescriptor, ServiceRegistry};
pub use resolver::{
    Convention, ContractResolver, DuplicationPolicy, InterfacePrefix, Registrator,
};

// Re-export the declaration macros
pub use wireup_macros::{component, contract, injectable};

// Re-export inventory for the code generated by the declaration macros
pub use inventory;

//! Service registry
//!
//! The resolvers write into anything implementing [`ServiceRegistry`]: a
//! mapping from service-key to implementation and lifetime that supports a
//! membership test and append. [`ServiceCollection`] is the in-memory,
//! insertion-ordered implementation, ready to be handed to a container.
//!
//! # Example
//!
//! ```rust
//! use wireup::{Lifetime, ServiceCollection, ServiceDescriptor, ServiceRegistry, TypeDescriptor};
//!
//! let mut services = ServiceCollection::new();
//! services.add(ServiceDescriptor::concrete(
//!     TypeDescriptor::class("app::Clock"),
//!     Lifetime::Singleton,
//! ));
//!
//! assert!(services.contains("app::Clock"));
//! assert_eq!(services.len(), 1);
//! ```

use crate::catalog::TypeDescriptor;
use crate::lifetime::Lifetime;
use serde::Serialize;

/// A binding: service-key, implementation and resolved lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    service: TypeDescriptor,
    implementation: TypeDescriptor,
    lifetime: Lifetime,
}

impl ServiceDescriptor {
    /// Bind `service` to `implementation`
    pub fn new(service: TypeDescriptor, implementation: TypeDescriptor, lifetime: Lifetime) -> Self {
        Self {
            service,
            implementation,
            lifetime,
        }
    }

    /// Bind a concrete type under its own type
    pub fn concrete(implementation: TypeDescriptor, lifetime: Lifetime) -> Self {
        Self::new(implementation.clone(), implementation, lifetime)
    }

    /// Service-key of the binding
    pub fn service(&self) -> &TypeDescriptor {
        &self.service
    }

    pub fn implementation(&self) -> &TypeDescriptor {
        &self.implementation
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }
}

/// Storage the resolvers register bindings into
///
/// Implementations are expected to keep insertion order. The resolvers never
/// overwrite: they test membership before every append.
pub trait ServiceRegistry {
    /// Whether a binding exists for the service-key (a qualified type name)
    fn contains(&self, service: &str) -> bool;

    /// Append a binding
    fn add(&mut self, descriptor: ServiceDescriptor);

    /// Number of bindings
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered list of bindings
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ServiceCollection {
    descriptors: Vec<ServiceDescriptor>,
}

impl ServiceCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Binding registered for a service-key
    pub fn get(&self, service: &str) -> Option<&ServiceDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.service.qualified_name() == service)
    }

    /// Bindings in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, ServiceDescriptor> {
        self.descriptors.iter()
    }

    pub fn into_descriptors(self) -> Vec<ServiceDescriptor> {
        self.descriptors
    }
}

impl ServiceRegistry for ServiceCollection {
    fn contains(&self, service: &str) -> bool {
        self.descriptors
            .iter()
            .any(|d| d.service.qualified_name() == service)
    }

    fn add(&mut self, descriptor: ServiceDescriptor) {
        self.descriptors.push(descriptor);
    }

    fn len(&self) -> usize {
        self.descriptors.len()
    }
}

impl<'a> IntoIterator for &'a ServiceCollection {
    type Item = &'a ServiceDescriptor;
    type IntoIter = std::slice::Iter<'a, ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

//! Marker resolver
//!
//! Registers every concrete class carrying a lifetime marker under its own
//! type, with the marked lifetime. Unmarked classes are left alone.

use crate::catalog::{TypeCatalog, TypeDescriptor};
use crate::lifetime;
use crate::registry::{ServiceDescriptor, ServiceRegistry};
use tracing::{debug, info};

/// Register the marked classes of `catalog`, returning the number added
pub fn register<R>(registry: &mut R, catalog: &TypeCatalog) -> usize
where
    R: ServiceRegistry + ?Sized,
{
    let marked: Vec<&TypeDescriptor> = catalog
        .implementations()
        .filter(|class| class.is_marked())
        .collect();

    let mut added = 0;
    for implementation in marked {
        if registry.contains(implementation.qualified_name()) {
            debug!(implementation = %implementation, "class already registered");
            continue;
        }

        let lifetime = lifetime::select(implementation, None);
        debug!(implementation = %implementation, %lifetime, "registering marked class");
        registry.add(ServiceDescriptor::concrete(implementation.clone(), lifetime));
        added += 1;
    }

    info!(module = catalog.module(), added, "resolved marked classes");
    added
}

//! Base-type resolver
//!
//! Registers every concrete class assignable to a base type under its own
//! type. Each class is its own service-key, so there is nothing to
//! disambiguate; classes that are already registered are skipped.

use crate::catalog::{TypeCatalog, TypeDescriptor};
use crate::lifetime;
use crate::registry::{ServiceDescriptor, ServiceRegistry};
use tracing::{debug, info};

/// Register the classes of `catalog` assignable to `base`
///
/// Returns the number of bindings added. Without a marker the class is
/// registered as scoped.
pub fn register<R>(registry: &mut R, catalog: &TypeCatalog, base: &TypeDescriptor) -> usize
where
    R: ServiceRegistry + ?Sized,
{
    let implementations: Vec<&TypeDescriptor> = catalog
        .implementations()
        .filter(|class| catalog.is_assignable(class, base))
        .collect();

    let mut added = 0;
    for implementation in implementations {
        if registry.contains(implementation.qualified_name()) {
            debug!(implementation = %implementation, "class already registered");
            continue;
        }

        let lifetime = lifetime::select(implementation, None);
        debug!(implementation = %implementation, base = %base, %lifetime, "registering class");
        registry.add(ServiceDescriptor::concrete(implementation.clone(), lifetime));
        added += 1;
    }

    info!(module = catalog.module(), base = %base, added, "resolved base type");
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifetime::Lifetime;
    use crate::registry::ServiceCollection;
    use pretty_assertions::assert_eq;

    fn catalog() -> TypeCatalog {
        TypeCatalog::new("app")
            .with_type(TypeDescriptor::interface("app::Controller"))
            .with_type(TypeDescriptor::abstract_class("app::BaseController").implementing("app::Controller"))
            .with_type(TypeDescriptor::class("app::HomeController").implementing("app::Controller"))
            .with_type(
                TypeDescriptor::class("app::UserController")
                    .implementing("app::Controller")
                    .with_lifetime(Lifetime::Transient),
            )
            .with_type(TypeDescriptor::class("app::Mailer"))
    }

    #[test]
    fn test_registers_concrete_subtypes_under_own_type() {
        let catalog = catalog();
        let base = catalog.find("app::Controller").unwrap().clone();
        let mut services = ServiceCollection::new();

        let added = register(&mut services, &catalog, &base);

        let bindings: Vec<_> = services
            .iter()
            .map(|d| (d.service().qualified_name(), d.implementation().qualified_name(), d.lifetime()))
            .collect();
        assert_eq!(added, 2);
        assert_eq!(
            bindings,
            vec![
                ("app::HomeController", "app::HomeController", Lifetime::Scoped),
                ("app::UserController", "app::UserController", Lifetime::Transient),
            ]
        );
    }

    #[test]
    fn test_registers_subtypes_through_abstract_base() {
        let catalog = TypeCatalog::new("web")
            .with_type(TypeDescriptor::interface("web::Controller"))
            .with_type(TypeDescriptor::abstract_class("web::BaseController").implementing("web::Controller"))
            .with_type(TypeDescriptor::class("web::HomeController").implementing("web::BaseController"));
        let base = catalog.find("web::Controller").unwrap().clone();
        let mut services = ServiceCollection::new();

        assert_eq!(register(&mut services, &catalog, &base), 1);
        assert!(services.contains("web::HomeController"));
    }

    #[test]
    fn test_concrete_base_registers_itself() {
        let catalog = catalog();
        let base = catalog.find("app::Mailer").unwrap().clone();
        let mut services = ServiceCollection::new();

        register(&mut services, &catalog, &base);

        assert_eq!(services.len(), 1);
        assert!(services.contains("app::Mailer"));
    }

    #[test]
    fn test_skips_registered_classes() {
        let catalog = catalog();
        let base = TypeDescriptor::interface("app::Controller");
        let mut services = ServiceCollection::new();
        services.add(ServiceDescriptor::concrete(
            TypeDescriptor::class("app::HomeController"),
            Lifetime::Singleton,
        ));

        assert_eq!(register(&mut services, &catalog, &base), 1);
        assert_eq!(register(&mut services, &catalog, &base), 0);
        assert_eq!(services.len(), 2);
        assert_eq!(
            services.get("app::HomeController").unwrap().lifetime(),
            Lifetime::Singleton
        );
    }
}

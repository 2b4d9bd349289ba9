use pretty_assertions::assert_eq;
use wireup::{
    DuplicationPolicy, Lifetime, Registrator, RegistrationError, ServiceCollection,
    ServiceRegistry, TypeCatalog, TypeDescriptor,
};

const POLICIES: [DuplicationPolicy; 3] = [
    DuplicationPolicy::ThrowOnDuplicate,
    DuplicationPolicy::Ignore,
    DuplicationPolicy::TakeFirst,
];

fn simple_contract() -> TypeDescriptor {
    TypeDescriptor::interface("models::ISimpleObject")
}

fn simple_object() -> TypeDescriptor {
    TypeDescriptor::class("models::SimpleObject").implementing("models::ISimpleObject")
}

fn catalog(types: impl IntoIterator<Item = TypeDescriptor>) -> TypeCatalog {
    TypeCatalog::from_types("models", types)
}

fn bindings(services: &ServiceCollection) -> Vec<(&str, &str, Lifetime)> {
    services
        .iter()
        .map(|d| {
            (
                d.service().qualified_name(),
                d.implementation().qualified_name(),
                d.lifetime(),
            )
        })
        .collect()
}

#[test]
fn test_register_class_without_marker() {
    let catalog = catalog([simple_contract(), simple_object()]);
    let mut services = ServiceCollection::new();

    services.register_contracts([&catalog]).unwrap();

    assert_eq!(
        bindings(&services),
        vec![("models::ISimpleObject", "models::SimpleObject", Lifetime::Scoped)]
    );
}

#[test]
fn test_register_class_with_marker() {
    let catalog = catalog([
        TypeDescriptor::interface("models::IAttributeObject"),
        TypeDescriptor::class("models::AttributeObject")
            .implementing("models::IAttributeObject")
            .with_lifetime(Lifetime::Singleton),
    ]);
    let mut services = ServiceCollection::new();

    services.register_contracts([&catalog]).unwrap();

    assert_eq!(
        bindings(&services),
        vec![(
            "models::IAttributeObject",
            "models::AttributeObject",
            Lifetime::Singleton
        )]
    );
}

#[test]
fn test_take_first_resolves_duplicates() {
    let first = simple_object().with_lifetime(Lifetime::Transient);
    let second = simple_object();
    let catalog = catalog([simple_contract(), first, second]);
    let mut services = ServiceCollection::new();

    services
        .register_contracts_with(DuplicationPolicy::TakeFirst, [&catalog])
        .unwrap();

    assert_eq!(services.len(), 1);
    // the first candidate carries the transient marker
    assert_eq!(
        services.get("models::ISimpleObject").unwrap().lifetime(),
        Lifetime::Transient
    );
}

#[test]
fn test_take_first_follows_catalog_order() {
    let catalog = catalog([
        simple_contract(),
        TypeDescriptor::class("b::SimpleObject").implementing("models::ISimpleObject"),
        TypeDescriptor::class("a::SimpleObject").implementing("models::ISimpleObject"),
    ]);
    let mut services = ServiceCollection::new();

    services
        .register_contracts_with(DuplicationPolicy::TakeFirst, [&catalog])
        .unwrap();

    assert_eq!(
        bindings(&services),
        vec![("models::ISimpleObject", "b::SimpleObject", Lifetime::Scoped)]
    );
}

#[test]
fn test_second_run_does_not_increase_count() {
    let catalog = catalog([simple_contract(), simple_object()]);
    let mut services = ServiceCollection::new();

    services.register_contracts([&catalog]).unwrap();
    let count = services.len();
    assert!(count > 0);

    services.register_contracts([&catalog]).unwrap();
    assert_eq!(services.len(), count);
}

#[test]
fn test_repeated_runs_are_idempotent_under_every_policy() {
    let catalog = catalog([
        simple_contract(),
        simple_object(),
        simple_object(),
        TypeDescriptor::interface("models::IClock"),
        TypeDescriptor::class("models::Clock").implementing("models::IClock"),
    ]);

    for policy in [DuplicationPolicy::Ignore, DuplicationPolicy::TakeFirst] {
        let mut services = ServiceCollection::new();
        services.register_contracts_with(policy, [&catalog]).unwrap();
        let count = services.len();
        services.register_contracts_with(policy, [&catalog]).unwrap();
        assert_eq!(services.len(), count, "policy {policy}");
    }
}

#[test]
fn test_no_mapping_without_implementation() {
    let catalog = catalog([
        simple_contract(),
        TypeDescriptor::class("models::SimpleObject2").implementing("models::ISimpleObject"),
    ]);

    for policy in POLICIES {
        let mut services = ServiceCollection::new();
        services.register_contracts_with(policy, [&catalog]).unwrap();
        assert_eq!(services.len(), 0, "policy {policy}");
    }
}

#[test]
fn test_no_mapping_when_name_matches_but_not_assignable() {
    let catalog = catalog([simple_contract(), TypeDescriptor::class("models::SimpleObject")]);
    let mut services = ServiceCollection::new();

    services.register_contracts([&catalog]).unwrap();

    assert!(services.is_empty());
}

#[test]
fn test_single_implementation_registered_under_every_policy() {
    let catalog = catalog([simple_contract(), simple_object()]);

    for policy in POLICIES {
        let mut services = ServiceCollection::new();
        services.register_contracts_with(policy, [&catalog]).unwrap();
        assert!(services.contains("models::ISimpleObject"), "policy {policy}");
    }
}

#[test]
fn test_ignore_skips_duplicates() {
    let catalog = catalog([simple_contract(), simple_object(), simple_object()]);
    let mut services = ServiceCollection::new();

    services
        .register_contracts_with(DuplicationPolicy::Ignore, [&catalog])
        .unwrap();

    assert_eq!(services.len(), 0);
}

#[test]
fn test_throw_on_duplicate() {
    let catalog = catalog([simple_contract(), simple_object(), simple_object()]);
    let mut services = ServiceCollection::new();

    let err = services.register_contracts([&catalog]).unwrap_err();

    assert_eq!(
        err,
        RegistrationError::duplicate(
            "models::ISimpleObject",
            ["models::SimpleObject", "models::SimpleObject"],
        )
    );
    assert_eq!(services.len(), 0);
}

#[test]
fn test_throw_keeps_earlier_bindings_and_stops_the_pass() {
    let first = catalog([
        TypeDescriptor::interface("models::IClock"),
        TypeDescriptor::class("models::Clock").implementing("models::IClock"),
        simple_contract(),
        simple_object(),
        simple_object(),
        TypeDescriptor::interface("models::IQueue"),
        TypeDescriptor::class("models::Queue").implementing("models::IQueue"),
    ]);
    let second = TypeCatalog::new("jobs")
        .with_type(TypeDescriptor::interface("jobs::IRunner"))
        .with_type(TypeDescriptor::class("jobs::Runner").implementing("jobs::IRunner"));
    let mut services = ServiceCollection::new();

    let result = services.register_contracts([&first, &second]);

    assert!(result.unwrap_err().is_duplicate());
    assert_eq!(
        bindings(&services),
        vec![("models::IClock", "models::Clock", Lifetime::Scoped)]
    );
    assert!(!services.contains("jobs::IRunner"));
}

#[test]
fn test_catalogs_are_processed_in_order() {
    let first = catalog([simple_contract(), simple_object()]);
    let second = TypeCatalog::new("other")
        .with_type(TypeDescriptor::interface("models::ISimpleObject"))
        .with_type(
            TypeDescriptor::class("other::SimpleObject").implementing("models::ISimpleObject"),
        );
    let mut services = ServiceCollection::new();

    services.register_contracts([&first, &second]).unwrap();

    assert_eq!(
        bindings(&services),
        vec![("models::ISimpleObject", "models::SimpleObject", Lifetime::Scoped)]
    );
}

#[test]
fn test_already_registered_contract_is_not_overwritten() {
    let catalog = catalog([simple_contract(), simple_object(), simple_object()]);
    let mut services = ServiceCollection::new();
    services.add(wireup::ServiceDescriptor::new(
        simple_contract(),
        TypeDescriptor::class("manual::SimpleObject"),
        Lifetime::Singleton,
    ));

    // the ambiguous contract is never inspected because it is already present
    services.register_contracts([&catalog]).unwrap();

    assert_eq!(
        bindings(&services),
        vec![("models::ISimpleObject", "manual::SimpleObject", Lifetime::Singleton)]
    );
}

#[test]
fn test_classes_are_never_contract_keys() {
    let catalog = catalog([simple_object(), TypeDescriptor::class("models::ISimpleObject")]);
    let mut services = ServiceCollection::new();

    services.register_contracts([&catalog]).unwrap();

    assert!(services.is_empty());
}

#[test]
fn test_lifetime_resolution_order() {
    let catalog = catalog([
        TypeDescriptor::interface("models::IOverride").with_lifetime(Lifetime::Singleton),
        TypeDescriptor::class("models::Override")
            .implementing("models::IOverride")
            .with_lifetime(Lifetime::Transient),
        TypeDescriptor::interface("models::IInherit").with_lifetime(Lifetime::Singleton),
        TypeDescriptor::class("models::Inherit").implementing("models::IInherit"),
        TypeDescriptor::interface("models::IDefault"),
        TypeDescriptor::class("models::Default").implementing("models::IDefault"),
    ]);
    let mut services = ServiceCollection::new();

    services.register_contracts([&catalog]).unwrap();

    assert_eq!(
        bindings(&services),
        vec![
            ("models::IOverride", "models::Override", Lifetime::Transient),
            ("models::IInherit", "models::Inherit", Lifetime::Singleton),
            ("models::IDefault", "models::Default", Lifetime::Scoped),
        ]
    );
}

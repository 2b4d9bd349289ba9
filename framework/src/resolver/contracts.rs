//! Contract resolver
//!
//! Binds every contract in a catalog to the single class that implements it
//! and whose name follows the convention (`ISimpleObject` -> `SimpleObject`).
//! Contracts without an implementation are skipped; contracts with several
//! are handled by the [`DuplicationPolicy`].

use super::convention::{Convention, InterfacePrefix};
use super::policy::DuplicationPolicy;
use crate::catalog::{TypeCatalog, TypeDescriptor};
use crate::config::RegistrationConfig;
use crate::error::Result;
use crate::lifetime;
use crate::registry::{ServiceDescriptor, ServiceRegistry};
use tracing::{debug, info, warn};

/// Resolves contracts to implementations
///
/// # Example
///
/// ```rust
/// use wireup::{ContractResolver, DuplicationPolicy, ServiceCollection, ServiceRegistry};
/// use wireup::catalog::{TypeCatalog, TypeDescriptor};
///
/// let catalog = TypeCatalog::new("app")
///     .with_type(TypeDescriptor::interface("app::ISimpleObject"))
///     .with_type(TypeDescriptor::class("app::SimpleObject").implementing("app::ISimpleObject"));
///
/// let mut services = ServiceCollection::new();
/// ContractResolver::new(DuplicationPolicy::TakeFirst)
///     .resolve(&mut services, [&catalog])
///     .unwrap();
///
/// assert!(services.contains("app::ISimpleObject"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContractResolver<C = InterfacePrefix> {
    policy: DuplicationPolicy,
    convention: C,
}

impl ContractResolver {
    /// Resolver using the `I{ClassName}` convention
    pub fn new(policy: DuplicationPolicy) -> Self {
        Self {
            policy,
            convention: InterfacePrefix::default(),
        }
    }

    /// Resolver using the configured policy and contract prefix
    pub fn from_config(config: &RegistrationConfig) -> Self {
        Self {
            policy: config.duplication,
            convention: InterfacePrefix::new(config.contract_prefix.as_str()),
        }
    }
}

impl<C: Convention> ContractResolver<C> {
    /// Resolver with a custom naming convention
    pub fn with_convention(policy: DuplicationPolicy, convention: C) -> Self {
        Self { policy, convention }
    }

    pub fn policy(&self) -> DuplicationPolicy {
        self.policy
    }

    /// Resolve every catalog in order
    ///
    /// Each catalog is processed completely before the next one. A
    /// duplicate-implementation failure stops the whole call: bindings added
    /// before the failing contract stay in the registry and later catalogs
    /// are not visited.
    pub fn resolve<'c, R, I>(&self, registry: &mut R, catalogs: I) -> Result<usize>
    where
        R: ServiceRegistry + ?Sized,
        I: IntoIterator<Item = &'c TypeCatalog>,
    {
        let mut added = 0;
        for catalog in catalogs {
            added += self.resolve_catalog(registry, catalog)?;
        }
        Ok(added)
    }

    /// Resolve a single catalog, returning the number of bindings added
    pub fn resolve_catalog<R>(&self, registry: &mut R, catalog: &TypeCatalog) -> Result<usize>
    where
        R: ServiceRegistry + ?Sized,
    {
        let interfaces: Vec<&TypeDescriptor> = catalog.interfaces().collect();

        let mut added = 0;
        for contract in interfaces {
            if registry.contains(contract.qualified_name()) {
                debug!(contract = %contract, "contract already registered");
                continue;
            }

            let candidates = self.candidates(catalog, contract);
            if candidates.is_empty() {
                debug!(contract = %contract, "no implementation found");
                continue;
            }
            if candidates.len() > 1 {
                match self.policy {
                    DuplicationPolicy::ThrowOnDuplicate => warn!(
                        contract = %contract,
                        candidates = candidates.len(),
                        "ambiguous contract, aborting registration"
                    ),
                    DuplicationPolicy::Ignore => warn!(
                        contract = %contract,
                        candidates = candidates.len(),
                        "ambiguous contract ignored"
                    ),
                    DuplicationPolicy::TakeFirst => {}
                }
            }

            let Some(implementation) = self.policy.select(contract, &candidates)? else {
                continue;
            };

            let lifetime = lifetime::select(implementation, Some(contract));
            debug!(
                contract = %contract,
                implementation = %implementation,
                %lifetime,
                "registering contract"
            );
            registry.add(ServiceDescriptor::new(
                contract.clone(),
                implementation.clone(),
                lifetime,
            ));
            added += 1;
        }

        info!(
            module = catalog.module(),
            policy = %self.policy,
            added,
            "resolved contracts"
        );
        Ok(added)
    }

    /// Concrete classes of `catalog` implementing `contract` under the
    /// naming convention, in catalog order
    pub fn candidates<'a>(
        &self,
        catalog: &'a TypeCatalog,
        contract: &TypeDescriptor,
    ) -> Vec<&'a TypeDescriptor> {
        catalog
            .implementations()
            .filter(|class| catalog.is_assignable(class, contract))
            .filter(|class| self.convention.matches(contract, class))
            .collect()
    }
}

//! Type catalogs
//!
//! A catalog is the explicit, ordered list of type descriptors the resolvers
//! scan. It replaces runtime enumeration of a module's types:
//! - Built by hand with [`TypeCatalog::new`] and [`TypeCatalog::with_type`]
//! - Collected from `#[contract]` / `#[component]` / `#[injectable]`
//!   declarations with [`TypeCatalog::from_module`]
//! - Loaded from a JSON manifest produced by a build step
//!   ([`TypeCatalog::from_manifest_path`])
//!
//! # Example
//!
//! ```rust
//! use wireup::catalog::{TypeCatalog, TypeDescriptor};
//!
//! let catalog = TypeCatalog::new("app")
//!     .with_type(TypeDescriptor::interface("app::ISimpleObject"))
//!     .with_type(TypeDescriptor::class("app::SimpleObject").implementing("app::ISimpleObject"));
//!
//! assert_eq!(catalog.interfaces().count(), 1);
//! assert_eq!(catalog.implementations().count(), 1);
//! ```

pub mod entry;
pub mod manifest;

pub use entry::{CatalogEntry, Describe};

use crate::lifetime::Lifetime;
use manifest::{Manifest, ManifestType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Shape of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Contract-shaped type (a trait)
    Interface,
    /// Concrete, constructible class
    Class,
    /// Class that cannot be constructed on its own
    AbstractClass,
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interface => write!(f, "interface"),
            Self::Class => write!(f, "class"),
            Self::AbstractClass => write!(f, "abstract class"),
        }
    }
}

/// Statically declared metadata for one type
///
/// Two descriptors denote the same type iff their qualified names match;
/// equality and hashing only look at the qualified name. Serializes as a
/// manifest entry.
#[derive(Debug, Clone, Serialize)]
#[serde(into = "ManifestType")]
pub struct TypeDescriptor {
    name: String,
    qualified_name: String,
    kind: TypeKind,
    lifetime: Option<Lifetime>,
    assignable_to: Vec<String>,
}

impl TypeDescriptor {
    /// Create a descriptor of the given kind
    pub fn new(qualified_name: impl Into<String>, kind: TypeKind) -> Self {
        let qualified_name = qualified_name.into();
        Self {
            name: simple_name(&qualified_name).to_string(),
            qualified_name,
            kind,
            lifetime: None,
            assignable_to: Vec::new(),
        }
    }

    /// Create an interface descriptor
    pub fn interface(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name, TypeKind::Interface)
    }

    /// Create a concrete class descriptor
    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name, TypeKind::Class)
    }

    /// Create an abstract class descriptor
    pub fn abstract_class(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name, TypeKind::AbstractClass)
    }

    /// Attach a lifetime marker
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Replace the lifetime marker, `None` clears it
    pub fn with_marker(mut self, lifetime: Option<Lifetime>) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Declare that this type can be used as `qualified_name`
    pub fn implementing(mut self, qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        if !self.assignable_to.contains(&qualified_name) {
            self.assignable_to.push(qualified_name);
        }
        self
    }

    /// Simple (unqualified) name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified name, the identity of the type
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Lifetime marker, `None` when unspecified
    pub fn lifetime(&self) -> Option<Lifetime> {
        self.lifetime
    }

    /// Qualified names this type is declared assignable to
    pub fn assignable_to(&self) -> &[String] {
        &self.assignable_to
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Concrete (non-abstract) class
    pub fn is_concrete(&self) -> bool {
        self.kind == TypeKind::Class
    }

    /// Whether the type carries a lifetime marker
    pub fn is_marked(&self) -> bool {
        self.lifetime.is_some()
    }

    /// Whether this type is declared assignable to `target`
    ///
    /// Every type is assignable to itself. Only the type's own list is
    /// checked; see [`TypeCatalog::is_assignable`] for chains.
    pub fn is_assignable_to(&self, target: &TypeDescriptor) -> bool {
        self.qualified_name == target.qualified_name
            || self
                .assignable_to
                .iter()
                .any(|name| *name == target.qualified_name)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.qualified_name.hash(state);
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.qualified_name)
    }
}

/// Last path segment of a qualified name, without generic arguments
///
/// Accepts both `::` and `.` separators so catalogs produced for other
/// toolchains keep working.
pub fn simple_name(qualified_name: &str) -> &str {
    let path = qualified_name
        .split('<')
        .next()
        .unwrap_or(qualified_name)
        .trim_end();
    let tail = path.rsplit("::").next().unwrap_or(path);
    tail.rsplit('.').next().unwrap_or(tail)
}

/// Ordered list of type descriptors from one module
///
/// Serializes as a manifest, so `wireup inspect --json` output loads back.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(into = "Manifest")]
pub struct TypeCatalog {
    module: String,
    types: Vec<TypeDescriptor>,
}

impl TypeCatalog {
    /// Create an empty catalog for a module
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            types: Vec::new(),
        }
    }

    /// Create a catalog from descriptors, keeping their order
    pub fn from_types<I>(module: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        Self {
            module: module.into(),
            types: types.into_iter().collect(),
        }
    }

    /// Append a descriptor (builder style)
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.push(descriptor);
        self
    }

    /// Append a descriptor
    pub fn push(&mut self, descriptor: TypeDescriptor) {
        self.types.push(descriptor);
    }

    /// Name of the module the catalog describes
    pub fn module(&self) -> &str {
        &self.module
    }

    /// All descriptors in catalog order
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeDescriptor> {
        self.types.iter()
    }

    /// Interface descriptors in catalog order
    pub fn interfaces(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter().filter(|t| t.is_interface())
    }

    /// Concrete class descriptors in catalog order
    pub fn implementations(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter().filter(|t| t.is_concrete())
    }

    /// First descriptor with the given qualified name
    pub fn find(&self, qualified_name: &str) -> Option<&TypeDescriptor> {
        self.types
            .iter()
            .find(|t| t.qualified_name() == qualified_name)
    }

    /// Whether `ty` can be used where `target` is expected
    ///
    /// Follows `implements` chains through the descriptors of this catalog,
    /// so a class extending an abstract class that implements a contract is
    /// assignable to the contract. Names missing from the catalog end the
    /// chain.
    pub fn is_assignable(&self, ty: &TypeDescriptor, target: &TypeDescriptor) -> bool {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut pending: Vec<&str> = vec![ty.qualified_name()];

        while let Some(name) = pending.pop() {
            if name == target.qualified_name() {
                return true;
            }
            if !visited.insert(name) {
                continue;
            }
            let declared = match self.find(name) {
                Some(descriptor) => descriptor.assignable_to(),
                None if name == ty.qualified_name() => ty.assignable_to(),
                None => continue,
            };
            pending.extend(declared.iter().map(String::as_str));
        }
        false
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<'a> IntoIterator for &'a TypeCatalog {
    type Item = &'a TypeDescriptor;
    type IntoIter = std::slice::Iter<'a, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

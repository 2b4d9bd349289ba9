//! Compile-time type declarations collected via inventory
//!
//! The `#[contract]`, `#[component]` and `#[injectable]` macros implement
//! [`Describe`] for the annotated type and submit a [`CatalogEntry`]. At
//! runtime [`TypeCatalog::from_module`] gathers the entries of one module
//! tree into a catalog.
//!
//! # Example
//!
//! ```rust,ignore
//! use wireup::{contract, injectable, TypeCatalog};
//!
//! #[contract]
//! pub trait IMailer {}
//!
//! #[injectable(lifetime = "singleton", implements(IMailer))]
//! pub struct Mailer;
//! impl IMailer for Mailer {}
//!
//! let catalog = TypeCatalog::from_module(module_path!());
//! ```

use super::{TypeCatalog, TypeDescriptor};

/// Static metadata for a declared type
///
/// Contracts implement this for `dyn Trait`, classes for the struct itself.
pub trait Describe {
    /// `module_path!()` of the declaration joined with the type name
    const QUALIFIED_NAME: &'static str;

    /// Build the descriptor for this type
    fn descriptor() -> TypeDescriptor;
}

/// Entry for inventory-collected type declarations
///
/// Submitted by the declaration macros; not meant to be built by hand.
pub struct CatalogEntry {
    /// Module path the type was declared in
    pub module: &'static str,
    /// Source line of the declaration, used to keep declaration order
    pub line: u32,
    /// Function producing the descriptor
    pub describe: fn() -> TypeDescriptor,
}

inventory::collect!(CatalogEntry);

impl CatalogEntry {
    /// Whether the entry belongs to `module` or one of its submodules
    fn belongs_to(&self, module: &str) -> bool {
        self.module == module
            || self
                .module
                .strip_prefix(module)
                .is_some_and(|rest| rest.starts_with("::"))
    }
}

impl TypeCatalog {
    /// Collect the declared types of a module tree
    ///
    /// Entries are ordered by module path, then by source line, so the
    /// catalog follows declaration order within a file.
    pub fn from_module(module: &str) -> Self {
        let mut entries: Vec<&CatalogEntry> = inventory::iter::<CatalogEntry>
            .into_iter()
            .filter(|entry| entry.belongs_to(module))
            .collect();
        entries.sort_by(|a, b| a.module.cmp(b.module).then(a.line.cmp(&b.line)));

        tracing::debug!(module, types = entries.len(), "collected declared types");
        Self::from_types(module, entries.into_iter().map(|entry| (entry.describe)()))
    }

    /// Collect every declared type linked into the program
    pub fn collected() -> Self {
        let mut entries: Vec<&CatalogEntry> = inventory::iter::<CatalogEntry>.into_iter().collect();
        entries.sort_by(|a, b| a.module.cmp(b.module).then(a.line.cmp(&b.line)));
        Self::from_types("*", entries.into_iter().map(|entry| (entry.describe)()))
    }
}

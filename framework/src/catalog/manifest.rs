//! JSON catalog manifests
//!
//! A manifest is the serialized output of a build-time scan:
//!
//! ```json
//! {
//!     "module": "app",
//!     "types": [
//!         { "name": "app::ISimpleObject", "kind": "interface", "lifetime": "singleton" },
//!         { "name": "app::SimpleObject", "kind": "class", "implements": ["app::ISimpleObject"] }
//!     ]
//! }
//! ```

use super::{TypeCatalog, TypeDescriptor, TypeKind};
use crate::error::{RegistrationError, Result};
use crate::lifetime::Lifetime;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of a catalog
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Module the catalog describes
    pub module: String,
    /// Declared types, in catalog order
    #[serde(default)]
    pub types: Vec<ManifestType>,
}

/// One declared type in a manifest
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestType {
    /// Qualified name
    pub name: String,
    pub kind: TypeKind,
    /// Lifetime marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<Lifetime>,
    /// Qualified names the type is assignable to
    #[serde(default, alias = "assignable_to", skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<String>,
}

impl From<TypeDescriptor> for ManifestType {
    fn from(descriptor: TypeDescriptor) -> Self {
        Self {
            name: descriptor.qualified_name,
            kind: descriptor.kind,
            lifetime: descriptor.lifetime,
            implements: descriptor.assignable_to,
        }
    }
}

impl From<TypeCatalog> for Manifest {
    fn from(catalog: TypeCatalog) -> Self {
        Self {
            module: catalog.module,
            types: catalog.types.into_iter().map(ManifestType::from).collect(),
        }
    }
}

impl From<ManifestType> for TypeDescriptor {
    fn from(declared: ManifestType) -> Self {
        declared.implements.into_iter().fold(
            TypeDescriptor::new(declared.name, declared.kind).with_marker(declared.lifetime),
            TypeDescriptor::implementing,
        )
    }
}

impl From<Manifest> for TypeCatalog {
    fn from(manifest: Manifest) -> Self {
        TypeCatalog::from_types(
            manifest.module,
            manifest.types.into_iter().map(TypeDescriptor::from),
        )
    }
}

impl TypeCatalog {
    /// Parse a catalog from manifest JSON
    pub fn from_manifest_str(json: &str) -> Result<Self> {
        Self::parse_manifest(json, "<inline>")
    }

    /// Read and parse a manifest file
    pub fn from_manifest_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let json = std::fs::read_to_string(path)
            .map_err(|e| RegistrationError::manifest(display.as_str(), e))?;
        Self::parse_manifest(&json, &display)
    }

    fn parse_manifest(json: &str, origin: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_str(json).map_err(|e| RegistrationError::manifest(origin, e))?;
        let catalog = TypeCatalog::from(manifest);
        tracing::debug!(
            manifest = origin,
            module = catalog.module(),
            types = catalog.len(),
            "loaded catalog manifest"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "module": "app",
        "types": [
            { "name": "app::ISimpleObject", "kind": "interface", "lifetime": "singleton" },
            { "name": "app::BaseObject", "kind": "abstract_class" },
            { "name": "app::SimpleObject", "kind": "class", "implements": ["app::ISimpleObject"] }
        ]
    }"#;

    #[test]
    fn test_parse_manifest() {
        let catalog = TypeCatalog::from_manifest_str(MANIFEST).unwrap();

        assert_eq!(catalog.module(), "app");
        assert_eq!(catalog.len(), 3);

        let contract = &catalog.types()[0];
        assert!(contract.is_interface());
        assert_eq!(contract.name(), "ISimpleObject");
        assert_eq!(contract.lifetime(), Some(Lifetime::Singleton));

        assert_eq!(catalog.types()[1].kind(), TypeKind::AbstractClass);

        let implementation = &catalog.types()[2];
        assert!(implementation.is_concrete());
        assert!(implementation.is_assignable_to(contract));
        assert_eq!(implementation.lifetime(), None);
    }

    #[test]
    fn test_assignable_to_alias() {
        let json = r#"{ "module": "m", "types": [
            { "name": "m::A", "kind": "class", "assignable_to": ["m::IA"] }
        ] }"#;
        let catalog = TypeCatalog::from_manifest_str(json).unwrap();
        assert_eq!(catalog.types()[0].assignable_to(), ["m::IA".to_string()]);
    }

    #[test]
    fn test_serialized_catalog_loads_back() {
        let catalog = TypeCatalog::from_manifest_str(MANIFEST).unwrap();

        let json = serde_json::to_string(&catalog).unwrap();
        let reloaded = TypeCatalog::from_manifest_str(&json).unwrap();

        assert_eq!(reloaded.module(), "app");
        assert_eq!(reloaded.types(), catalog.types());
        let implementation = &reloaded.types()[2];
        assert_eq!(implementation.kind(), TypeKind::Class);
        assert_eq!(implementation.assignable_to(), ["app::ISimpleObject".to_string()]);
        assert_eq!(reloaded.types()[0].lifetime(), Some(Lifetime::Singleton));
    }

    #[test]
    fn test_serialized_descriptor_uses_manifest_fields() {
        let descriptor = TypeDescriptor::class("app::SimpleObject").implementing("app::ISimpleObject");

        let value = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "app::SimpleObject",
                "kind": "class",
                "implements": ["app::ISimpleObject"]
            })
        );
    }

    #[test]
    fn test_invalid_manifest() {
        let err = TypeCatalog::from_manifest_str(r#"{ "module": "m", "types": [ { "name": "m::A", "kind": "struct" } ] }"#)
            .unwrap_err();

        match err {
            RegistrationError::Manifest { path, .. } => assert_eq!(path, "<inline>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_manifest_file() {
        let err = TypeCatalog::from_manifest_path("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, RegistrationError::Manifest { .. }));
    }
}

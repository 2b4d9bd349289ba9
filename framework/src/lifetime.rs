//! Service lifetimes and lifetime selection

use crate::catalog::TypeDescriptor;
use crate::error::RegistrationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Scope of reuse for a constructed service instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// New instance per resolution
    Transient,
    /// One instance per container scope
    #[default]
    Scoped,
    /// One instance for the whole container
    Singleton,
}

impl Lifetime {
    /// Lowercase name used by configuration, manifests and the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transient => "transient",
            Self::Scoped => "scoped",
            Self::Singleton => "singleton",
        }
    }
}

impl std::fmt::Display for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lifetime {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transient" => Ok(Self::Transient),
            "scoped" => Ok(Self::Scoped),
            "singleton" => Ok(Self::Singleton),
            _ => Err(RegistrationError::InvalidLifetime(s.to_string())),
        }
    }
}

/// Pick the lifetime for a binding
///
/// A marker on the implementation wins over a marker on the contract, so an
/// implementation can override a contract-level default. Without either
/// marker the binding is scoped.
///
/// # Example
///
/// ```rust,ignore
/// let lifetime = wireup::lifetime::select(&implementation, Some(&contract));
/// ```
pub fn select(implementation: &TypeDescriptor, contract: Option<&TypeDescriptor>) -> Lifetime {
    implementation
        .lifetime()
        .or_else(|| contract.and_then(TypeDescriptor::lifetime))
        .unwrap_or_default()
}

//! Duplicate-implementation policy

use crate::catalog::TypeDescriptor;
use crate::error::{RegistrationError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do when a contract has more than one candidate implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicationPolicy {
    /// Fail the whole registration call
    #[default]
    ThrowOnDuplicate,
    /// Leave the contract unregistered
    Ignore,
    /// Register the first candidate in catalog order
    TakeFirst,
}

impl DuplicationPolicy {
    /// Pick the implementation to bind, if any
    ///
    /// A single candidate is always selected, whatever the policy. `Ok(None)`
    /// means the contract is skipped.
    pub fn select<'a>(
        self,
        contract: &TypeDescriptor,
        candidates: &[&'a TypeDescriptor],
    ) -> Result<Option<&'a TypeDescriptor>> {
        match (candidates, self) {
            ([], _) => Ok(None),
            ([only], _) => Ok(Some(*only)),
            (_, Self::Ignore) => Ok(None),
            ([first, ..], Self::TakeFirst) => Ok(Some(*first)),
            (_, Self::ThrowOnDuplicate) => Err(RegistrationError::duplicate(
                contract.qualified_name(),
                candidates.iter().map(|c| c.qualified_name()),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThrowOnDuplicate => "throw-on-duplicate",
            Self::Ignore => "ignore",
            Self::TakeFirst => "take-first",
        }
    }
}

impl std::fmt::Display for DuplicationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicationPolicy {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "throw" | "throw-on-duplicate" => Ok(Self::ThrowOnDuplicate),
            "ignore" => Ok(Self::Ignore),
            "take-first" | "first" => Ok(Self::TakeFirst),
            _ => Err(RegistrationError::InvalidPolicy(s.to_string())),
        }
    }
}

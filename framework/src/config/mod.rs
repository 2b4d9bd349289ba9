//! Registration configuration
//!
//! Settings come from environment variables (optionally loaded from `.env`
//! files) and can be overridden with a builder:
//!
//! | variable | default |
//! |---|---|
//! | `WIREUP_DUPLICATION` | `throw-on-duplicate` (`ignore`, `take-first`) |
//! | `WIREUP_CONTRACT_PREFIX` | `I` |
//!
//! # Example
//!
//! ```rust,no_run
//! use wireup::config::{load_dotenv, RegistrationConfig};
//! use wireup::DuplicationPolicy;
//!
//! load_dotenv(std::path::Path::new("."));
//! let config = RegistrationConfig::builder()
//!     .duplication(DuplicationPolicy::TakeFirst)
//!     .build();
//! ```

pub mod env;

pub use env::{env, env_optional, load_dotenv};

use crate::resolver::{DuplicationPolicy, InterfacePrefix};

/// Environment variable holding the duplication policy
pub const DUPLICATION_VAR: &str = "WIREUP_DUPLICATION";
/// Environment variable holding the contract name prefix
pub const CONTRACT_PREFIX_VAR: &str = "WIREUP_CONTRACT_PREFIX";

/// Contract registration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    /// Policy for contracts with several implementations
    pub duplication: DuplicationPolicy,
    /// Prefix that turns a class name into its contract name
    pub contract_prefix: String,
}

impl RegistrationConfig {
    /// Build config from environment variables
    pub fn from_env() -> Self {
        Self {
            duplication: env(DUPLICATION_VAR, DuplicationPolicy::default()),
            contract_prefix: env(CONTRACT_PREFIX_VAR, InterfacePrefix::DEFAULT.to_string()),
        }
    }

    /// Create a builder for customizing config
    pub fn builder() -> RegistrationConfigBuilder {
        RegistrationConfigBuilder::default()
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Builder for RegistrationConfig
#[derive(Default)]
pub struct RegistrationConfigBuilder {
    duplication: Option<DuplicationPolicy>,
    contract_prefix: Option<String>,
}

impl RegistrationConfigBuilder {
    /// Set the duplication policy
    pub fn duplication(mut self, policy: DuplicationPolicy) -> Self {
        self.duplication = Some(policy);
        self
    }

    /// Set the contract name prefix
    pub fn contract_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.contract_prefix = Some(prefix.into());
        self
    }

    /// Build the RegistrationConfig, taking unset values from the environment
    pub fn build(self) -> RegistrationConfig {
        let default = RegistrationConfig::from_env();
        RegistrationConfig {
            duplication: self.duplication.unwrap_or(default.duplication),
            contract_prefix: self.contract_prefix.unwrap_or(default.contract_prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = RegistrationConfig::builder()
            .duplication(DuplicationPolicy::Ignore)
            .contract_prefix("Abstract")
            .build();

        assert_eq!(config.duplication, DuplicationPolicy::Ignore);
        assert_eq!(config.contract_prefix, "Abstract");
    }
}

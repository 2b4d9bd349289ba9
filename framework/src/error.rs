//! Registration error types
//!
//! Convention scanning is mostly silent: a contract without an implementation
//! or a service that is already registered is an expected outcome, not a
//! fault. The only failure of the resolution pass itself is a contract with
//! several candidate implementations under the throw-on-duplicate policy.
//! The remaining variants come from parsing configuration values and loading
//! catalog manifests.

use thiserror::Error;

/// Convenience alias used across the crate
pub type Result<T, E = RegistrationError> = std::result::Result<T, E>;

/// Error type for registration and catalog loading
///
/// # Example
///
/// ```rust,ignore
/// use wireup::{Registrator, RegistrationError, ServiceCollection};
///
/// let mut services = ServiceCollection::new();
/// match services.register_contracts([&catalog]) {
///     Err(RegistrationError::DuplicateImplementation { contract, .. }) => {
///         eprintln!("ambiguous contract {contract}");
///     }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A contract matched more than one implementation under the
    /// throw-on-duplicate policy
    #[error(
        "There are {} implementations for the contract {contract}.\nImplementations:\n\t{}",
        implementations.len(),
        implementations.join("\n\t")
    )]
    DuplicateImplementation {
        /// Qualified name of the ambiguous contract
        contract: String,
        /// Qualified names of every candidate, in catalog order
        implementations: Vec<String>,
    },

    /// A duplication policy value could not be parsed
    #[error("Invalid duplication policy '{0}': expected one of throw, ignore, take-first")]
    InvalidPolicy(String),

    /// A lifetime value could not be parsed
    #[error("Invalid lifetime '{0}': expected one of transient, scoped, singleton")]
    InvalidLifetime(String),

    /// A catalog manifest could not be read or decoded
    #[error("Failed to load catalog manifest '{path}': {message}")]
    Manifest {
        /// Manifest path, or `<inline>` for manifests parsed from a string
        path: String,
        /// Underlying io or decoding error
        message: String,
    },
}

impl RegistrationError {
    /// Create a DuplicateImplementation error
    pub fn duplicate<I, S>(contract: impl Into<String>, implementations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::DuplicateImplementation {
            contract: contract.into(),
            implementations: implementations.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a Manifest error
    pub fn manifest(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Whether this error aborted a resolution pass
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateImplementation { .. })
    }
}

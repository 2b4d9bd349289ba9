//! Naming conventions pairing contracts with implementations
//!
//! A convention only looks at names. Assignability is checked separately by
//! the contract resolver, so swapping the convention never touches the
//! duplicate handling.

use crate::catalog::TypeDescriptor;

/// Decides whether an implementation's name fits a contract's name
pub trait Convention {
    fn matches(&self, contract: &TypeDescriptor, implementation: &TypeDescriptor) -> bool;
}

impl<F> Convention for F
where
    F: Fn(&TypeDescriptor, &TypeDescriptor) -> bool,
{
    fn matches(&self, contract: &TypeDescriptor, implementation: &TypeDescriptor) -> bool {
        self(contract, implementation)
    }
}

/// `I{ClassName}` style convention
///
/// The contract's simple name must be the prefix followed by the
/// implementation's simple name: `ISimpleObject` pairs with `SimpleObject`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfacePrefix {
    prefix: String,
}

impl InterfacePrefix {
    /// Prefix used when none is configured
    pub const DEFAULT: &'static str = "I";

    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for InterfacePrefix {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl Convention for InterfacePrefix {
    fn matches(&self, contract: &TypeDescriptor, implementation: &TypeDescriptor) -> bool {
        contract.name().strip_prefix(self.prefix.as_str()) == Some(implementation.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_prefix() {
        let convention = InterfacePrefix::default();
        let contract = TypeDescriptor::interface("app::ISimpleObject");

        assert!(convention.matches(&contract, &TypeDescriptor::class("app::SimpleObject")));
        assert!(convention.matches(&contract, &TypeDescriptor::class("other::SimpleObject")));
        assert!(!convention.matches(&contract, &TypeDescriptor::class("app::SimpleObject2")));
        assert!(!convention.matches(&contract, &TypeDescriptor::class("app::ISimpleObject")));
    }

    #[test]
    fn test_custom_prefix() {
        let convention = InterfacePrefix::new("Contract");
        let contract = TypeDescriptor::interface("app::ContractMailer");

        assert!(convention.matches(&contract, &TypeDescriptor::class("app::Mailer")));
        assert_eq!(convention.prefix(), "Contract");
    }

    #[test]
    fn test_closure_convention() {
        let suffix = |contract: &TypeDescriptor, implementation: &TypeDescriptor| {
            implementation.name() == format!("{}Impl", contract.name())
        };
        let contract = TypeDescriptor::interface("app::Mailer");

        assert!(suffix.matches(&contract, &TypeDescriptor::class("app::MailerImpl")));
        assert!(!suffix.matches(&contract, &TypeDescriptor::class("app::Mailer")));
    }
}

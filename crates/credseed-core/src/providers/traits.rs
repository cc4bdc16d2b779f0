//! Core traits and types for credential providers

use thiserror::Error;

use crate::types::SecretSlot;

/// Which provider, if any, supplies a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialInfo {
    /// Whether any provider has a value
    pub available: bool,
    /// Name of the provider that supplied the value
    pub source: String,
}

impl CredentialInfo {
    pub fn new(available: bool, source: impl Into<String>) -> Self {
        Self {
            available,
            source: source.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            available: false,
            source: "none".to_string(),
        }
    }
}

/// Errors from building provider chains
///
/// Resolution itself never fails; a missing credential is `None`.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Provider chain is empty")]
    EmptyChain,

    #[error("Unknown credential provider: {0}")]
    UnknownProvider(String),
}

pub type CredentialResult<T> = Result<T, CredentialError>;

/// Read-only source of TLS credentials
///
/// Implementations:
/// - `EnvCredentialProvider`: environment variable snapshot
/// - `PropertyCredentialProvider`: values already staged in the property store
/// - Custom implementations registered through `register_credential_provider`
///
/// `resolve` must be side-effect-free and must return `None` for an empty
/// value.
pub trait CredentialProvider: Send + Sync {
    /// Human-readable name of this provider
    fn name(&self) -> &str;

    /// Look up the value for a slot
    fn resolve(&self, slot: SecretSlot) -> Option<String>;

    /// Check if this provider has a value for a slot
    fn has(&self, slot: SecretSlot) -> bool {
        self.resolve(slot).is_some()
    }
}

//! Environment variable credential provider

use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use super::traits::CredentialProvider;
use crate::types::SecretSlot;

/// Credential provider backed by a snapshot of environment variables
///
/// The snapshot is taken once, at construction, so lookups stay
/// deterministic for the lifetime of a chain. Tests inject a map with
/// `with_vars` instead of touching the real environment.
///
/// # Slot Mapping
///
/// - key store → `SOLR_SSL_KEY_STORE_PASSWORD`
/// - trust store → `SOLR_SSL_TRUST_STORE_PASSWORD`
/// - client key store → `SOLR_SSL_CLIENT_KEY_STORE_PASSWORD`
/// - client trust store → `SOLR_SSL_CLIENT_TRUST_STORE_PASSWORD`
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use credseed_core::providers::{CredentialProvider, EnvCredentialProvider};
/// use credseed_core::types::SecretSlot;
///
/// let mut vars = HashMap::new();
/// vars.insert("SOLR_SSL_KEY_STORE_PASSWORD".to_string(), "pw123".to_string());
///
/// let provider = EnvCredentialProvider::with_vars(vars);
/// assert_eq!(provider.resolve(SecretSlot::KEY_STORE), Some("pw123".to_string()));
/// ```
#[derive(Clone, Default)]
pub struct EnvCredentialProvider {
    vars: Arc<HashMap<String, String>>,
}

impl EnvCredentialProvider {
    /// Snapshot the current process environment
    pub fn from_env() -> Self {
        Self::with_vars(env::vars().collect())
    }

    /// Use an explicit variable map
    pub fn with_vars(vars: HashMap<String, String>) -> Self {
        Self {
            vars: Arc::new(vars),
        }
    }

    /// Share an already captured snapshot
    pub fn with_shared_vars(vars: Arc<HashMap<String, String>>) -> Self {
        Self { vars }
    }

    /// Raw snapshot value for a variable, empty counts as absent
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn name(&self) -> &str {
        "env"
    }

    fn resolve(&self, slot: SecretSlot) -> Option<String> {
        self.var(slot.env_var()).map(str::to_string)
    }
}

// Only variable names are printed; the snapshot holds secrets
impl std::fmt::Debug for EnvCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bound: Vec<&str> = SecretSlot::ALL
            .iter()
            .map(|s| s.env_var())
            .filter(|name| self.var(name).is_some())
            .collect();
        f.debug_struct("EnvCredentialProvider")
            .field("vars", &format!("[{} vars]", self.vars.len()))
            .field("bound", &bound)
            .finish()
    }
}

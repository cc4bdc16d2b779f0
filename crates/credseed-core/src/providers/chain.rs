//! Ordered resolution chain over credential providers

use std::sync::Arc;

use super::env_provider::EnvCredentialProvider;
use super::property_provider::PropertyCredentialProvider;
use super::traits::{CredentialError, CredentialInfo, CredentialProvider, CredentialResult};
use crate::properties::PropertyStore;
use crate::types::{SecretCategory, SecretScope, SecretSlot};

/// An ordered, immutable list of credential providers
///
/// Lookups try each provider in order and return the first value found.
/// Order is fixed at construction and is the only thing that decides
/// precedence.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use credseed_core::properties::MemoryPropertyStore;
/// use credseed_core::providers::{
///     EnvCredentialProvider, PropertyCredentialProvider, ResolutionChain,
/// };
/// use credseed_core::types::SecretSlot;
///
/// let store = Arc::new(MemoryPropertyStore::new());
/// let chain = ResolutionChain::new(vec![
///     Arc::new(EnvCredentialProvider::with_vars(HashMap::new())),
///     Arc::new(PropertyCredentialProvider::new(store)),
/// ])
/// .unwrap();
///
/// assert_eq!(chain.resolve_slot(SecretSlot::KEY_STORE), None);
/// ```
#[derive(Clone)]
pub struct ResolutionChain {
    providers: Vec<Arc<dyn CredentialProvider>>,
}

impl ResolutionChain {
    /// Create a chain; at least one provider is required
    pub fn new(providers: Vec<Arc<dyn CredentialProvider>>) -> CredentialResult<Self> {
        if providers.is_empty() {
            return Err(CredentialError::EmptyChain);
        }
        Ok(Self { providers })
    }

    /// The default chain: environment snapshot first, then values already
    /// staged in `store`
    pub fn env_then_properties(env: EnvCredentialProvider, store: Arc<dyn PropertyStore>) -> Self {
        Self {
            providers: vec![
                Arc::new(env),
                Arc::new(PropertyCredentialProvider::new(store)),
            ],
        }
    }

    /// Get the providers in this chain
    pub fn providers(&self) -> &[Arc<dyn CredentialProvider>] {
        &self.providers
    }

    /// Provider names in precedence order
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// First value any provider has for `slot`
    pub fn resolve_slot(&self, slot: SecretSlot) -> Option<String> {
        self.providers.iter().find_map(|p| p.resolve(slot))
    }

    pub fn resolve(&self, category: SecretCategory, scope: SecretScope) -> Option<String> {
        self.resolve_slot(SecretSlot::new(category, scope))
    }

    /// First value for `slot` together with the name of the provider that
    /// supplied it, from a single pass over the chain
    pub fn resolve_with_source(&self, slot: SecretSlot) -> Option<(String, &str)> {
        self.providers
            .iter()
            .find_map(|p| p.resolve(slot).map(|value| (value, p.name())))
    }

    /// Find which provider supplies a slot
    pub fn find_provider(&self, slot: SecretSlot) -> Option<&Arc<dyn CredentialProvider>> {
        self.providers.iter().find(|p| p.has(slot))
    }

    /// Provenance of a slot's value
    pub fn get_info(&self, slot: SecretSlot) -> CredentialInfo {
        match self.find_provider(slot) {
            Some(provider) => CredentialInfo::new(true, provider.name()),
            None => CredentialInfo::not_found(),
        }
    }
}

// Implement Debug manually since Arc<dyn CredentialProvider> doesn't implement Debug
impl std::fmt::Debug for ResolutionChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionChain")
            .field("providers", &self.provider_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedProvider {
        name: &'static str,
        values: HashMap<SecretSlot, String>,
    }

    impl FixedProvider {
        fn new(name: &'static str, values: &[(SecretSlot, &str)]) -> Arc<Self> {
            Arc::new(Self {
                name,
                values: values.iter().map(|(s, v)| (*s, v.to_string())).collect(),
            })
        }
    }

    impl CredentialProvider for FixedProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn resolve(&self, slot: SecretSlot) -> Option<String> {
            self.values.get(&slot).filter(|v| !v.is_empty()).cloned()
        }
    }

    #[test]
    fn test_chain_requires_a_provider() {
        assert!(matches!(
            ResolutionChain::new(Vec::new()),
            Err(CredentialError::EmptyChain)
        ));
    }

    #[test]
    fn test_chain_priority() {
        let a = FixedProvider::new("a", &[(SecretSlot::KEY_STORE, "from_a")]);
        let b = FixedProvider::new("b", &[(SecretSlot::KEY_STORE, "from_b")]);
        let chain = ResolutionChain::new(vec![a, b]).unwrap();

        assert_eq!(chain.resolve_slot(SecretSlot::KEY_STORE), Some("from_a".to_string()));
    }

    #[test]
    fn test_chain_fallback() {
        let a = FixedProvider::new("a", &[]);
        let b = FixedProvider::new("b", &[(SecretSlot::TRUST_STORE, "from_b")]);
        let chain = ResolutionChain::new(vec![a, b]).unwrap();

        assert_eq!(chain.resolve_slot(SecretSlot::TRUST_STORE), Some("from_b".to_string()));
        assert_eq!(chain.resolve_slot(SecretSlot::KEY_STORE), None);
    }

    #[test]
    fn test_chain_skips_empty_values() {
        let a = FixedProvider::new("a", &[(SecretSlot::CLIENT_KEY_STORE, "")]);
        let b = FixedProvider::new("b", &[(SecretSlot::CLIENT_KEY_STORE, "pw")]);
        let chain = ResolutionChain::new(vec![a, b]).unwrap();

        assert_eq!(
            chain.resolve(SecretCategory::KeyStore, SecretScope::Client),
            Some("pw".to_string())
        );
    }

    #[test]
    fn test_chain_does_not_mix_slots() {
        let a = FixedProvider::new("a", &[(SecretSlot::KEY_STORE, "shared")]);
        let chain = ResolutionChain::new(vec![a]).unwrap();

        assert_eq!(chain.resolve_slot(SecretSlot::CLIENT_KEY_STORE), None);
    }

    #[test]
    fn test_chain_get_info() {
        let a = FixedProvider::new("a", &[]);
        let b = FixedProvider::new("b", &[(SecretSlot::KEY_STORE, "x")]);
        let chain = ResolutionChain::new(vec![a, b]).unwrap();

        assert_eq!(chain.get_info(SecretSlot::KEY_STORE), CredentialInfo::new(true, "b"));
        assert_eq!(chain.get_info(SecretSlot::TRUST_STORE), CredentialInfo::not_found());
        assert_eq!(chain.provider_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_chain_resolve_with_source() {
        let a = FixedProvider::new("a", &[(SecretSlot::KEY_STORE, "")]);
        let b = FixedProvider::new("b", &[(SecretSlot::KEY_STORE, "from_b")]);
        let chain = ResolutionChain::new(vec![a, b]).unwrap();

        assert_eq!(
            chain.resolve_with_source(SecretSlot::KEY_STORE),
            Some(("from_b".to_string(), "b"))
        );
        assert_eq!(chain.resolve_with_source(SecretSlot::TRUST_STORE), None);
    }

    #[test]
    fn test_chain_debug_lists_names() {
        let a = FixedProvider::new("a", &[(SecretSlot::KEY_STORE, "s3cr3t")]);
        let chain = ResolutionChain::new(vec![a]).unwrap();
        let debug = format!("{:?}", chain);
        assert!(debug.contains("\"a\""));
        assert!(!debug.contains("s3cr3t"));
    }
}

//! Pass-through provider over the property store

use std::sync::Arc;

use super::traits::CredentialProvider;
use crate::properties::PropertyStore;
use crate::types::SecretSlot;

/// Credential provider that reads values already staged as properties
///
/// Shared slots read the shared property name and client slots read the
/// client property name. Nothing is cached; every lookup sees the store's
/// current contents.
pub struct PropertyCredentialProvider {
    store: Arc<dyn PropertyStore>,
}

impl PropertyCredentialProvider {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }
}

impl CredentialProvider for PropertyCredentialProvider {
    fn name(&self) -> &str {
        "sysprop"
    }

    fn resolve(&self, slot: SecretSlot) -> Option<String> {
        self.store.get_non_empty(slot.property())
    }
}

impl std::fmt::Debug for PropertyCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyCredentialProvider")
            .field("store", &self.store.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::MemoryPropertyStore;

    #[test]
    fn test_property_provider_reads_target_names() {
        let store = Arc::new(MemoryPropertyStore::new());
        store.set("solr.jetty.keystore.password", "ks");
        store.set("javax.net.ssl.trustStorePassword", "cts");

        let p = PropertyCredentialProvider::new(store);
        assert_eq!(p.name(), "sysprop");
        assert_eq!(p.resolve(SecretSlot::KEY_STORE), Some("ks".to_string()));
        assert_eq!(p.resolve(SecretSlot::CLIENT_TRUST_STORE), Some("cts".to_string()));
        assert_eq!(p.resolve(SecretSlot::CLIENT_KEY_STORE), None);
        assert_eq!(p.resolve(SecretSlot::TRUST_STORE), None);
    }

    #[test]
    fn test_property_provider_sees_live_changes() {
        let store = Arc::new(MemoryPropertyStore::new());
        let p = PropertyCredentialProvider::new(store.clone());

        assert_eq!(p.resolve(SecretSlot::KEY_STORE), None);
        store.set("solr.jetty.keystore.password", "later");
        assert_eq!(p.resolve(SecretSlot::KEY_STORE), Some("later".to_string()));
    }

    #[test]
    fn test_property_provider_empty_is_absent() {
        let store = Arc::new(MemoryPropertyStore::new());
        store.set("javax.net.ssl.keyStorePassword", "");
        let p = PropertyCredentialProvider::new(store);
        assert_eq!(p.resolve(SecretSlot::CLIENT_KEY_STORE), None);
    }
}

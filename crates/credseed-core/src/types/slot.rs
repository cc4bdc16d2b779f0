//! Secret slot model: which of the four TLS passwords is being resolved

use std::fmt;

/// Which kind of secret a slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretCategory {
    KeyStore,
    TrustStore,
}

impl SecretCategory {
    /// All categories, in seeding order
    pub const ALL: [SecretCategory; 2] = [SecretCategory::KeyStore, SecretCategory::TrustStore];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecretCategory::KeyStore => "key_store",
            SecretCategory::TrustStore => "trust_store",
        }
    }
}

/// Whether a secret applies broadly or to the client side only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretScope {
    Shared,
    Client,
}

impl SecretScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretScope::Shared => "shared",
            SecretScope::Client => "client",
        }
    }
}

/// One (category, scope) pair
///
/// Each slot binds to exactly one environment variable and one target
/// property name. These names are a compatibility contract with existing
/// deployments and must not change.
///
/// | Slot | Environment variable | Property |
/// |---|---|---|
/// | key store, shared | `SOLR_SSL_KEY_STORE_PASSWORD` | `solr.jetty.keystore.password` |
/// | trust store, shared | `SOLR_SSL_TRUST_STORE_PASSWORD` | `solr.jetty.truststore.password` |
/// | key store, client | `SOLR_SSL_CLIENT_KEY_STORE_PASSWORD` | `javax.net.ssl.keyStorePassword` |
/// | trust store, client | `SOLR_SSL_CLIENT_TRUST_STORE_PASSWORD` | `javax.net.ssl.trustStorePassword` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecretSlot {
    pub category: SecretCategory,
    pub scope: SecretScope,
}

impl SecretSlot {
    pub const KEY_STORE: SecretSlot = SecretSlot::new(SecretCategory::KeyStore, SecretScope::Shared);
    pub const TRUST_STORE: SecretSlot = SecretSlot::new(SecretCategory::TrustStore, SecretScope::Shared);
    pub const CLIENT_KEY_STORE: SecretSlot = SecretSlot::new(SecretCategory::KeyStore, SecretScope::Client);
    pub const CLIENT_TRUST_STORE: SecretSlot = SecretSlot::new(SecretCategory::TrustStore, SecretScope::Client);

    /// All four slots
    pub const ALL: [SecretSlot; 4] = [
        SecretSlot::KEY_STORE,
        SecretSlot::TRUST_STORE,
        SecretSlot::CLIENT_KEY_STORE,
        SecretSlot::CLIENT_TRUST_STORE,
    ];

    pub const fn new(category: SecretCategory, scope: SecretScope) -> Self {
        Self { category, scope }
    }

    /// Environment variable bound to this slot
    pub fn env_var(&self) -> &'static str {
        match (self.category, self.scope) {
            (SecretCategory::KeyStore, SecretScope::Shared) => env_vars::SSL_KEY_STORE_PASSWORD,
            (SecretCategory::TrustStore, SecretScope::Shared) => env_vars::SSL_TRUST_STORE_PASSWORD,
            (SecretCategory::KeyStore, SecretScope::Client) => env_vars::SSL_CLIENT_KEY_STORE_PASSWORD,
            (SecretCategory::TrustStore, SecretScope::Client) => {
                env_vars::SSL_CLIENT_TRUST_STORE_PASSWORD
            }
        }
    }

    /// Process property bound to this slot
    pub fn property(&self) -> &'static str {
        match (self.category, self.scope) {
            (SecretCategory::KeyStore, SecretScope::Shared) => properties::SSL_KEY_STORE_PASSWORD,
            (SecretCategory::TrustStore, SecretScope::Shared) => properties::SSL_TRUST_STORE_PASSWORD,
            (SecretCategory::KeyStore, SecretScope::Client) => properties::SSL_CLIENT_KEY_STORE_PASSWORD,
            (SecretCategory::TrustStore, SecretScope::Client) => {
                properties::SSL_CLIENT_TRUST_STORE_PASSWORD
            }
        }
    }
}

impl fmt::Display for SecretSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category.as_str(), self.scope.as_str())
    }
}

/// Environment variable names
pub mod env_vars {
    pub const SSL_KEY_STORE_PASSWORD: &str = "SOLR_SSL_KEY_STORE_PASSWORD";
    pub const SSL_TRUST_STORE_PASSWORD: &str = "SOLR_SSL_TRUST_STORE_PASSWORD";
    pub const SSL_CLIENT_KEY_STORE_PASSWORD: &str = "SOLR_SSL_CLIENT_KEY_STORE_PASSWORD";
    pub const SSL_CLIENT_TRUST_STORE_PASSWORD: &str = "SOLR_SSL_CLIENT_TRUST_STORE_PASSWORD";

    /// Overrides the provider chain when the property is not set
    pub const SSL_CREDENTIAL_PROVIDER_CHAIN: &str = "SOLR_SSL_CREDENTIAL_PROVIDER_CHAIN";
}

/// Process property names
pub mod properties {
    pub const SSL_KEY_STORE_PASSWORD: &str = "solr.jetty.keystore.password";
    pub const SSL_TRUST_STORE_PASSWORD: &str = "solr.jetty.truststore.password";
    pub const SSL_CLIENT_KEY_STORE_PASSWORD: &str = "javax.net.ssl.keyStorePassword";
    pub const SSL_CLIENT_TRUST_STORE_PASSWORD: &str = "javax.net.ssl.trustStorePassword";

    pub const SSL_CREDENTIAL_PROVIDER_CHAIN: &str = "solr.ssl.credential.provider.chain";
}

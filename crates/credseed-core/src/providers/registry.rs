//! Credential provider registry and textual chain specs
//!
//! A chain is described as provider names joined by `;`, e.g. `env;sysprop`.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::chain::ResolutionChain;
use super::env_provider::EnvCredentialProvider;
use super::property_provider::PropertyCredentialProvider;
use super::traits::{CredentialError, CredentialProvider, CredentialResult};
use crate::properties::PropertyStore;
use crate::types::{env_vars, properties};

/// Chain used when nothing else is configured
pub const DEFAULT_PROVIDER_CHAIN: &str = "env;sysprop";

/// Separator between provider names in a chain spec
pub const CHAIN_SEPARATOR: char = ';';

/// Inputs available to provider factories
#[derive(Clone)]
pub struct ProviderContext {
    /// Environment snapshot shared by every provider built from this context
    pub env: Arc<HashMap<String, String>>,
    /// Process-wide property store
    pub store: Arc<dyn PropertyStore>,
}

impl ProviderContext {
    pub fn new(env: HashMap<String, String>, store: Arc<dyn PropertyStore>) -> Self {
        Self {
            env: Arc::new(env),
            store,
        }
    }

    /// Capture the live process environment
    pub fn from_process(store: Arc<dyn PropertyStore>) -> Self {
        Self::new(std::env::vars().collect(), store)
    }

    fn env_var(&self, name: &str) -> Option<&str> {
        self.env
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

impl std::fmt::Debug for ProviderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderContext")
            .field("env", &format!("[{} vars]", self.env.len()))
            .field("store", &self.store.name())
            .finish()
    }
}

/// Factory function type for creating providers
pub type ProviderFactory =
    Box<dyn Fn(&ProviderContext) -> Arc<dyn CredentialProvider> + Send + Sync>;

/// Definition of a registered provider
pub struct ProviderDefinition {
    /// Unique name, as used in chain specs
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: ProviderFactory,
}

impl std::fmt::Debug for ProviderDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Global registry of credential providers
static REGISTRY: Lazy<RwLock<HashMap<String, ProviderDefinition>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert(
        "env".to_string(),
        ProviderDefinition {
            name: "env".to_string(),
            description: "Read TLS passwords from SOLR_SSL_* environment variables".to_string(),
            factory: Box::new(|ctx: &ProviderContext| -> Arc<dyn CredentialProvider> {
                Arc::new(EnvCredentialProvider::with_shared_vars(ctx.env.clone()))
            }),
        },
    );

    map.insert(
        "sysprop".to_string(),
        ProviderDefinition {
            name: "sysprop".to_string(),
            description: "Read TLS passwords already set as process properties".to_string(),
            factory: Box::new(|ctx: &ProviderContext| -> Arc<dyn CredentialProvider> {
                Arc::new(PropertyCredentialProvider::new(ctx.store.clone()))
            }),
        },
    );

    RwLock::new(map)
});

/// Register a provider type, replacing any existing one with the same name
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use credseed_core::providers::{
///     register_credential_provider, CredentialProvider, EnvCredentialProvider, ProviderContext,
/// };
///
/// register_credential_provider(
///     "empty",
///     "Never has a value",
///     Box::new(|_ctx: &ProviderContext| -> Arc<dyn CredentialProvider> {
///         Arc::new(EnvCredentialProvider::default())
///     }),
/// );
/// ```
pub fn register_credential_provider(name: &str, description: &str, factory: ProviderFactory) {
    REGISTRY.write().insert(
        name.to_string(),
        ProviderDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a provider by name, or None if the name is not registered
pub fn create_credential_provider(
    name: &str,
    ctx: &ProviderContext,
) -> Option<Arc<dyn CredentialProvider>> {
    let registry = REGISTRY.read();
    registry.get(name).map(|def| (def.factory)(ctx))
}

/// List all registered providers as (name, description) pairs
pub fn list_credential_providers() -> Vec<(String, String)> {
    let registry = REGISTRY.read();
    let mut list: Vec<_> = registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect();
    list.sort();
    list
}

pub fn has_credential_provider(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Unregister a provider (mainly for testing)
pub fn unregister_credential_provider(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}

/// Split a chain spec into provider names
///
/// Whitespace around names is trimmed and empty segments are skipped.
pub fn parse_chain_spec(spec: &str) -> Vec<String> {
    spec.split(CHAIN_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decide which provider names make up the chain
///
/// Checked in order: the `solr.ssl.credential.provider.chain` property,
/// the `SOLR_SSL_CREDENTIAL_PROVIDER_CHAIN` variable, `configured` (from
/// the config file), then `DEFAULT_PROVIDER_CHAIN`.
pub fn resolve_chain_names(ctx: &ProviderContext, configured: Option<&[String]>) -> Vec<String> {
    if let Some(spec) = ctx
        .store
        .get_non_empty(properties::SSL_CREDENTIAL_PROVIDER_CHAIN)
        .filter(|s| !s.trim().is_empty())
    {
        return parse_chain_spec(&spec);
    }
    if let Some(spec) = ctx.env_var(env_vars::SSL_CREDENTIAL_PROVIDER_CHAIN) {
        return parse_chain_spec(spec);
    }
    if let Some(names) = configured.filter(|n| !n.is_empty()) {
        return names.to_vec();
    }
    parse_chain_spec(DEFAULT_PROVIDER_CHAIN)
}

/// Build a chain from provider names, in order
pub fn build_chain_from_names(
    names: &[String],
    ctx: &ProviderContext,
) -> CredentialResult<ResolutionChain> {
    let providers = names
        .iter()
        .map(|name| {
            create_credential_provider(name, ctx)
                .ok_or_else(|| CredentialError::UnknownProvider(name.clone()))
        })
        .collect::<CredentialResult<Vec<_>>>()?;
    ResolutionChain::new(providers)
}

/// Build a chain from a spec such as `env;sysprop`
pub fn build_chain(spec: &str, ctx: &ProviderContext) -> CredentialResult<ResolutionChain> {
    build_chain_from_names(&parse_chain_spec(spec), ctx)
}

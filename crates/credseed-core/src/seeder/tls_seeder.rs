//! One-time seeding of TLS passwords into the property store

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::CredseedConfig;
use crate::logging::{ConsoleLogger, NoOpLogger, SharedLogger};
use crate::properties::{process_properties, PropertyStore};
use crate::providers::{
    build_chain_from_names, resolve_chain_names, CredentialResult, EnvCredentialProvider,
    ProviderContext, ResolutionChain,
};
use crate::types::{SecretCategory, SecretScope, SecretSlot};
use crate::{log_debug, log_info};

/// Resolves TLS passwords through a chain and seeds the client properties
///
/// The four accessors are raw single-slot lookups. `init` applies the
/// client-then-shared merge and writes each client property only when it is
/// not already set, so an operator-supplied value always survives.
///
/// `init` reads then writes without holding a lock across the two steps;
/// call it from a single bootstrap path.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use credseed_core::properties::{MemoryPropertyStore, PropertyStore};
/// use credseed_core::seeder::TlsCredentialSeeder;
///
/// let mut env = HashMap::new();
/// env.insert("SOLR_SSL_KEY_STORE_PASSWORD".to_string(), "pw123".to_string());
///
/// let store = Arc::new(MemoryPropertyStore::new());
/// TlsCredentialSeeder::with_default_chain(env, store.clone()).init();
///
/// assert_eq!(store.get("javax.net.ssl.keyStorePassword"), Some("pw123".to_string()));
/// ```
pub struct TlsCredentialSeeder {
    chain: ResolutionChain,
    store: Arc<dyn PropertyStore>,
    logger: SharedLogger,
}

impl TlsCredentialSeeder {
    /// Create a seeder over an existing chain and the store it seeds into
    pub fn new(chain: ResolutionChain, store: Arc<dyn PropertyStore>) -> Self {
        Self {
            chain,
            store,
            logger: Arc::new(NoOpLogger::new()),
        }
    }

    /// Environment first, then properties already in `store`
    pub fn with_default_chain(env: HashMap<String, String>, store: Arc<dyn PropertyStore>) -> Self {
        let chain = ResolutionChain::env_then_properties(
            EnvCredentialProvider::with_vars(env),
            store.clone(),
        );
        Self::new(chain, store)
    }

    /// Build a seeder for this process
    ///
    /// Captures the live environment, uses `process_properties()` as the
    /// store, builds the chain named by the chain property, the chain
    /// variable, the config, or the default, then stages the config's
    /// properties. With `console_log` set in the config, seeding is logged
    /// to the console.
    pub fn bootstrap(config: &CredseedConfig) -> CredentialResult<Self> {
        Self::bootstrap_with(ProviderContext::from_process(process_properties()), config)
    }

    /// Same as `bootstrap` with an explicit context
    pub fn bootstrap_with(ctx: ProviderContext, config: &CredseedConfig) -> CredentialResult<Self> {
        // Chain names are settled before staging, so a chain key under
        // `properties:` ranks with the config file, below the env variable
        let configured = config.provider_chain_names();
        let names = resolve_chain_names(&ctx, configured.as_deref());
        let chain = build_chain_from_names(&names, &ctx)?;

        config.apply_properties(ctx.store.as_ref());

        let seeder = Self::new(chain, ctx.store);
        if config.console_log {
            return Ok(seeder.with_logger(Arc::new(ConsoleLogger::new())));
        }
        Ok(seeder)
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn chain(&self) -> &ResolutionChain {
        &self.chain
    }

    pub fn store(&self) -> &Arc<dyn PropertyStore> {
        &self.store
    }

    pub fn resolve_slot(&self, slot: SecretSlot) -> Option<String> {
        self.chain.resolve_slot(slot)
    }

    pub fn resolve(&self, category: SecretCategory, scope: SecretScope) -> Option<String> {
        self.chain.resolve(category, scope)
    }

    pub fn key_store_password(&self) -> Option<String> {
        self.resolve_slot(SecretSlot::KEY_STORE)
    }

    pub fn trust_store_password(&self) -> Option<String> {
        self.resolve_slot(SecretSlot::TRUST_STORE)
    }

    pub fn client_key_store_password(&self) -> Option<String> {
        self.resolve_slot(SecretSlot::CLIENT_KEY_STORE)
    }

    pub fn client_trust_store_password(&self) -> Option<String> {
        self.resolve_slot(SecretSlot::CLIENT_TRUST_STORE)
    }

    /// Client value for `category`, falling back to the shared value
    ///
    /// The shared slot is only consulted after every provider missed the
    /// client slot.
    pub fn effective_password(&self, category: SecretCategory) -> Option<String> {
        self.resolve(category, SecretScope::Client)
            .or_else(|| self.resolve(category, SecretScope::Shared))
    }

    /// Effective value with the slot and provider it came from
    fn effective_with_source(&self, category: SecretCategory) -> Option<(String, SecretSlot, &str)> {
        [SecretScope::Client, SecretScope::Shared]
            .into_iter()
            .map(|scope| SecretSlot::new(category, scope))
            .find_map(|slot| {
                self.chain
                    .resolve_with_source(slot)
                    .map(|(value, source)| (value, slot, source))
            })
    }

    /// Seed the client key-store and trust-store password properties
    ///
    /// For each category, a client property that is already set is left
    /// untouched. Otherwise it receives the client value, or the shared
    /// value if no provider has a client value. When neither exists the
    /// property stays unset. Never fails.
    pub fn init(&self) {
        for category in SecretCategory::ALL {
            self.seed(category);
        }
    }

    fn seed(&self, category: SecretCategory) {
        let client_prop = SecretSlot::new(category, SecretScope::Client).property();

        if self.store.has(client_prop) {
            log_debug!(self.logger, "{} already set, leaving it unchanged", client_prop);
            return;
        }

        let Some((value, slot, source)) = self.effective_with_source(category) else {
            log_debug!(
                self.logger,
                "No {} password configured, {} stays unset",
                category.as_str(),
                client_prop
            );
            return;
        };

        log_info!(self.logger, "Setting {} from {} ({})", client_prop, source, slot);
        self.store.set(client_prop, &value);
    }
}

impl std::fmt::Debug for TlsCredentialSeeder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsCredentialSeeder")
            .field("chain", &self.chain)
            .field("store", &self.store.name())
            .finish()
    }
}

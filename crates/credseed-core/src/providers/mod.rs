//! Credential providers and the resolution chain
//!
//! - `CredentialProvider` trait for read-only credential sources
//! - Built-in implementations: `EnvCredentialProvider`, `PropertyCredentialProvider`
//! - `ResolutionChain`: ordered, first-non-empty-wins lookup
//! - A registry for building chains from specs like `env;sysprop`

mod traits;
mod env_provider;
mod property_provider;
mod chain;
mod registry;

pub use traits::{CredentialProvider, CredentialInfo, CredentialError, CredentialResult};
pub use env_provider::EnvCredentialProvider;
pub use property_provider::PropertyCredentialProvider;
pub use chain::ResolutionChain;
pub use registry::{
    register_credential_provider, create_credential_provider, list_credential_providers,
    has_credential_provider, unregister_credential_provider,
    parse_chain_spec, resolve_chain_names, build_chain, build_chain_from_names,
    ProviderContext, ProviderDefinition, ProviderFactory,
    DEFAULT_PROVIDER_CHAIN, CHAIN_SEPARATOR,
};

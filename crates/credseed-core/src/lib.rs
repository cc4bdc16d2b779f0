//! Credseed Core
//!
//! Layered resolution of TLS key-store and trust-store passwords, and
//! one-time seeding of the resolved values into process-wide properties.
//!
//! Passwords come from an ordered chain of providers (environment
//! variables first, then properties already set in the process). The
//! seeder copies the effective client passwords into the properties a TLS
//! layer reads later, never replacing a value an operator already set.
//!
//! ```rust,no_run
//! use credseed_core::config::CredseedConfig;
//! use credseed_core::seeder::TlsCredentialSeeder;
//!
//! let config = CredseedConfig::load_user()?;
//! let seeder = TlsCredentialSeeder::bootstrap(&config)?;
//! seeder.init();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod types;
pub mod properties;
pub mod providers;
pub mod config;
pub mod seeder;
pub mod logging;

// Re-export commonly used types
pub use types::{SecretCategory, SecretScope, SecretSlot};

pub use properties::{PropertyStore, MemoryPropertyStore, process_properties};

pub use providers::{
    CredentialProvider, CredentialInfo, CredentialError, CredentialResult,
    EnvCredentialProvider, PropertyCredentialProvider, ResolutionChain, ProviderContext,
    register_credential_provider, build_chain, DEFAULT_PROVIDER_CHAIN,
};

pub use config::{CredseedConfig, ConfigError, ConfigResult};

pub use seeder::TlsCredentialSeeder;

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger};

//! TLS credential seeding
//!
//! `TlsCredentialSeeder` resolves the four TLS passwords through a
//! `ResolutionChain` and stages the client key-store and trust-store
//! passwords into the property store once, at bootstrap.

mod tls_seeder;

pub use tls_seeder::TlsCredentialSeeder;

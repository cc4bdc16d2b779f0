//! Core types for TLS credential slots

mod slot;

pub use slot::{SecretCategory, SecretScope, SecretSlot, env_vars, properties};

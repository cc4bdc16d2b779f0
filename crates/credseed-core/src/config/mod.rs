//! Configuration file support
//!
//! `CredseedConfig` is read from YAML (user-level by default) and supplies
//! the provider chain plus properties to stage before seeding.

mod file;

pub use file::{ConfigError, ConfigResult, ChainSetting, CredseedConfig};

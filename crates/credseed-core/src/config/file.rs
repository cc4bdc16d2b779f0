//! YAML configuration file
//!
//! Default location is `<config_dir>/credseed/config.yaml`
//! (`~/.config/credseed/config.yaml` on Linux).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::properties::PropertyStore;
use crate::providers::parse_chain_spec;

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Provider chain as written in the file: either `"env;sysprop"` or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainSetting {
    Spec(String),
    Names(Vec<String>),
}

impl ChainSetting {
    /// Provider names in order
    pub fn names(&self) -> Vec<String> {
        match self {
            ChainSetting::Spec(spec) => parse_chain_spec(spec),
            ChainSetting::Names(names) => names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Configuration file structure
///
/// ```yaml
/// provider_chain: env;sysprop
/// console_log: true
/// properties:
///   solr.jetty.keystore.password: secret
/// ```
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredseedConfig {
    /// Provider chain, used when neither the property nor the environment
    /// variable names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_chain: Option<ChainSetting>,

    /// Properties staged into the store before seeding
    #[serde(default)]
    pub properties: BTreeMap<String, String>,

    /// Log seeding decisions to the console
    #[serde(default)]
    pub console_log: bool,
}

impl CredseedConfig {
    /// Default user-level config path
    pub fn user_config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("credseed").join("config.yaml")
    }

    /// Load from a file; a missing file yields the default config
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load the user-level config
    pub fn load_user() -> ConfigResult<Self> {
        Self::load(Self::user_config_path())
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save to a file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    /// Provider names from the file, if any
    pub fn provider_chain_names(&self) -> Option<Vec<String>> {
        self.provider_chain
            .as_ref()
            .map(ChainSetting::names)
            .filter(|names| !names.is_empty())
    }

    /// Stage configured properties into `store`
    ///
    /// Properties already present in the store are left alone. Returns the
    /// keys that were written.
    pub fn apply_properties(&self, store: &dyn PropertyStore) -> Vec<String> {
        self.properties
            .iter()
            .filter(|(key, value)| !value.is_empty() && !store.has(key))
            .map(|(key, value)| {
                store.set(key, value);
                key.clone()
            })
            .collect()
    }
}

// Property values may be passwords; print keys only
impl std::fmt::Debug for CredseedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredseedConfig")
            .field("provider_chain", &self.provider_chain)
            .field("properties", &self.properties.keys().collect::<Vec<_>>())
            .field("console_log", &self.console_log)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::MemoryPropertyStore;

    #[test]
    fn test_parse_spec_string() {
        let config = CredseedConfig::from_yaml_str("provider_chain: sysprop;env\n").unwrap();
        assert_eq!(config.provider_chain_names(), Some(vec!["sysprop".to_string(), "env".to_string()]));
        assert!(config.properties.is_empty());
        assert!(!config.console_log);
    }

    #[test]
    fn test_parse_name_list_and_properties() {
        let yaml = r#"
provider_chain:
  - env
  - " sysprop "
properties:
  solr.jetty.keystore.password: ks
"#;
        let config = CredseedConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.provider_chain_names(), Some(vec!["env".to_string(), "sysprop".to_string()]));
        assert_eq!(
            config.properties.get("solr.jetty.keystore.password"),
            Some(&"ks".to_string())
        );
    }

    #[test]
    fn test_empty_content_is_default() {
        assert_eq!(CredseedConfig::from_yaml_str("  \n").unwrap(), CredseedConfig::default());
        assert_eq!(CredseedConfig::default().provider_chain_names(), None);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = CredseedConfig::from_yaml_str("properties: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CredseedConfig::load(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, CredseedConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = CredseedConfig {
            provider_chain: Some(ChainSetting::Spec("env".to_string())),
            ..Default::default()
        };
        config
            .properties
            .insert("javax.net.ssl.trustStorePassword".to_string(), "ts".to_string());
        config.save(&path).unwrap();

        assert_eq!(CredseedConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_apply_properties_keeps_existing() {
        let store = MemoryPropertyStore::new();
        store.set("solr.jetty.keystore.password", "operator");

        let mut config = CredseedConfig::default();
        config.properties.insert("solr.jetty.keystore.password".to_string(), "file".to_string());
        config.properties.insert("solr.jetty.truststore.password".to_string(), "file_ts".to_string());
        config.properties.insert("javax.net.ssl.keyStorePassword".to_string(), String::new());

        let written = config.apply_properties(&store);
        assert_eq!(written, vec!["solr.jetty.truststore.password".to_string()]);
        assert_eq!(store.get("solr.jetty.keystore.password"), Some("operator".to_string()));
        assert_eq!(store.get("solr.jetty.truststore.password"), Some("file_ts".to_string()));
        assert!(!store.has("javax.net.ssl.keyStorePassword"));
    }

    #[test]
    fn test_debug_hides_values() {
        let mut config = CredseedConfig::default();
        config.properties.insert("k".to_string(), "hunter2".to_string());
        assert!(!format!("{:?}", config).contains("hunter2"));
    }

    #[test]
    fn test_user_config_path() {
        let path = CredseedConfig::user_config_path();
        assert!(path.ends_with("credseed/config.yaml"));
    }
}

//! Configuration schema for favcache
//!
//! Configuration is stored at `~/.config/favcache/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Favicon provider settings
    pub provider: ProviderConfig,

    /// Cache location settings
    pub cache: CacheConfig,
}

/// Favicon provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Origin of the favicon provider
    pub origin: String,

    /// Image size segment in the provider path template
    pub size: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            origin: "https://favicon.enpass.io".to_string(),
            size: "120x120".to_string(),
        }
    }
}

/// Cache location settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache root directory (defaults to the platform cache dir)
    pub dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[provider]"));
        assert!(toml.contains("[cache]"));
    }

    #[test]
    fn config_deserializes_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.provider.origin, "https://favicon.enpass.io");
        assert_eq!(config.provider.size, "120x120");
        assert!(config.cache.dir.is_none());
    }

    #[test]
    fn config_deserializes_partial() {
        let toml = r#"
            [provider]
            origin = "https://icons.example.org"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.provider.origin, "https://icons.example.org");
        assert_eq!(config.provider.size, "120x120"); // default preserved
    }
}

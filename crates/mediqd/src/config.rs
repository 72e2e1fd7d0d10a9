//! Configuration management for mediqd.
//!
//! Loads settings from /etc/mediq/config.toml or uses defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/mediq/config.toml";

/// Fallback config file path
pub const FALLBACK_CONFIG_PATH: &str = "/var/lib/mediq/config.toml";

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address; localhost only by default
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:7810".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// Triage engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Number named in the emergency alert text
    #[serde(default = "default_emergency_number")]
    pub emergency_number: String,
}

fn default_emergency_number() -> String {
    "911".to_string()
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            emergency_number: default_emergency_number(),
        }
    }
}

/// Session store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsConfig {
    /// LRU capacity of the context store
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Staleness window after the last message, in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Background sweep cadence, in seconds
    #[serde(default = "default_prune_interval_secs")]
    pub prune_interval_secs: u64,
}

fn default_max_sessions() -> usize {
    1024
}

fn default_ttl_secs() -> u64 {
    1800 // 30 minutes
}

fn default_prune_interval_secs() -> u64 {
    60
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            ttl_secs: default_ttl_secs(),
            prune_interval_secs: default_prune_interval_secs(),
        }
    }
}

/// Full daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub triage: TriageConfig,

    #[serde(default)]
    pub sessions: SessionsConfig,
}

impl Config {
    /// Load from the standard paths, falling back to defaults
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_PATH)
            .or_else(|_| Self::load_from_path(FALLBACK_CONFIG_PATH))
            .unwrap_or_else(|e| {
                warn!("Config not found, using defaults: {}", e);
                Config::default()
            })
    }

    /// Load config from a specific path
    fn load_from_path(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!("Loaded config from {}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind, "127.0.0.1:7810");
        assert_eq!(config.triage.emergency_number, "911");
        assert_eq!(config.sessions.max_sessions, 1024);
        assert_eq!(config.sessions.ttl_secs, 1800);
        assert_eq!(config.sessions.prune_interval_secs, 60);
    }

    #[test]
    fn test_parse_toml_partial() {
        let toml_str = r#"
[triage]
emergency_number = "112"

[sessions]
ttl_secs = 600
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.triage.emergency_number, "112");
        assert_eq!(config.sessions.ttl_secs, 600);
        // Defaults for missing sections and fields
        assert_eq!(config.server.bind, "127.0.0.1:7810");
        assert_eq!(config.sessions.max_sessions, 1024);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.triage.emergency_number, "911");
    }
}

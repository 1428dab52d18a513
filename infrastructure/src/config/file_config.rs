//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file and are
//! deserialized directly by the loader.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend gateway settings
    pub gateway: FileGatewayConfig,
    /// Credential storage settings
    pub auth: FileAuthConfig,
    /// Interactive REPL settings
    pub repl: FileReplConfig,
}

/// `[gateway]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Base URL of the assistant backend
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 60,
        }
    }
}

/// `[auth]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Token file path; defaults to `<config dir>/uni-assist/token`
    pub token_file: Option<PathBuf>,
}

/// `[repl]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// How many preset questions to suggest for a new conversation
    pub presets_shown: usize,
    /// Readline history file; defaults to `<data dir>/uni-assist/history.txt`
    pub history_file: Option<PathBuf>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            presets_shown: 3,
            history_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.gateway.base_url, "http://localhost:8000");
        assert_eq!(config.gateway.timeout_secs, 60);
        assert_eq!(config.repl.presets_shown, 3);
        assert!(config.auth.token_file.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [gateway]
            base_url = "https://assistant.example.edu/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.base_url, "https://assistant.example.edu/api");
        assert_eq!(config.gateway.timeout_secs, 60);
    }
}

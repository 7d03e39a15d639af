//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Collection webhook used when nothing else is configured
pub const DEFAULT_ENDPOINT_URL: &str = "https://hooks.zapier.com/hooks/catch/11559545/2r2s2qn/";

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV_VAR: &str = "LEADGEN_ENDPOINT_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Collection webhook URL
    pub endpoint_url: Option<String>,
    /// Give up on a submission after this many seconds. Unset waits forever.
    pub submit_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "quetico", "leadgen-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint to post to, honoring the environment override
    pub fn endpoint(&self) -> String {
        self.resolve_endpoint(std::env::var(ENDPOINT_ENV_VAR).ok())
    }

    fn resolve_endpoint(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.endpoint_url.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string())
    }

    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.endpoint_url.is_none());
        assert!(config.submit_timeout_secs.is_none());
        assert!(config.submit_timeout().is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            endpoint_url: Some("http://localhost:8080/hook".to_string()),
            submit_timeout_secs: Some(30),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.endpoint_url,
            Some("http://localhost:8080/hook".to_string())
        );
        assert_eq!(parsed.submit_timeout_secs, Some(30));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"submit_timeout_secs": 5, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.submit_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = TuiConfig {
            submit_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(config.submit_timeout().is_none());
    }

    #[test]
    fn test_resolve_endpoint_defaults_to_embedded_url() {
        let config = TuiConfig::default();
        assert_eq!(config.resolve_endpoint(None), DEFAULT_ENDPOINT_URL);
    }

    #[test]
    fn test_resolve_endpoint_prefers_env_then_file() {
        let config = TuiConfig {
            endpoint_url: Some("http://file.example/hook".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_endpoint(None), "http://file.example/hook");
        assert_eq!(
            config.resolve_endpoint(Some("http://env.example/hook".to_string())),
            "http://env.example/hook"
        );
        assert_eq!(
            config.resolve_endpoint(Some("  ".to_string())),
            "http://file.example/hook"
        );
    }

    #[test]
    fn test_load_returns_ok() {
        // Returns the default config when no file exists
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}

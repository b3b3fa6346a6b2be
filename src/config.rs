//! Configuration handling for the TUI

use crate::account::DEFAULT_LATENCY;
use crate::state::{SignupPolicy, DEFAULT_ADMIN_CODE, DEFAULT_MIN_PASSWORD_LENGTH};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the admin verification code
pub const ADMIN_CODE_ENV: &str = "CODEMASTERS_ADMIN_CODE";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Admin verification code (placeholder, not a security control)
    pub admin_code: Option<String>,
    /// Minimum password length accepted by the signup form
    pub min_password_length: Option<usize>,
    /// Simulated account service latency in milliseconds
    pub account_latency_ms: Option<u64>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "codemasters", "codemasters-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Admin code from the environment, then the file, then the built-in default
    pub fn resolve_admin_code(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|code| !code.is_empty())
            .or_else(|| self.admin_code.clone())
            .unwrap_or_else(|| DEFAULT_ADMIN_CODE.to_string())
    }

    /// Checks applied by the signup form
    pub fn signup_policy(&self) -> SignupPolicy {
        SignupPolicy {
            admin_code: self.resolve_admin_code(std::env::var(ADMIN_CODE_ENV).ok()),
            min_password_length: self
                .min_password_length
                .unwrap_or(DEFAULT_MIN_PASSWORD_LENGTH),
        }
    }

    pub fn account_latency(&self) -> Duration {
        self.account_latency_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LATENCY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.admin_code.is_none());
        assert!(config.min_password_length.is_none());
        assert!(config.account_latency_ms.is_none());
    }

    #[test]
    fn test_defaults_resolve_to_builtins() {
        let config = AppConfig::default();
        assert_eq!(config.resolve_admin_code(None), "123456");
        assert_eq!(config.account_latency(), Duration::from_millis(800));
    }

    #[test]
    fn test_admin_code_precedence() {
        let config = AppConfig {
            admin_code: Some("from-file".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_admin_code(None), "from-file");
        assert_eq!(
            config.resolve_admin_code(Some("from-env".to_string())),
            "from-env"
        );
        assert_eq!(config.resolve_admin_code(Some(String::new())), "from-file");
    }

    #[test]
    fn test_signup_policy_min_length() {
        let config = AppConfig {
            min_password_length: Some(12),
            ..Default::default()
        };
        assert_eq!(config.signup_policy().min_password_length, 12);
        assert_eq!(
            AppConfig::default().signup_policy().min_password_length,
            8
        );
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            admin_code: Some("654321".to_string()),
            min_password_length: Some(10),
            account_latency_ms: Some(0),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.admin_code, Some("654321".to_string()));
        assert_eq!(parsed.min_password_length, Some(10));
        assert_eq!(parsed.account_latency(), Duration::ZERO);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.admin_code.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"account_latency_ms": 5, "theme": "dark"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.account_latency_ms, Some(5));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = AppConfig::config_path();
    }
}

//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables with a `__`
//! separator for nested fields:
//!
//! - `LISTEN_ADDR`: bind address (default `127.0.0.1:3000`)
//! - `OPENAI__API_KEY`: provider credential; absence disables the provider
//!   path without failing startup
//! - `OPENAI__MODEL`: model identifier (default `gpt-3.5-turbo`)

use serde::Deserialize;

/// Server configuration loaded from the environment.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// OpenAI provider configuration.
    #[serde(default)]
    pub openai: OpenAiConfig,
}

/// OpenAI provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// API key. When unset, the server runs with fallback responses only.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier to request.
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            openai: OpenAiConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if present configuration values fail to parse.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_has_sensible_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.openai.model, "gpt-3.5-turbo");
        assert!(config.openai.api_key.is_none());
    }
}

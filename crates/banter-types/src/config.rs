//! Configuration types for Banter.
//!
//! `AppConfig` represents the top-level `config.toml` that controls which
//! generation endpoint and model the chat session talks to.

use serde::{Deserialize, Serialize};

/// Top-level configuration for Banter.
///
/// Loaded from `~/.banter/config.toml`. All fields have sensible defaults,
/// so a missing or empty file yields a working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Generation backend settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
        }
    }
}

/// Settings for the hosted text-generation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base URL of the inference endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier appended to the endpoint path.
    #[serde(default = "default_model")]
    pub model: String,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_model() -> String {
    "microsoft/DialoGPT-medium".to_string()
}

fn default_request_timeout_secs() -> u64 {
    300
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(
            config.generator.base_url,
            "https://api-inference.huggingface.co"
        );
        assert_eq!(config.generator.model, "microsoft/DialoGPT-medium");
        assert_eq!(config.generator.request_timeout_secs, 300);
    }

    #[test]
    fn test_app_config_deserialize_empty() {
        let toml_str = "";
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.model, "microsoft/DialoGPT-medium");
    }

    #[test]
    fn test_app_config_deserialize_partial() {
        let toml_str = r#"
[generator]
model = "microsoft/DialoGPT-small"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.model, "microsoft/DialoGPT-small");
        // Unspecified fields keep their defaults.
        assert_eq!(
            config.generator.base_url,
            "https://api-inference.huggingface.co"
        );
        assert_eq!(config.generator.request_timeout_secs, 300);
    }

    #[test]
    fn test_app_config_deserialize_full() {
        let toml_str = r#"
[generator]
base_url = "http://localhost:8080"
model = "local/test-model"
request_timeout_secs = 10
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.base_url, "http://localhost:8080");
        assert_eq!(config.generator.model, "local/test-model");
        assert_eq!(config.generator.request_timeout_secs, 10);
    }

    #[test]
    fn test_app_config_serde_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.generator.model, config.generator.model);
        assert_eq!(parsed.generator.base_url, config.generator.base_url);
    }
}

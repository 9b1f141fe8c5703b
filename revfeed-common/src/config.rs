//! Configuration loading for the Gemini text-generation provider
//!
//! Provider settings resolve from the environment once at startup and are
//! handed to the enrichment service as an explicit value. There is no
//! module-level provider state anywhere in the workspace.

use crate::{Error, Result};

/// Environment variable holding the provider API key
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the provider base URL (tests, proxies)
pub const GEMINI_BASE_URL_VAR: &str = "REVFEED_GEMINI_BASE_URL";

/// Environment variable overriding the model name
pub const GEMINI_MODEL_VAR: &str = "REVFEED_GEMINI_MODEL";

/// Default base URL for the Gemini REST API
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for all enrichment operations
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Gemini provider configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, passed as a query parameter on every request
    pub api_key: String,
    /// Base URL up to (not including) `/models/...`
    pub base_url: String,
    /// Model name, e.g. "gemini-pro"
    pub model: String,
}

impl GeminiConfig {
    /// Load provider configuration from the environment.
    ///
    /// A missing or blank API key is a startup-fatal condition: the service
    /// cannot enrich reviews without provider access.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(GEMINI_API_KEY_VAR).map_err(|_| {
            Error::Config(format!("{} environment variable not set", GEMINI_API_KEY_VAR))
        })?;

        if api_key.trim().is_empty() {
            return Err(Error::Config(format!(
                "{} environment variable is empty",
                GEMINI_API_KEY_VAR
            )));
        }

        let base_url = std::env::var(GEMINI_BASE_URL_VAR)
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());
        let model =
            std::env::var(GEMINI_MODEL_VAR).unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(GEMINI_API_KEY_VAR);
        std::env::remove_var(GEMINI_BASE_URL_VAR);
        std::env::remove_var(GEMINI_MODEL_VAR);
    }

    #[test]
    #[serial]
    fn test_missing_api_key_is_fatal() {
        clear_env();
        let result = GeminiConfig::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    #[serial]
    fn test_blank_api_key_is_fatal() {
        clear_env();
        std::env::set_var(GEMINI_API_KEY_VAR, "   ");
        let result = GeminiConfig::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_defaults_applied_when_only_key_present() {
        clear_env();
        std::env::set_var(GEMINI_API_KEY_VAR, "test-key");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides_take_priority() {
        clear_env();
        std::env::set_var(GEMINI_API_KEY_VAR, "test-key");
        std::env::set_var(GEMINI_BASE_URL_VAR, "http://127.0.0.1:9999/v1beta");
        std::env::set_var(GEMINI_MODEL_VAR, "gemini-flash");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9999/v1beta");
        assert_eq!(config.model, "gemini-flash");
        clear_env();
    }
}

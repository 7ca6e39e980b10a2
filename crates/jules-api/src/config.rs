use serde::Deserialize;

use crate::{auth, Result};

/// Client configuration. `api_key` is the only required field.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    pub api_key: String,
    /// Default per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: api_key.into(),
            request_timeout: default_request_timeout(),
        }
    }

    /// Build a configuration with the key resolved from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(auth::resolve_api_key_from_env(None)?))
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout = seconds;
        self
    }
}

fn default_api_base_url() -> String {
    "https://jules.googleapis.com/v1alpha".to_string()
}

fn default_request_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let config = Config::new("key");
        assert_eq!(config.api_base_url, "https://jules.googleapis.com/v1alpha");
        assert_eq!(config.request_timeout, 60);
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"api_key":"key"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://jules.googleapis.com/v1alpha");
        assert_eq!(config.request_timeout, 60);
    }

    #[test]
    fn builders_override_defaults() {
        let config = Config::new("key")
            .with_api_base_url("http://localhost:8080")
            .with_request_timeout(5);
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, 5);
    }
}

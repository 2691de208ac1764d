//! Client configuration management.

use serde::Deserialize;
use std::time::Duration;

/// Configuration for the Finpanel API client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Backend configuration.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Retry configuration for assistant calls.
    #[serde(default)]
    pub retry: RetryConfig,
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout for regular resource calls, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Timeout for assistant calls, in seconds. Generation is slow.
    #[serde(default = "default_assistant_timeout")]
    pub assistant_timeout_secs: u64,
    /// Timeout for assistant status probes, in seconds.
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,
}

/// Retry configuration for transient failures.
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// Total attempt budget, including the first call.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the first retry; doubled on each subsequent one.
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_assistant_timeout() -> u64 {
    60
}

fn default_status_timeout() -> u64 {
    5
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            assistant_timeout_secs: default_assistant_timeout(),
            status_timeout_secs: default_status_timeout(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

impl BackendConfig {
    /// Timeout for regular resource calls.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Timeout for assistant calls.
    #[must_use]
    pub const fn assistant_timeout(&self) -> Duration {
        Duration::from_secs(self.assistant_timeout_secs)
    }

    /// Timeout for assistant status probes.
    #[must_use]
    pub const fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }
}

impl RetryConfig {
    /// Delay before the first retry.
    #[must_use]
    pub const fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }
}

impl ClientConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINPANEL").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_knobs() {
        let config = ClientConfig::default();
        assert_eq!(config.backend.base_url, "http://localhost:8080");
        assert_eq!(config.backend.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.backend.assistant_timeout(), Duration::from_secs(60));
        assert_eq!(config.backend.status_timeout(), Duration::from_secs(5));
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.initial_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn deserializes_partial_toml() {
        let config: ClientConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[backend]\nbase_url = \"https://api.example.com\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.retry.max_attempts, 3);
    }
}

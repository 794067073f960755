use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub video_search: VideoSearchConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Video search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideoSearchConfig {
    /// Upstream API credential. Empty or an obvious placeholder forces
    /// demo mode (curated catalog only, no network calls).
    #[serde(default)]
    pub api_key: String,
    /// Provider base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Results requested per upstream call (1-50).
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Backoff behavior for rate-limited calls.
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for VideoSearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            max_results: default_max_results(),
            timeout_secs: default_timeout(),
            retry: RetryConfig::default(),
        }
    }
}

/// Placeholder credentials that ship in tutorials and example configs.
/// Any of these counts as "not configured".
const PLACEHOLDER_KEYS: &[&str] = &[
    "your_api_key",
    "your-api-key",
    "your_api_key_here",
    "api_key_here",
    "changeme",
    "change-me",
    "demo",
    "xxx",
];

impl VideoSearchConfig {
    /// Whether a usable credential is present.
    pub fn credential_configured(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && !PLACEHOLDER_KEYS.contains(&key.to_lowercase().as_str())
    }
}

fn default_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_max_results() -> u32 {
    20
}

fn default_timeout() -> u32 {
    10
}

/// Retry configuration for rate-limited upstream calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Total attempts per logical search (initial try + retries).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the first retry in seconds; doubles each retry.
    #[serde(default = "default_base_delay")]
    pub base_delay_secs: u64,
    /// Ceiling for the computed delay in seconds.
    #[serde(default = "default_max_delay")]
    pub max_delay_secs: u64,
}

fn default_max_attempts() -> u32 {
    4
}

fn default_base_delay() -> u64 {
    1
}

fn default_max_delay() -> u64 {
    30
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_secs: default_base_delay(),
            max_delay_secs: default_max_delay(),
        }
    }
}

/// Sanitized config for API responses (credential redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub video_search: SanitizedVideoSearchConfig,
}

/// Sanitized video search config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedVideoSearchConfig {
    pub api_key_configured: bool,
    pub base_url: String,
    pub max_results: u32,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            video_search: SanitizedVideoSearchConfig {
                api_key_configured: config.video_search.credential_configured(),
                base_url: config.video_search.base_url.clone(),
                max_results: config.video_search.max_results,
                timeout_secs: config.video_search.timeout_secs,
            },
        }
    }
}

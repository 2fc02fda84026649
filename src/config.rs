use std::{path::PathBuf, time::Duration};

use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::models::retry::RetryConfig;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    /// Takes precedence over hostname-based resolution when set.
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default = "default_api_hostname")]
    pub api_hostname: String,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    #[serde(default = "default_cache_stale_seconds")]
    pub cache_stale_seconds: u64,

    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    #[serde(default)]
    pub prefers_dark_theme: bool,

    #[serde(default = "default_max_retry_attempts")]
    pub max_retry_attempts: u32,
    #[serde(default = "default_initial_retry_delay_ms")]
    pub initial_retry_delay_ms: u64,
    #[serde(default = "default_max_retry_delay_ms")]
    pub max_retry_delay_ms: u64,
    #[serde(default = "default_retry_backoff_multiplier")]
    pub retry_backoff_multiplier: u64,

    #[serde(default)]
    pub admin_username: Option<String>,
    #[serde(default)]
    pub admin_password: Option<String>,

    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_api_hostname() -> String {
    "localhost".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    15
}

fn default_cache_stale_seconds() -> u64 {
    5 * 60
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".bellory-admin")
}

fn default_max_retry_attempts() -> u32 {
    3
}

fn default_initial_retry_delay_ms() -> u64 {
    1000
}

fn default_max_retry_delay_ms() -> u64 {
    30_000
}

fn default_retry_backoff_multiplier() -> u64 {
    2
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))?;
        Ok(config)
    }

    /// Explicit override first, then the hostname the admin is served from.
    pub fn api_base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_string(),
            _ => resolve_base_url(&self.api_hostname).to_string(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn cache_stale_time(&self) -> Duration {
        Duration::from_secs(self.cache_stale_seconds)
    }

    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_retry_attempts,
            initial_delay_ms: self.initial_retry_delay_ms,
            max_delay_ms: self.max_retry_delay_ms,
            backoff_multiplier: self.retry_backoff_multiplier,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            api_hostname: default_api_hostname(),
            request_timeout_seconds: default_request_timeout_seconds(),
            cache_stale_seconds: default_cache_stale_seconds(),
            storage_dir: default_storage_dir(),
            prefers_dark_theme: false,
            max_retry_attempts: default_max_retry_attempts(),
            initial_retry_delay_ms: default_initial_retry_delay_ms(),
            max_retry_delay_ms: default_max_retry_delay_ms(),
            retry_backoff_multiplier: default_retry_backoff_multiplier(),
            admin_username: None,
            admin_password: None,
            log_format: LogFormat::default(),
        }
    }
}

pub fn resolve_base_url(hostname: &str) -> &'static str {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        return "http://localhost:8081/api";
    }
    if hostname.contains("dev") {
        return "https://api-dev.bellory.com.br/api";
    }
    "https://api.bellory.com.br/api"
}

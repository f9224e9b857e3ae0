// src/config/models.rs
use crate::error::ConfigError;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_PUSHOVER_API_URL: &str = "https://api.pushover.net/1/messages.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(rename = "Servers", alias = "servers", default)]
    pub servers: Vec<Target>,

    /// Value sent in the `User-Agent` header of every check.
    #[serde(rename = "ua")]
    pub user_agent: String,

    #[serde(rename = "pushover")]
    pub credential: PushoverCredential,

    #[serde(default = "default_insecure_skip_verify")]
    pub insecure_skip_verify: bool,

    #[serde(default)]
    pub status_policy: StatusPolicy,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    #[serde(rename = "URL", alias = "url")]
    pub url: String,

    #[serde(rename = "Label", alias = "label")]
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushoverCredential {
    #[serde(rename = "app_token")]
    pub token: String,

    pub recipient_token: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,
}

/// Which response statuses count as "up".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// The status line must read exactly `200 OK`.
    #[default]
    Strict,
    /// Any 2xx status.
    Success,
}

fn default_insecure_skip_verify() -> bool {
    true
}

fn default_api_url() -> String {
    DEFAULT_PUSHOVER_API_URL.to_string()
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credential.token.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "pushover.app_token cannot be empty".to_string(),
            ));
        }

        if self.credential.recipient_token.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "pushover.recipient_token cannot be empty".to_string(),
            ));
        }

        if self.credential.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "pushover.api_url cannot be empty".to_string(),
            ));
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

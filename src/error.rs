// src/error.rs
use std::path::PathBuf;

pub type Result<T, E = UptimeError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification message is empty")]
    EmptyMessage,

    #[error("Notification message is {0} characters, limit is 1024")]
    MessageTooLong(usize),

    #[error("Notification title is {0} characters, limit is 250")]
    TitleTooLong(usize),

    #[error("Invalid recipient token")]
    InvalidRecipient,

    #[error("Push request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Push service rejected the message (HTTP {status}): {errors}")]
    Rejected { status: u16, errors: String },
}

#[derive(Debug, thiserror::Error)]
pub enum UptimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to build request for {label}: {reason}")]
    Request { label: String, reason: String },

    #[error("Failed to drain response body from {label}: {source}")]
    BodyDrain {
        label: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to send notification: {0}")]
    Notify(#[from] NotifyError),
}

impl UptimeError {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            UptimeError::Config(_) => 2,
            UptimeError::Client(_) | UptimeError::Request { .. } => 3,
            UptimeError::BodyDrain { .. } => 4,
            UptimeError::Notify(_) => 5,
        }
    }
}

// src/notify/pushover.rs
use crate::config::PushoverCredential;
use crate::error::{NotifyError, UptimeError};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

pub const DEFAULT_TITLE: &str = "uptime checker";

const MAX_MESSAGE_CHARS: usize = 1024;
const MAX_TITLE_CHARS: usize = 250;
const RECIPIENT_TOKEN_LEN: usize = 30;

pub const PRIORITY_NORMAL: i8 = 0;

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub title: String,
    pub priority: i8,
    pub html: bool,
}

impl Notification {
    /// Normal-priority HTML message under the default title.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: DEFAULT_TITLE.to_string(),
            priority: PRIORITY_NORMAL,
            html: true,
        }
    }

    fn validate(&self) -> Result<(), NotifyError> {
        if self.message.is_empty() {
            return Err(NotifyError::EmptyMessage);
        }

        let message_chars = self.message.chars().count();
        if message_chars > MAX_MESSAGE_CHARS {
            return Err(NotifyError::MessageTooLong(message_chars));
        }

        let title_chars = self.title.chars().count();
        if title_chars > MAX_TITLE_CHARS {
            return Err(NotifyError::TitleTooLong(title_chars));
        }

        Ok(())
    }
}

/// Acknowledgement returned by the push service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub request: String,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    status: i32,
    #[serde(default)]
    request: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

pub struct PushoverClient {
    client: Client,
    api_url: String,
    token: String,
    recipient: String,
}

impl PushoverClient {
    pub fn new(credential: &PushoverCredential) -> Result<Self, UptimeError> {
        let client = Client::builder()
            .user_agent(format!("uptime-checker/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(UptimeError::Client)?;

        Ok(Self {
            client,
            api_url: credential.api_url.clone(),
            token: credential.token.clone(),
            recipient: credential.recipient_token.clone(),
        })
    }

    pub async fn send(&self, notification: &Notification) -> Result<Receipt, NotifyError> {
        notification.validate()?;
        validate_recipient(&self.recipient)?;

        let priority = notification.priority.to_string();
        let mut form = vec![
            ("token", self.token.as_str()),
            ("user", self.recipient.as_str()),
            ("message", notification.message.as_str()),
            ("title", notification.title.as_str()),
            ("priority", priority.as_str()),
        ];
        if notification.html {
            form.push(("html", "1"));
        }

        debug!("Posting notification to {}", self.api_url);

        let response = self.client.post(&self.api_url).form(&form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<MessageResponse>(&body) {
            Ok(parsed) if parsed.status == 1 => {
                let receipt = Receipt {
                    request: parsed.request.unwrap_or_default(),
                };
                info!("Notification delivered (request {})", receipt.request);
                Ok(receipt)
            }
            Ok(parsed) if !parsed.errors.is_empty() => Err(NotifyError::Rejected {
                status: status.as_u16(),
                errors: parsed.errors.join(", "),
            }),
            _ => Err(NotifyError::Rejected {
                status: status.as_u16(),
                errors: body,
            }),
        }
    }
}

fn validate_recipient(recipient: &str) -> Result<(), NotifyError> {
    if recipient.len() == RECIPIENT_TOKEN_LEN
        && recipient.chars().all(|c| c.is_ascii_alphanumeric())
    {
        Ok(())
    } else {
        Err(NotifyError::InvalidRecipient)
    }
}

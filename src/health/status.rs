// src/health/status.rs
use crate::config::StatusPolicy;
use hyper::ext::ReasonPhrase;
use reqwest::{Response, StatusCode};

pub const HEALTHY_STATUS_LINE: &str = "200 OK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Healthy,
    /// The request never produced a response.
    Unreachable(String),
    /// A response arrived with a status line the policy does not accept.
    WrongStatus(String),
}

impl CheckOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, CheckOutcome::Healthy)
    }
}

/// Renders a status with its standard reason, e.g. `"404 Not Found"`.
pub fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_str(), reason),
        None => status.as_str().to_string(),
    }
}

/// The status line as the server sent it.
///
/// hyper only records the reason phrase when it differs from the standard one,
/// so a missing phrase means the standard reason was on the wire.
pub fn response_status_line(response: &Response) -> String {
    let status = response.status();
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => format!(
            "{} {}",
            status.as_str(),
            String::from_utf8_lossy(reason.as_bytes())
        ),
        None => status_line(status),
    }
}

impl StatusPolicy {
    pub fn accepts(&self, status: StatusCode, line: &str) -> bool {
        match self {
            StatusPolicy::Strict => line == HEALTHY_STATUS_LINE,
            StatusPolicy::Success => status.is_success(),
        }
    }
}

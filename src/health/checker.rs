// src/health/checker.rs
use super::report::FailureList;
use super::status::{response_status_line, CheckOutcome};
use crate::config::{Config, StatusPolicy, Target};
use crate::error::{Result, UptimeError};
use reqwest::header::USER_AGENT;
use reqwest::{Client, Response};
use tracing::{debug, info, warn};
use url::Url;

pub struct HealthChecker {
    client: Client,
    user_agent: String,
    policy: StatusPolicy,
}

impl HealthChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .danger_accept_invalid_certs(config.insecure_skip_verify);

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(UptimeError::Client)?;

        if config.insecure_skip_verify {
            debug!("TLS certificate validation disabled for checks");
        }

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            policy: config.status_policy,
        })
    }

    /// Checks every target in order, one at a time.
    pub async fn check_all(&self, targets: &[Target]) -> Result<FailureList> {
        let mut failures = FailureList::new();
        let mut healthy = 0;

        for target in targets {
            let outcome = self.check_target(target).await?;

            match &outcome {
                CheckOutcome::Healthy => debug!("{} is up", target.label),
                CheckOutcome::Unreachable(reason) => {
                    warn!("{} is unreachable: {}", target.label, reason)
                }
                CheckOutcome::WrongStatus(line) => {
                    warn!("{} responded {}", target.label, line)
                }
            }

            if outcome.is_healthy() {
                healthy += 1;
            }
            failures.record(&target.label, &outcome);
        }

        info!(
            "Health check complete: {} healthy, {} unhealthy",
            healthy,
            targets.len() - healthy
        );

        Ok(failures)
    }

    pub async fn check_target(&self, target: &Target) -> Result<CheckOutcome> {
        let url = match Url::parse(&target.url) {
            Ok(url) => url,
            // No scheme or host to dial (empty or relative URL).
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                return Ok(CheckOutcome::Unreachable(format!(
                    "unsupported URL {:?}",
                    target.url
                )));
            }
            Err(e) => {
                return Err(UptimeError::Request {
                    label: target.label.clone(),
                    reason: format!("invalid URL {:?}: {}", target.url, e),
                });
            }
        };

        let request = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .build()
            .map_err(|e| UptimeError::Request {
                label: target.label.clone(),
                reason: e.to_string(),
            })?;

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => return Ok(CheckOutcome::Unreachable(e.to_string())),
        };

        let line = response_status_line(&response);
        let outcome = if self.policy.accepts(response.status(), &line) {
            CheckOutcome::Healthy
        } else {
            CheckOutcome::WrongStatus(line)
        };

        drain(response)
            .await
            .map_err(|source| UptimeError::BodyDrain {
                label: target.label.clone(),
                source,
            })?;

        Ok(outcome)
    }
}

/// Reads the body to the end and discards it.
async fn drain(mut response: Response) -> std::result::Result<(), reqwest::Error> {
    while response.chunk().await?.is_some() {}
    Ok(())
}

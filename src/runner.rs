// src/runner.rs
use crate::config::Config;
use crate::error::Result;
use crate::health::{FailureList, HealthChecker};
use crate::notify::{Notification, PushoverClient, Receipt};
use tracing::info;

#[derive(Debug)]
pub struct RunReport {
    pub checked: usize,
    pub failures: FailureList,
    pub receipt: Option<Receipt>,
}

impl RunReport {
    pub fn notified(&self) -> bool {
        self.receipt.is_some()
    }
}

/// Checks all configured targets, then sends one notification if any failed.
pub async fn run(config: &Config) -> Result<RunReport> {
    let checker = HealthChecker::new(config)?;
    let failures = checker.check_all(&config.servers).await?;

    let receipt = if failures.is_empty() {
        info!("All {} targets are up", config.servers.len());
        None
    } else {
        let pushover = PushoverClient::new(&config.credential)?;
        let notification = Notification::new(failures.joined());
        Some(pushover.send(&notification).await?)
    };

    Ok(RunReport {
        checked: config.servers.len(),
        failures,
        receipt,
    })
}

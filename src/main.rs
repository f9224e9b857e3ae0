// src/main.rs
use anyhow::Result;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uptime_checker::{cli::Cli, config, run, UptimeError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse_from_env();

    // Initialize tracing
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("uptime_checker=info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Loading configuration from: {}", cli.config.display());

    let outcome = match config::load_config(&cli.config).await {
        Ok(config) => run(&config).await,
        Err(e) => Err(UptimeError::from(e)),
    };

    match outcome {
        Ok(report) => {
            info!(
                "Run complete: {} targets checked, {} failure entries, notified: {}",
                report.checked,
                report.failures.len(),
                report.notified()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{}", e);
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}


// src/health/mod.rs
mod checker;
mod report;
mod status;

pub use checker::HealthChecker;
pub use report::{FailureList, FAILURE_SEPARATOR, INVALID_STATUS_ENTRY};
pub use status::{response_status_line, status_line, CheckOutcome, HEALTHY_STATUS_LINE};

// src/health/report.rs
use super::status::CheckOutcome;

pub const FAILURE_SEPARATOR: &str = "<br>";
pub const INVALID_STATUS_ENTRY: &str = "Invalid Status Code";

/// Failure messages collected over one run, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureList {
    entries: Vec<String>,
}

impl FailureList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: &str, outcome: &CheckOutcome) {
        match outcome {
            CheckOutcome::Healthy => {}
            CheckOutcome::Unreachable(_) => {
                self.entries.push(down_entry(label));
            }
            CheckOutcome::WrongStatus(_) => {
                self.entries.push(down_entry(label));
                self.entries.push(INVALID_STATUS_ENTRY.to_string());
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn joined(&self) -> String {
        self.entries.join(FAILURE_SEPARATOR)
    }
}

fn down_entry(label: &str) -> String {
    format!("{} is seems down.", label)
}

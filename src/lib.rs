// src/lib.rs
pub mod cli;
pub mod config;
pub mod error;
pub mod health;
pub mod notify;
pub mod runner;

pub use error::{ConfigError, NotifyError, Result, UptimeError};
pub use runner::{run, RunReport};

// src/notify/mod.rs
mod pushover;

pub use pushover::{Notification, PushoverClient, Receipt, DEFAULT_TITLE, PRIORITY_NORMAL};

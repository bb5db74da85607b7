use crate::core::system_info::types::{ProbeResult, UNKNOWN};
use log::debug;
use std::env;

/// Environment variable naming the active desktop session
pub const SESSION_VAR: &str = "XDG_CURRENT_DESKTOP";

pub fn collect() -> String {
    from_value(env::var(SESSION_VAR).ok())
}

/// Desktop field text for a raw session value
pub fn from_value(value: Option<String>) -> String {
    let desktop = ProbeResult::from(value);
    if !desktop.is_found() {
        debug!("{} is unset or blank", SESSION_VAR);
    }
    desktop.unwrap_or(UNKNOWN)
}

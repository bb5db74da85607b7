//! Host identity facts read straight from the OS (no subprocess).

use crate::core::system_info::types::UNKNOWN;
use std::env;
use sysinfo::System;

/// Variables consulted for the login name, in order
const USER_VARS: [&str; 3] = ["USER", "LOGNAME", "USERNAME"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFacts {
    pub hostname: String,
    pub user: String,
    pub kernel: String,
}

pub fn collect() -> HostFacts {
    HostFacts {
        hostname: System::host_name().unwrap_or_else(|| UNKNOWN.to_string()),
        user: user_from(|name| env::var(name).ok()),
        kernel: System::kernel_version().unwrap_or_else(|| UNKNOWN.to_string()),
    }
}

/// Login name from the first non-empty user variable
pub fn user_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    USER_VARS
        .iter()
        .filter_map(|name| lookup(*name))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

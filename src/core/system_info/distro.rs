//! OS name resolution from os-release files.

use crate::core::system_info::parser;
use crate::core::system_info::types::ProbeResult;
use crate::platform::Platform;
use log::debug;
use std::path::Path;

/// Checked in order; the second is the freedesktop vendor location
pub const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

const PRETTY_NAME: &str = "PRETTY_NAME";

/// OS field text: distro pretty name where applicable, else the family name
pub fn os_name(platform: Platform) -> String {
    if !platform.uses_release_file() {
        return platform.family_name().to_string();
    }

    let name = OS_RELEASE_PATHS
        .iter()
        .fold(ProbeResult::Unavailable, |found, path| {
            found.or_else(|| pretty_name_from_file(Path::new(path)))
        });
    if !name.is_found() {
        debug!("no distro name found, using {}", platform.family_name());
    }
    name.unwrap_or(platform.family_name())
}

/// `PRETTY_NAME` of an os-release file; unavailable if unreadable
pub fn pretty_name_from_file(path: &Path) -> ProbeResult {
    let name = ProbeResult::from(parser::key_value_from_file(path, PRETTY_NAME));
    if !name.is_found() {
        debug!("{} is unreadable or has no {}", path.display(), PRETTY_NAME);
    }
    name
}

/// `PRETTY_NAME` of os-release text
pub fn pretty_name(text: &str) -> Option<String> {
    parser::key_value(text, PRETTY_NAME)
}

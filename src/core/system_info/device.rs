use crate::core::system_info::runner::CommandRunner;
use crate::core::system_info::types::{ProbeResult, UNKNOWN};
use crate::platform::Platform;
use log::debug;
use std::fs;

/// Readable without root, unlike `dmidecode`
const DMI_PRODUCT_NAME: &str = "/sys/class/dmi/id/product_name";

/// Device model / product name for the detected OS family
pub fn collect(runner: &CommandRunner, platform: Platform) -> String {
    from_command(runner, platform)
        .or_else(|| from_sysfs(platform))
        .unwrap_or(UNKNOWN)
}

fn from_command(runner: &CommandRunner, platform: Platform) -> ProbeResult {
    platform
        .device_model_command()
        .and_then(|command| {
            let output = runner.run(command.program, command.args)?;
            let model = first_value_line(&output);
            if model.is_none() {
                debug!("{} printed no device model", command.program);
            }
            model
        })
        .into()
}

fn from_sysfs(platform: Platform) -> ProbeResult {
    if platform != Platform::Linux {
        return ProbeResult::Unavailable;
    }
    fs::read_to_string(DMI_PRODUCT_NAME)
        .map_err(|e| debug!("cannot read {}: {}", DMI_PRODUCT_NAME, e))
        .ok()
        .and_then(|content| first_value_line(&content))
        .into()
}

/// First non-blank line that isn't a `#` comment (dmidecode prints those
/// when no SMBIOS table is present)
pub fn first_value_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_line() {
        assert_eq!(
            first_value_line("20HRCTO1WW\n").as_deref(),
            Some("20HRCTO1WW")
        );
        assert_eq!(
            first_value_line("\r\nMacBookPro18,3\r\n").as_deref(),
            Some("MacBookPro18,3")
        );
    }

    #[test]
    fn test_comment_only_output_is_absent() {
        assert_eq!(first_value_line("# No SMBIOS nor DMI entry point found, sorry.\n"), None);
        assert_eq!(first_value_line(""), None);
    }

    #[test]
    fn test_unknown_platform_is_unknown() {
        assert_eq!(
            collect(&CommandRunner::default(), Platform::Other("none")),
            "Unknown"
        );
    }
}

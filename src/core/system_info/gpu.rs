//! Graphics probe.
//!
//! Asks the GPU library first (see `platform::gpu`), then the platform's
//! adapter listing command.

use crate::core::system_info::parser;
use crate::core::system_info::runner::CommandRunner;
use crate::core::system_info::types::{ProbeResult, NO_GRAPHICS};
use crate::platform::{CommandSpec, Platform};
use log::debug;

/// A GPU enumeration capability that may or may not be present
pub trait GpuEnumerator: Send + Sync {
    /// Short backend name, for diagnostics
    fn backend(&self) -> &'static str;

    /// Names of every device the backend can see; empty when none
    fn device_names(&self) -> Vec<String>;
}

/// Stand-in used when no GPU library could be loaded
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGpuLibrary;

impl GpuEnumerator for NoGpuLibrary {
    fn backend(&self) -> &'static str {
        "none"
    }

    fn device_names(&self) -> Vec<String> {
        Vec::new()
    }
}

pub fn collect(library: &dyn GpuEnumerator, runner: &CommandRunner, platform: Platform) -> String {
    from_library(library)
        .or_else(|| from_listing(runner, platform))
        .unwrap_or(NO_GRAPHICS)
}

fn from_library(library: &dyn GpuEnumerator) -> ProbeResult {
    let names = library.device_names();
    if names.is_empty() {
        debug!("GPU backend '{}' reported no devices", library.backend());
    }
    join_names(names)
}

fn from_listing(runner: &CommandRunner, platform: Platform) -> ProbeResult {
    let Some((command, parse)) = listing(platform) else {
        debug!("no display adapter listing on {}", platform.family_name());
        return ProbeResult::Unavailable;
    };
    let Some(output) = runner.run(command.program, command.args) else {
        return ProbeResult::Unavailable;
    };

    let names = parse(&output);
    if names.is_empty() {
        debug!("{} listed no display adapters", command.program);
    }
    join_names(names)
}

/// Listing command and the parser for its output
fn listing(platform: Platform) -> Option<(CommandSpec, fn(&str) -> Vec<String>)> {
    let parse: fn(&str) -> Vec<String> = match platform {
        Platform::Linux => parse_lspci,
        Platform::MacOs => parse_chipset_models,
        Platform::Windows => parse_name_list,
        Platform::Other(_) => return None,
    };
    platform.graphics_command().map(|command| (command, parse))
}

/// Device names from `lspci` VGA / 3D controller lines
///
/// `01:00.0 VGA compatible controller: NVIDIA Corporation GA104 [GeForce RTX 3070] (rev a1)`
/// yields `NVIDIA Corporation GA104 [GeForce RTX 3070]`. The slot may carry a
/// PCI domain (`0000:01:00.0`).
pub fn parse_lspci(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split_once(": "))
        .filter(|(slot_and_class, _)| {
            slot_and_class.contains("VGA") || slot_and_class.contains("3D")
        })
        .map(|(_, name)| match name.rfind(" (rev") {
            Some(idx) => &name[..idx],
            None => name,
        })
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// `Chipset Model:` values from `system_profiler SPDisplaysDataType`
pub fn parse_chipset_models(output: &str) -> Vec<String> {
    parser::colon_values(output, "Chipset Model")
}

/// One device name per non-blank line (PowerShell `-ExpandProperty` output)
pub fn parse_name_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_names(names: Vec<String>) -> ProbeResult {
    if names.is_empty() {
        ProbeResult::Unavailable
    } else {
        ProbeResult::found(names.join(", "))
    }
}

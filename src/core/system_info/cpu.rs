use crate::core::system_info::parser;
use crate::core::system_info::runner::CommandRunner;
use crate::core::system_info::types::{CpuReading, ProbeResult, UNKNOWN};
use crate::platform::Platform;
use log::debug;

/// CPU model name: platform listing command, then the runtime's identifier
pub fn collect(runner: &CommandRunner, platform: Platform, reading: &CpuReading) -> String {
    from_command(runner, platform)
        .or_else(|| from_runtime(reading))
        .unwrap_or(UNKNOWN)
}

/// CPU field text, e.g. `Intel(R) Core(TM) i7 (8 cores, 2400.0 MHz)`
pub fn describe(model: &str, reading: &CpuReading) -> String {
    match reading.frequency_mhz {
        Some(mhz) if mhz > 0 => format!(
            "{} ({} cores, {:.1} MHz)",
            model, reading.logical_cores, mhz as f64
        ),
        _ => model.to_string(),
    }
}

fn from_command(runner: &CommandRunner, platform: Platform) -> ProbeResult {
    let Some(command) = platform.cpu_model_command() else {
        return ProbeResult::Unavailable;
    };
    let Some(output) = runner.run(command.program, command.args) else {
        return ProbeResult::Unavailable;
    };

    match platform {
        Platform::Linux => {
            let model = ProbeResult::from(parser::colon_value(&output, "Model name"));
            if !model.is_found() {
                debug!("{} output has no 'Model name' line", command.program);
            }
            model
        }
        _ => ProbeResult::found(output),
    }
}

fn from_runtime(reading: &CpuReading) -> ProbeResult {
    ProbeResult::from(reading.brand.clone())
        .or_else(|| ProbeResult::found(std::env::consts::ARCH))
}

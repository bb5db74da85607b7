//! Platform-specific code.
//!
//! [`Platform`] selects which OS utilities the probes consult; `gpu` holds
//! the optional GPU library adapters.

pub mod gpu;

pub use gpu::select_gpu_enumerator;

/// External utility invocation: program plus fixed argument list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl CommandSpec {
    const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

const POWERSHELL_DEVICE_MODEL: CommandSpec = CommandSpec::new(
    "powershell",
    &[
        "-NoProfile",
        "-Command",
        "Get-CimInstance -ClassName Win32_ComputerSystem | Select-Object -ExpandProperty Model",
    ],
);

const POWERSHELL_GRAPHICS: CommandSpec = CommandSpec::new(
    "powershell",
    &[
        "-NoProfile",
        "-Command",
        "Get-CimInstance -ClassName Win32_VideoController | Select-Object -ExpandProperty Name",
    ],
);

/// OS family the process is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    /// Any other target, carrying its `std::env::consts::OS` name
    Other(&'static str),
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &'static str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            other => Platform::Other(other),
        }
    }

    /// Generic OS family name shown when no distro name applies
    pub fn family_name(self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::MacOs => "Darwin",
            Platform::Windows => "Windows",
            Platform::Other(os) => os,
        }
    }

    /// Whether the OS name comes from the os-release file
    pub fn uses_release_file(self) -> bool {
        matches!(self, Platform::Linux)
    }

    /// Command listing the CPU model, if the platform has one
    pub fn cpu_model_command(self) -> Option<CommandSpec> {
        match self {
            Platform::Linux => Some(CommandSpec::new("lscpu", &[])),
            Platform::MacOs => Some(CommandSpec::new(
                "sysctl",
                &["-n", "machdep.cpu.brand_string"],
            )),
            Platform::Windows | Platform::Other(_) => None,
        }
    }

    /// Command enumerating display adapters
    pub fn graphics_command(self) -> Option<CommandSpec> {
        match self {
            Platform::Linux => Some(CommandSpec::new("lspci", &[])),
            Platform::MacOs => Some(CommandSpec::new(
                "system_profiler",
                &["SPDisplaysDataType"],
            )),
            Platform::Windows => Some(POWERSHELL_GRAPHICS),
            Platform::Other(_) => None,
        }
    }

    /// Command reporting the hardware product name
    pub fn device_model_command(self) -> Option<CommandSpec> {
        match self {
            Platform::Linux => Some(CommandSpec::new(
                "dmidecode",
                &["-s", "system-product-name"],
            )),
            Platform::MacOs => Some(CommandSpec::new("sysctl", &["-n", "hw.model"])),
            Platform::Windows => Some(POWERSHELL_DEVICE_MODEL),
            Platform::Other(_) => None,
        }
    }

    /// Shells searched for after the configured preference list
    pub fn extra_shells(self) -> &'static [&'static str] {
        match self {
            Platform::Windows => &["pwsh", "powershell"],
            _ => &["fish", "sh"],
        }
    }
}

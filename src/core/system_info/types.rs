use serde::ser::{Serialize, SerializeMap, Serializer};

/// Placeholder for a value that could not be determined
pub const UNKNOWN: &str = "Unknown";
/// Placeholder for a value that doesn't apply to this machine
pub const NOT_AVAILABLE: &str = "N/A";
/// Graphics field when neither the GPU library nor a listing command answered
pub const NO_GRAPHICS: &str = "No graphics info available";

/// Every labeled field of a snapshot, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Host,
    User,
    Os,
    KernelVersion,
    Uptime,
    DesktopEnvironment,
    DeviceModel,
    Cpu,
    Memory,
    MemoryUsed,
    MemoryUsage,
    SwapUsed,
    SwapTotal,
    SwapUsage,
    Disk,
    Graphics,
    Battery,
    Shell,
}

impl Field {
    pub const COUNT: usize = 18;

    pub const ALL: [Field; Field::COUNT] = [
        Field::Host,
        Field::User,
        Field::Os,
        Field::KernelVersion,
        Field::Uptime,
        Field::DesktopEnvironment,
        Field::DeviceModel,
        Field::Cpu,
        Field::Memory,
        Field::MemoryUsed,
        Field::MemoryUsage,
        Field::SwapUsed,
        Field::SwapTotal,
        Field::SwapUsage,
        Field::Disk,
        Field::Graphics,
        Field::Battery,
        Field::Shell,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Host => "Host",
            Field::User => "User",
            Field::Os => "OS",
            Field::KernelVersion => "Kernel Version",
            Field::Uptime => "Uptime",
            Field::DesktopEnvironment => "Desktop Environment",
            Field::DeviceModel => "Device Model",
            Field::Cpu => "CPU",
            Field::Memory => "Memory",
            Field::MemoryUsed => "Memory Used",
            Field::MemoryUsage => "Memory Usage",
            Field::SwapUsed => "Swap Used",
            Field::SwapTotal => "Swap Total",
            Field::SwapUsage => "Swap Usage",
            Field::Disk => "Disk",
            Field::Graphics => "Graphics",
            Field::Battery => "Battery",
            Field::Shell => "Shell",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One point-in-time observation of the machine.
///
/// Always holds a value for every [`Field`], in [`Field::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSnapshot {
    values: [String; Field::COUNT],
}

impl SystemSnapshot {
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Fields and values in display order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.iter().map(move |&field| (field, self.get(field)))
    }

    pub fn len(&self) -> usize {
        Field::COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for SystemSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.label(), value)?;
        }
        map.end()
    }
}

/// Fills a [`SystemSnapshot`] field by field; anything left unset is [`UNKNOWN`]
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    values: [Option<String>; Field::COUNT],
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values[field.index()] = Some(value.into());
        self
    }

    pub fn build(mut self) -> SystemSnapshot {
        SystemSnapshot {
            values: std::array::from_fn(|i| {
                self.values[i].take().unwrap_or_else(|| UNKNOWN.to_string())
            }),
        }
    }
}

/// Outcome of one probe source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Found(String),
    Unavailable,
}

impl ProbeResult {
    /// `Found` for non-blank text, `Unavailable` otherwise
    pub fn found(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            ProbeResult::Unavailable
        } else if trimmed.len() == value.len() {
            ProbeResult::Found(value)
        } else {
            ProbeResult::Found(trimmed.to_string())
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ProbeResult::Found(_))
    }

    /// Try the next source only if this one came up empty
    pub fn or_else<F>(self, next: F) -> Self
    where
        F: FnOnce() -> ProbeResult,
    {
        match self {
            ProbeResult::Found(_) => self,
            ProbeResult::Unavailable => next(),
        }
    }

    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            ProbeResult::Found(value) => ProbeResult::found(f(value)),
            ProbeResult::Unavailable => ProbeResult::Unavailable,
        }
    }

    pub fn unwrap_or(self, sentinel: &str) -> String {
        match self {
            ProbeResult::Found(value) => value,
            ProbeResult::Unavailable => sentinel.to_string(),
        }
    }
}

impl From<Option<String>> for ProbeResult {
    fn from(value: Option<String>) -> Self {
        value.map_or(ProbeResult::Unavailable, ProbeResult::found)
    }
}

/// Total/used pair with a usage percentage (memory, swap or disk)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UsageReading {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub percent: f32,
}

impl UsageReading {
    pub fn new(total_bytes: u64, used_bytes: u64) -> Self {
        let percent = if total_bytes > 0 {
            (used_bytes as f64 / total_bytes as f64 * 100.0) as f32
        } else {
            0.0
        };
        Self {
            total_bytes,
            used_bytes,
            percent,
        }
    }
}

/// Core count and current clock as reported by the metrics collaborator
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CpuReading {
    pub logical_cores: usize,
    /// `None` when the platform doesn't expose a current frequency
    pub frequency_mhz: Option<u64>,
    /// Processor brand string, if the runtime knows one
    pub brand: Option<String>,
}

/// Charge level of the first battery found
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    /// 0-100
    pub percent: f32,
}

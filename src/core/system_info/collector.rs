use crate::core::config::Config;
use crate::core::system_info::battery::{self, BatterySensor, SystemBatterySensor};
use crate::core::system_info::gpu::{self, GpuEnumerator, NoGpuLibrary};
use crate::core::system_info::metrics::{MetricsSource, SysinfoMetrics};
use crate::core::system_info::runner::CommandRunner;
use crate::core::system_info::types::{Field, SnapshotBuilder, SystemSnapshot, UNKNOWN};
use crate::core::system_info::units::{format_disk, format_gb, format_percent};
use crate::core::system_info::{cpu, desktop, device, distro, host, shell, uptime};
use crate::error::Result;
use crate::platform::{self, Platform};
use log::warn;
use std::thread;

/// Collect a snapshot of this machine using the given configuration
pub fn collect_system_info(config: &Config) -> Result<SystemSnapshot> {
    Ok(Collector::from_config(config)?.collect())
}

/// Runs every probe once and merges them with host and metrics facts
pub struct Collector {
    platform: Platform,
    runner: CommandRunner,
    gpu: Box<dyn GpuEnumerator>,
    metrics: Box<dyn MetricsSource>,
    battery: Box<dyn BatterySensor>,
    shells: Vec<String>,
}

impl Collector {
    /// Wire up the real collaborators. Fails only if baseline metrics are
    /// unreadable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let metrics = SysinfoMetrics::new()?;
        Ok(Self::new(Box::new(metrics))
            .with_runner(CommandRunner::new(config.command_timeout()))
            .with_gpu(platform::select_gpu_enumerator())
            .with_shells(config.shells.clone()))
    }

    /// Collector for the current platform with no GPU library and the
    /// system battery sensor
    pub fn new(metrics: Box<dyn MetricsSource>) -> Self {
        Self {
            platform: Platform::current(),
            runner: CommandRunner::default(),
            gpu: Box::new(NoGpuLibrary),
            metrics,
            battery: Box::new(SystemBatterySensor),
            shells: Config::default().shells,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_runner(mut self, runner: CommandRunner) -> Self {
        self.runner = runner;
        self
    }

    pub fn with_gpu(mut self, gpu: Box<dyn GpuEnumerator>) -> Self {
        self.gpu = gpu;
        self
    }

    pub fn with_battery(mut self, battery: Box<dyn BatterySensor>) -> Self {
        self.battery = battery;
        self
    }

    pub fn with_shells(mut self, shells: Vec<String>) -> Self {
        self.shells = shells;
        self
    }

    pub fn collect(&self) -> SystemSnapshot {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        self.collect_at(now)
    }

    /// Snapshot with uptime measured against `now` (Unix seconds)
    pub fn collect_at(&self, now: u64) -> SystemSnapshot {
        let cpu_reading = self.metrics.cpu();

        // The subprocess-backed probes are independent; run them side by side
        // so the slowest one bounds the wait.
        let (cpu_model, graphics, device_model) = {
            let runner = &self.runner;
            let platform = self.platform;
            let gpu_library = self.gpu.as_ref();
            let cpu_reading = &cpu_reading;

            thread::scope(|s| {
                let cpu_model = s.spawn(move || cpu::collect(runner, platform, cpu_reading));
                let graphics = s.spawn(move || gpu::collect(gpu_library, runner, platform));
                let device_model = s.spawn(move || device::collect(runner, platform));
                (
                    joined(cpu_model.join(), Field::Cpu),
                    joined(graphics.join(), Field::Graphics),
                    joined(device_model.join(), Field::DeviceModel),
                )
            })
        };

        let host = host::collect();
        let memory = self.metrics.memory();
        let swap = self.metrics.swap();
        let disk = self.metrics.root_disk();
        let uptime_secs = uptime::elapsed(self.metrics.boot_time(), now);

        SnapshotBuilder::new()
            .set(Field::Host, host.hostname)
            .set(Field::User, host.user)
            .set(Field::Os, distro::os_name(self.platform))
            .set(Field::KernelVersion, host.kernel)
            .set(Field::Uptime, uptime::format_uptime(uptime_secs))
            .set(Field::DesktopEnvironment, desktop::collect())
            .set(Field::DeviceModel, device_model)
            .set(Field::Cpu, cpu::describe(&cpu_model, &cpu_reading))
            .set(Field::Memory, format_gb(memory.total_bytes))
            .set(Field::MemoryUsed, format_gb(memory.used_bytes))
            .set(Field::MemoryUsage, format_percent(memory.percent))
            .set(Field::SwapUsed, format_gb(swap.used_bytes))
            .set(Field::SwapTotal, format_gb(swap.total_bytes))
            .set(Field::SwapUsage, format_percent(swap.percent))
            .set(
                Field::Disk,
                disk.map_or_else(|| UNKNOWN.to_string(), |d| format_disk(&d)),
            )
            .set(Field::Graphics, graphics)
            .set(Field::Battery, battery::describe(self.battery.read()))
            .set(Field::Shell, shell::collect(&self.shells, self.platform))
            .build()
    }
}

/// A panicking probe degrades like any other failed source
fn joined(result: thread::Result<String>, field: Field) -> String {
    result.unwrap_or_else(|_| {
        warn!("{} probe panicked", field);
        UNKNOWN.to_string()
    })
}

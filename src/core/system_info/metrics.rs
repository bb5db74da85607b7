//! Resource usage facts (memory, swap, disk, CPU clock, boot time).

use crate::core::system_info::types::{CpuReading, UsageReading};
use crate::error::{Result, XolError};
use std::path::PathBuf;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};

/// System-metrics collaborator consulted by the collector
pub trait MetricsSource {
    fn cpu(&self) -> CpuReading;
    fn memory(&self) -> UsageReading;
    fn swap(&self) -> UsageReading;
    /// Usage of the filesystem holding the OS; `None` if it isn't listed
    fn root_disk(&self) -> Option<UsageReading>;
    /// Boot time as seconds since the Unix epoch
    fn boot_time(&self) -> u64;
}

/// [`MetricsSource`] backed by `sysinfo`
pub struct SysinfoMetrics {
    sys: System,
    disks: Disks,
    boot_time: u64,
}

impl SysinfoMetrics {
    /// Take one reading of every metric.
    ///
    /// Fails only when the baseline facts are missing altogether, in which
    /// case no meaningful snapshot can be built.
    pub fn new() -> Result<Self> {
        let refresh = RefreshKind::nothing()
            .with_memory(MemoryRefreshKind::everything())
            .with_cpu(CpuRefreshKind::nothing().with_frequency());
        let sys = System::new_with_specifics(refresh);

        if sys.total_memory() == 0 {
            return Err(XolError::metrics("total memory reported as zero"));
        }

        let boot_time = System::boot_time();
        if boot_time == 0 {
            return Err(XolError::metrics("boot time unavailable"));
        }

        Ok(Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            boot_time,
        })
    }
}

impl MetricsSource for SysinfoMetrics {
    fn cpu(&self) -> CpuReading {
        let cpus = self.sys.cpus();
        let first = cpus.first();
        CpuReading {
            logical_cores: cpus.len(),
            frequency_mhz: first.map(|cpu| cpu.frequency()).filter(|mhz| *mhz > 0),
            brand: first
                .map(|cpu| cpu.brand().trim().to_string())
                .filter(|brand| !brand.is_empty()),
        }
    }

    fn memory(&self) -> UsageReading {
        UsageReading::new(self.sys.total_memory(), self.sys.used_memory())
    }

    fn swap(&self) -> UsageReading {
        UsageReading::new(self.sys.total_swap(), self.sys.used_swap())
    }

    fn root_disk(&self) -> Option<UsageReading> {
        let root = root_mount_point();
        self.disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == root.as_path())
            .map(|disk| {
                let total = disk.total_space();
                let used = total.saturating_sub(disk.available_space());
                UsageReading::new(total, used)
            })
    }

    fn boot_time(&self) -> u64 {
        self.boot_time
    }
}

/// Mount point of the OS filesystem: `/`, or the system drive on Windows
fn root_mount_point() -> PathBuf {
    #[cfg(windows)]
    {
        let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
        PathBuf::from(format!("{}\\", drive))
    }

    #[cfg(not(windows))]
    {
        PathBuf::from("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sysinfo_metrics_are_consistent() {
        let metrics = SysinfoMetrics::new().expect("metrics available on supported platforms");
        let memory = metrics.memory();
        assert!(memory.total_bytes > 0);
        assert!(memory.used_bytes <= memory.total_bytes);
        assert!((0.0..=100.0).contains(&memory.percent));

        let swap = metrics.swap();
        assert!(swap.used_bytes <= swap.total_bytes);

        assert!(metrics.boot_time() > 0);
        assert!(metrics.cpu().logical_cores >= 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_root_mount_point_unix() {
        assert_eq!(root_mount_point(), PathBuf::from("/"));
    }
}

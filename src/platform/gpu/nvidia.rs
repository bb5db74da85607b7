#[cfg(feature = "nvml")]
use log::debug;
#[cfg(feature = "nvml")]
use nvml_wrapper::Nvml;
#[cfg(feature = "nvml")]
use once_cell::sync::Lazy;

use crate::core::system_info::gpu::GpuEnumerator;
use crate::error::{Result, XolError};

/// Singleton - NVML must be initialized ONCE only
#[cfg(feature = "nvml")]
static NVML: Lazy<Option<Nvml>> = Lazy::new(|| Nvml::init().ok());

/// Lists NVIDIA devices through NVML
#[derive(Debug)]
pub struct NvmlEnumerator {
    _initialized: (),
}

impl NvmlEnumerator {
    /// Succeeds only if NVML loaded and initialized
    pub fn new() -> Result<Self> {
        #[cfg(feature = "nvml")]
        {
            NVML.as_ref()
                .map(|_| Self { _initialized: () })
                .ok_or_else(|| {
                    XolError::other(
                        "NVML not available (NVIDIA driver not installed or incompatible)",
                    )
                })
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(XolError::other("NVIDIA GPU support not enabled"))
        }
    }
}

impl GpuEnumerator for NvmlEnumerator {
    fn backend(&self) -> &'static str {
        "nvml"
    }

    fn device_names(&self) -> Vec<String> {
        #[cfg(feature = "nvml")]
        {
            let Some(nvml) = NVML.as_ref() else {
                return Vec::new();
            };

            let count = match nvml.device_count() {
                Ok(count) => count,
                Err(e) => {
                    debug!("NVML device count failed: {}", e);
                    return Vec::new();
                }
            };

            (0..count)
                .filter_map(|index| {
                    nvml.device_by_index(index)
                        .and_then(|device| device.name())
                        .map_err(|e| debug!("NVML device {} unreadable: {}", index, e))
                        .ok()
                })
                .collect()
        }
        #[cfg(not(feature = "nvml"))]
        {
            Vec::new()
        }
    }
}

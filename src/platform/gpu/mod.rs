//! GPU enumeration libraries.
//!
//! Only NVIDIA (via NVML) is supported. When the library or driver is
//! missing, callers get [`NoGpuLibrary`], which never reports a device.

mod nvidia;

pub use nvidia::NvmlEnumerator;

use crate::core::system_info::gpu::{GpuEnumerator, NoGpuLibrary};
use log::debug;

/// Pick the GPU enumeration backend once, at startup
pub fn select_gpu_enumerator() -> Box<dyn GpuEnumerator> {
    match NvmlEnumerator::new() {
        Ok(enumerator) => Box::new(enumerator),
        Err(e) => {
            debug!("GPU library unavailable: {}", e);
            Box::new(NoGpuLibrary)
        }
    }
}

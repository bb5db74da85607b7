use crate::core::system_info::types::UsageReading;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Bytes as binary gigabytes with two decimals, e.g. `8.00 GB`
pub fn format_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / GIB)
}

/// One-decimal percentage, e.g. `50.0%`
pub fn format_percent(percent: f32) -> String {
    format!("{:.1}%", percent)
}

/// Disk field text, e.g. `42.5% used of 465.63 GB`
pub fn format_disk(disk: &UsageReading) -> String {
    format!(
        "{} used of {}",
        format_percent(disk.percent),
        format_gb(disk.total_bytes)
    )
}

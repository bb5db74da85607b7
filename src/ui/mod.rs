// UI and formatting module

pub mod system_formatters;

// Re-export commonly used items for cleaner imports
pub use system_formatters::{format_snapshot, render_snapshot};

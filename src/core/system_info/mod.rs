pub mod battery;
pub mod collector;
pub mod cpu;
pub mod desktop;
pub mod device;
pub mod distro;
pub mod gpu;
pub mod host;
pub mod metrics;
pub mod parser;
pub mod runner;
pub mod shell;
pub mod types;
pub mod units;
pub mod uptime;

pub use collector::{collect_system_info, Collector};
pub use types::*;

use crate::core::system_info::types::{BatteryReading, NOT_AVAILABLE};
use battery::units::ratio::percent;
use log::debug;

/// Source of battery charge readings
pub trait BatterySensor: Send + Sync {
    /// `None` when the machine has no battery or it can't be read
    fn read(&self) -> Option<BatteryReading>;
}

/// Reads the first battery the OS power API reports
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBatterySensor;

impl BatterySensor for SystemBatterySensor {
    fn read(&self) -> Option<BatteryReading> {
        let manager = battery::Manager::new()
            .map_err(|e| debug!("battery manager unavailable: {}", e))
            .ok()?;
        let mut batteries = manager
            .batteries()
            .map_err(|e| debug!("battery enumeration failed: {}", e))
            .ok()?;
        let battery = batteries
            .next()?
            .map_err(|e| debug!("battery unreadable: {}", e))
            .ok()?;

        Some(BatteryReading {
            percent: battery.state_of_charge().get::<percent>(),
        })
    }
}

/// Battery field text: `87%`, or `N/A` without a battery
pub fn describe(reading: Option<BatteryReading>) -> String {
    match reading {
        Some(reading) => format!("{:.0}%", reading.percent.clamp(0.0, 100.0)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Seconds between `boot_time` and `now`, never negative
pub fn elapsed(boot_time: u64, now: u64) -> u64 {
    now.saturating_sub(boot_time)
}

/// `H:MM:SS`, prefixed with `N day, ` / `N days, ` past 24 hours
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, secs);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

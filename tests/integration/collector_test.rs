use xoltab::core::system_info::battery::BatterySensor;
use xoltab::core::system_info::metrics::MetricsSource;
use xoltab::core::system_info::types::{BatteryReading, CpuReading, UsageReading};
use xoltab::core::system_info::Collector;
use xoltab::platform::Platform;
use xoltab::{collect_system_info, Config, Field, SystemSnapshot};

/// Fields whose value legitimately changes between two runs
const TIME_VARYING: [Field; 8] = [
    Field::Uptime,
    Field::Cpu,
    Field::MemoryUsed,
    Field::MemoryUsage,
    Field::SwapUsed,
    Field::SwapUsage,
    Field::Disk,
    Field::Battery,
];

struct StaticMetrics;

impl MetricsSource for StaticMetrics {
    fn cpu(&self) -> CpuReading {
        CpuReading {
            logical_cores: 16,
            frequency_mhz: Some(2400),
            brand: Some("Fake Processor".to_string()),
        }
    }

    fn memory(&self) -> UsageReading {
        UsageReading::new(8_589_934_592, 4_294_967_296)
    }

    fn swap(&self) -> UsageReading {
        UsageReading::new(2_147_483_648, 536_870_912)
    }

    fn root_disk(&self) -> Option<UsageReading> {
        Some(UsageReading::new(107_374_182_400, 53_687_091_200))
    }

    fn boot_time(&self) -> u64 {
        1_700_000_000
    }
}

struct AbsentBattery;

impl BatterySensor for AbsentBattery {
    fn read(&self) -> Option<BatteryReading> {
        None
    }
}

fn fake_collector() -> Collector {
    Collector::new(Box::new(StaticMetrics))
        .with_platform(Platform::Other("testos"))
        .with_battery(Box::new(AbsentBattery))
}

fn assert_fixed_shape(snapshot: &SystemSnapshot) {
    let labels: Vec<&str> = snapshot.iter().map(|(field, _)| field.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Host",
            "User",
            "OS",
            "Kernel Version",
            "Uptime",
            "Desktop Environment",
            "Device Model",
            "CPU",
            "Memory",
            "Memory Used",
            "Memory Usage",
            "Swap Used",
            "Swap Total",
            "Swap Usage",
            "Disk",
            "Graphics",
            "Battery",
            "Shell",
        ]
    );
    for (field, value) in snapshot.iter() {
        assert!(!value.trim().is_empty(), "{} is blank", field);
    }
}

fn looks_like_uptime(value: &str) -> bool {
    let clock = value.rsplit(", ").next().unwrap_or(value);
    let parts: Vec<&str> = clock.split(':').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
        && parts[1].len() == 2
        && parts[2].len() == 2
}

#[test]
fn test_live_snapshot_has_fixed_shape() {
    let snapshot = collect_system_info(&Config::default()).expect("baseline metrics");
    assert_fixed_shape(&snapshot);
    assert!(looks_like_uptime(snapshot.get(Field::Uptime)));
    assert!(snapshot.get(Field::MemoryUsage).ends_with('%'));
    assert!(snapshot.get(Field::Memory).ends_with(" GB"));
}

#[test]
fn test_consecutive_snapshots_agree_on_static_fields() {
    let first = collect_system_info(&Config::default()).expect("baseline metrics");
    let second = collect_system_info(&Config::default()).expect("baseline metrics");

    for field in Field::ALL {
        if TIME_VARYING.contains(&field) {
            continue;
        }
        assert_eq!(first.get(field), second.get(field), "{} changed", field);
    }
}

#[test]
fn test_fake_metrics_formatting() {
    let snapshot = fake_collector().collect_at(1_700_000_000 + 3661);
    assert_fixed_shape(&snapshot);

    assert_eq!(snapshot.get(Field::Memory), "8.00 GB");
    assert_eq!(snapshot.get(Field::MemoryUsed), "4.00 GB");
    assert_eq!(snapshot.get(Field::MemoryUsage), "50.0%");
    assert_eq!(snapshot.get(Field::SwapTotal), "2.00 GB");
    assert_eq!(snapshot.get(Field::SwapUsed), "0.50 GB");
    assert_eq!(snapshot.get(Field::SwapUsage), "25.0%");
    assert_eq!(snapshot.get(Field::Disk), "50.0% used of 100.00 GB");
    assert_eq!(snapshot.get(Field::Uptime), "1:01:01");
    assert_eq!(snapshot.get(Field::Battery), "N/A");
    assert_eq!(snapshot.get(Field::Os), "testos");
    assert_eq!(
        snapshot.get(Field::Cpu),
        "Fake Processor (16 cores, 2400.0 MHz)"
    );
}

#[test]
fn test_fake_snapshot_is_repeatable() {
    let collector = fake_collector();
    let now = 1_700_000_000 + 90_061;
    let first = collector.collect_at(now);
    let second = collector.collect_at(now);
    assert_eq!(first, second);
    assert_eq!(first.get(Field::Uptime), "1 day, 1:01:01");
}

#[test]
fn test_json_output_is_ordered_object() {
    let snapshot = fake_collector().collect_at(1_700_000_000);
    let json = serde_json::to_string(&snapshot).unwrap();
    let host_at = json.find("\"Host\"").unwrap();
    let shell_at = json.find("\"Shell\"").unwrap();
    assert!(host_at < shell_at);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_object().unwrap().len(), Field::COUNT);
    assert_eq!(value["Memory Usage"], "50.0%");
    assert_eq!(value["Uptime"], "0:00:00");
}

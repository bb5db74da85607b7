use crate::core::system_info::types::SystemSnapshot;
use colored::*;

pub const TITLE: &str = "XOLtab - System Information";

/// Print the snapshot as `Label: value` lines under a title
pub fn format_snapshot(snapshot: &SystemSnapshot, color: bool) {
    println!("\n{}", render_snapshot(snapshot, color));
}

/// Snapshot as display text; labels are bold cyan when `color` is set
pub fn render_snapshot(snapshot: &SystemSnapshot, color: bool) -> String {
    let mut lines = Vec::with_capacity(snapshot.len() + 2);

    lines.push(if color {
        TITLE.bold().to_string()
    } else {
        TITLE.to_string()
    });
    lines.push("-".repeat(TITLE.len()));

    for (field, value) in snapshot.iter() {
        let label = format!("{}:", field.label());
        let label = if color {
            label.bold().cyan().to_string()
        } else {
            label
        };
        lines.push(format!("{} {}", label, value));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::system_info::types::{Field, SnapshotBuilder};

    #[test]
    fn test_plain_rendering() {
        let snapshot = SnapshotBuilder::new()
            .set(Field::Host, "devbox")
            .set(Field::Battery, "N/A")
            .build();
        let text = render_snapshot(&snapshot, false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "XOLtab - System Information");
        assert_eq!(lines[1], "---------------------------");
        assert_eq!(lines[2], "Host: devbox");
        assert_eq!(lines[3], "User: Unknown");
        assert_eq!(lines[18], "Battery: N/A");
        assert_eq!(lines.len(), 2 + Field::COUNT);
    }

    #[test]
    fn test_plain_rendering_has_no_escape_codes() {
        let snapshot = SnapshotBuilder::new().build();
        assert!(!render_snapshot(&snapshot, false).contains('\u{1b}'));
    }
}

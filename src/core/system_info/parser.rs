//! Line-oriented extraction of single labeled values from command output
//! and `key=value` files.

use std::fs;
use std::path::Path;

const QUOTES: &[char] = &['"', '\''];

/// First line of `text` satisfying `predicate`
pub fn find_line<'a, P>(text: &'a str, predicate: P) -> Option<&'a str>
where
    P: Fn(&str) -> bool,
{
    text.lines().find(|line| predicate(*line))
}

/// Value of the first `Label: value` line whose text contains `label`
///
/// Used for `lscpu`, `system_profiler` and similar listings.
pub fn colon_value(text: &str, label: &str) -> Option<String> {
    let line = find_line(text, |line| line.contains(label))?;
    let (_, value) = line.split_once(':')?;
    clean(value)
}

/// Values of every `Label: value` line containing `label`, in order
pub fn colon_values(text: &str, label: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.contains(label))
        .filter_map(|line| line.split_once(':'))
        .filter_map(|(_, value)| clean(value))
        .collect()
}

/// Value of the first `KEY=value` line, with surrounding quotes removed
///
/// Used for os-release style files.
pub fn key_value(text: &str, key: &str) -> Option<String> {
    text.lines().find_map(|line| {
        line.trim_start()
            .strip_prefix(key)
            .and_then(|rest| rest.strip_prefix('='))
            .and_then(clean)
    })
}

/// [`key_value`] over the contents of `path`; `None` if it can't be read
pub fn key_value_from_file(path: &Path, key: &str) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    key_value(&content, key)
}

fn clean(value: &str) -> Option<String> {
    let value = value.trim().trim_matches(QUOTES).trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

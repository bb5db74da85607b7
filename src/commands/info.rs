use crate::core::system_info::collector;
use crate::core::Config;
use crate::ui::system_formatters;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::warn;

/// Collect the snapshot and hand it to the presenter
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = effective_config(matches);

    if !config.color {
        colored::control::set_override(false);
    }

    // An interrupted run prints nothing rather than a partial snapshot
    ctrlc::set_handler(|| std::process::exit(130))
        .context("Failed to set Ctrl+C handler")?;

    let snapshot = collector::collect_system_info(&config)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        system_formatters::format_snapshot(&snapshot, config.color);
    }

    Ok(())
}

/// Saved settings with this run's flag overrides applied
pub fn effective_config(matches: &ArgMatches) -> Config {
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Using default settings: {}", e);
        Config::default()
    });

    if let Some(&ms) = matches.get_one::<u64>("timeout") {
        config.command_timeout_ms = ms;
    }
    if matches.get_flag("no-color") {
        config.color = false;
    }

    config
}

use crate::core::Config;
use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("path", _)) => {
            println!("{}", Config::get_config_path()?.display());
            Ok(())
        }
        Some(("reset", _)) => {
            Config::default().save()?;
            println!("{}", "Settings restored to defaults".green());
            Ok(())
        }
        Some(("set", sub_matches)) => set(sub_matches),
        _ => {
            println!("Use 'xoltab config --help' for more information.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn set(matches: &ArgMatches) -> Result<()> {
    let key = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("{} {} = {}", "Updated".green(), key.cyan().bold(), value);
    Ok(())
}

// Command handlers module
pub mod completions;
pub mod config;
pub mod info;
pub mod version;

use clap::{Arg, ArgAction, Command};

/// The full command-line interface
pub fn build_cli() -> Command {
    Command::new("xoltab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Snapshot of this machine: hardware, OS, resource usage and environment")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the snapshot as a JSON object")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable label styling")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("MS")
                .help("Per-command timeout in milliseconds (overrides config)")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log every probe decision to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
        .subcommand(
            Command::new("config")
                .about("Show or change settings (use 'xoltab config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Print the current settings"))
                .subcommand(Command::new("path").about("Print the config file location"))
                .subcommand(Command::new("reset").about("Restore default settings"))
                .subcommand(
                    Command::new("set")
                        .about("Change one setting (timeout, color, shells)")
                        .arg(
                            Arg::new("key")
                                .help("Setting name")
                                .required(true)
                                .value_parser(crate::core::config::KEYS),
                        )
                        .arg(Arg::new("value").help("New value").required(true)),
                ),
        )
}

use anyhow::Result;

use xoltab::commands;

fn main() -> Result<()> {
    let mut cli = commands::build_cli();
    let matches = cli.clone().get_matches();

    xoltab::init_logging(matches.get_flag("verbose"));

    if matches.get_flag("version") {
        return commands::version::execute();
    }

    match matches.subcommand() {
        Some(("completions", sub_matches)) => commands::completions::execute(sub_matches, &mut cli),
        Some(("version", _)) => commands::version::execute(),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        _ => commands::info::execute(&matches),
    }
}

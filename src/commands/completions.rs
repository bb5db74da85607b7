use anyhow::{bail, Result};
use clap::{ArgMatches, Command};
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions for the specified shell
pub fn execute(matches: &ArgMatches, cli: &mut Command) -> Result<()> {
    let Some(shell_str) = matches.get_one::<String>("shell") else {
        bail!("shell argument is required (bash, zsh, fish, powershell, elvish)");
    };

    let shell = parse_shell(shell_str)?;
    generate(shell, cli, "xoltab", &mut io::stdout());
    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    Ok(match name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        other => bail!(
            "Unsupported shell: {} (supported: bash, zsh, fish, powershell, elvish)",
            other
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell() {
        assert!(matches!(parse_shell("bash"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("PowerShell"), Ok(Shell::PowerShell)));
        assert!(parse_shell("tcsh").is_err());
    }

    #[test]
    fn test_generates_bash_script() {
        let mut cli = crate::commands::build_cli();
        let mut out = Vec::new();
        generate(Shell::Bash, &mut cli, "xoltab", &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("xoltab"));
        assert!(script.contains("--json"));
    }
}

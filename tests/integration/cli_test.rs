use xoltab::commands::{build_cli, info};

#[test]
fn test_no_arguments_is_valid() {
    let matches = build_cli().try_get_matches_from(["xoltab"]).unwrap();
    assert!(matches.subcommand().is_none());
    assert!(!matches.get_flag("json"));
}

#[test]
fn test_flags_override_config() {
    let matches = build_cli()
        .try_get_matches_from(["xoltab", "--json", "--no-color", "--timeout", "250"])
        .unwrap();
    assert!(matches.get_flag("json"));

    let config = info::effective_config(&matches);
    assert_eq!(config.command_timeout_ms, 250);
    assert!(!config.color);
}

#[test]
fn test_zero_timeout_rejected() {
    assert!(build_cli()
        .try_get_matches_from(["xoltab", "--timeout", "0"])
        .is_err());
}

#[test]
fn test_completions_requires_known_shell() {
    assert!(build_cli()
        .try_get_matches_from(["xoltab", "completions"])
        .is_err());
    assert!(build_cli()
        .try_get_matches_from(["xoltab", "completions", "tcsh"])
        .is_err());
    assert!(build_cli()
        .try_get_matches_from(["xoltab", "completions", "zsh"])
        .is_ok());
}

#[test]
fn test_config_set_validates_key() {
    assert!(build_cli()
        .try_get_matches_from(["xoltab", "config", "set", "theme", "dark"])
        .is_err());

    let matches = build_cli()
        .try_get_matches_from(["xoltab", "config", "set", "timeout", "800"])
        .unwrap();
    let (name, config) = matches.subcommand().unwrap();
    assert_eq!(name, "config");
    let (name, set) = config.subcommand().unwrap();
    assert_eq!(name, "set");
    assert_eq!(set.get_one::<String>("value").unwrap(), "800");
}

#[test]
fn test_cli_definition_is_consistent() {
    build_cli().debug_assert();
}

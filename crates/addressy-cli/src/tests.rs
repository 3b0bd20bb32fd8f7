use super::*;

#[test]
fn parses_find_command_with_filters() {
    let cli = Cli::try_parse_from([
        "addressy-cli",
        "--key",
        "test-key",
        "find",
        "SW1A 2AA",
        "--countries",
        "GB",
        "--limit",
        "10",
    ])
    .expect("expected valid cli args");

    assert!(!cli.legacy);
    match cli.command {
        Commands::Find {
            text,
            countries,
            limit,
            ..
        } => {
            assert_eq!(text, "SW1A 2AA");
            assert_eq!(countries.as_deref(), Some("GB"));
            assert_eq!(limit, Some(10));
        }
        Commands::Retrieve { .. } => panic!("expected find command"),
    }
}

#[test]
fn parses_retrieve_command() {
    let cli = Cli::try_parse_from([
        "addressy-cli",
        "--key",
        "test-key",
        "retrieve",
        "GB|RM|A|52509479",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Retrieve { ref id } if id == "GB|RM|A|52509479"
    ));
}

#[test]
fn legacy_flag_is_accepted() {
    let cli = Cli::try_parse_from([
        "addressy-cli",
        "--key",
        "test-key",
        "--legacy",
        "find",
        "EC1A 1BB",
    ])
    .expect("expected valid cli args");

    assert!(cli.legacy);
}

#[test]
fn missing_subcommand_is_an_error() {
    let result = Cli::try_parse_from(["addressy-cli", "--key", "test-key"]);
    assert!(result.is_err());
}

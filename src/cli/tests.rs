//! Unit tests for CLI argument parsing

use super::*;

#[test]
fn defaults_match_the_site_scrape_policy() {
    let cli = Cli::try_parse_from(["cfb-careers", "roster.csv"]).unwrap();
    let config = cli.scrape_config();
    assert_eq!(config.table_id, DEFAULT_TABLE_ID);
    assert_eq!(config.max_attempts, 3);
    assert_eq!(config.player_pause, Duration::from_secs(1));
    assert!(!cli.json);
    assert!(!cli.insecure_input);
}

#[test]
fn flags_override_config() {
    let cli = Cli::try_parse_from([
        "cfb-careers",
        "roster.csv",
        "--table-id",
        "passing_standard",
        "--max-attempts",
        "5",
        "--delay",
        "2",
        "-o",
        "out.csv",
    ])
    .unwrap();
    let config = cli.scrape_config();
    assert_eq!(config.table_id, "passing_standard");
    assert_eq!(config.max_attempts, 5);
    assert_eq!(config.player_pause, Duration::from_secs(2));
    assert_eq!(cli.output, PathBuf::from("out.csv"));
}

#[test]
fn input_is_required() {
    assert!(Cli::try_parse_from(["cfb-careers"]).is_err());
}

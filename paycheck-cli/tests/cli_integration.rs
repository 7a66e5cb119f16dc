//! Integration tests that drive the commands the way `main` does, with an
//! on-disk config and table fixture.

use std::path::{Path, PathBuf};

use clap::Parser;
use paycheck_cli::cli::Cli;
use paycheck_cli::commands;
use paycheck_cli::config::PaycheckConfig;
use pretty_assertions::assert_eq;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let config = PaycheckConfig::discover(cli.config.as_deref())?;
    commands::run(&cli, &config)
}

fn run_with_fixture(args: &[&str]) -> anyhow::Result<String> {
    let config = fixture_path("paycheck.toml");
    let config = config.to_str().expect("fixture path should be UTF-8");
    let mut full = vec!["paycheck", "--config", config];
    full.extend_from_slice(args);
    run(&full)
}

#[test]
fn test_fixture_config_loads_and_resolves_tables() {
    let config = PaycheckConfig::load_from_file(&fixture_path("paycheck.toml")).unwrap();

    assert_eq!(config.state.as_deref(), Some("IL"));
    assert_eq!(config.brackets, Some(fixture_path("il_brackets.csv")));
}

#[test]
fn test_calc_text_for_single_in_texas() {
    let output = run(&["paycheck", "calc", "50000", "--state", "TX", "--year", "2026"]).unwrap();

    assert!(output.starts_with("Tax year 2026 | Single | TX | annual"));
    assert!(output.contains("Federal income tax"));
    assert!(output.contains("3,820.00"));
    assert!(output.contains("42,355.00"));
    assert!(!output.contains("State brackets"));
}

#[test]
fn test_calc_json_for_single_in_california() {
    let output = run(&[
        "paycheck", "calc", "50000", "--state", "CA", "--year", "2026", "--format", "json",
        "--sources",
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["annual"]["state_tax"], "1192.53");
    assert_eq!(value["annual"]["social_security"], "3100.00");
    assert_eq!(value["annual"]["net_pay"], "41162.47");
    assert_eq!(value["state_code"], "CA");
    assert!(value["sources"].as_array().is_some_and(|s| !s.is_empty()));
}

#[test]
fn test_calc_uses_config_defaults_and_overlay() {
    // 260,000 a year in IL under the fixture's two-bracket table
    let output = run_with_fixture(&["--format", "json", "calc", "10000"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["frequency"]["kind"], "biweekly");
    assert_eq!(value["annual"]["gross_pay"], "260000");
    assert_eq!(value["state_taxable_income"], "257150");
    // 100,000 at 4.95% + 157,150 at 6.95%
    assert_eq!(value["annual"]["state_tax"], "15871.93");
    assert_eq!(value["state_brackets"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_calc_flags_beat_config() {
    let output = run_with_fixture(&["calc", "50000", "-f", "annual", "--state", "TX"]).unwrap();

    assert!(output.starts_with("Tax year 2026 | Single | TX | annual"));
}

#[test]
fn test_calc_unknown_state_fails() {
    let err = run(&["paycheck", "calc", "50000", "--state", "ZZ"]).unwrap_err();

    assert!(err.to_string().contains("unknown jurisdiction 'ZZ'"), "got: {err}");
}

#[test]
fn test_calc_negative_gross_fails() {
    let err = run(&["paycheck", "calc", "-5", "--state", "CA"]).unwrap_err();

    assert!(err.to_string().starts_with("invalid input"), "got: {err}");
}

#[test]
fn test_conversions() {
    assert_eq!(run(&["paycheck", "to-salary", "25"]).unwrap(), "52,000.00\n");
    assert_eq!(run(&["paycheck", "to-hourly", "52,000"]).unwrap(), "25.00\n");
    assert_eq!(
        run(&["paycheck", "to-hourly", "78000", "--hours-per-week", "30"]).unwrap(),
        "50.00\n"
    );
    assert!(run(&["paycheck", "to-salary", "0"]).is_err());
}

#[test]
fn test_amounts_too_large_fail_cleanly() {
    let err = run(&["paycheck", "to-salary", "79228162514264337593543950335"]).unwrap_err();
    assert!(err.to_string().starts_with("invalid input"), "got: {err}");

    let err = run(&[
        "paycheck", "calc", "79228162514264337593543950335", "-f", "weekly", "--state", "TX",
    ])
    .unwrap_err();
    assert!(err.to_string().starts_with("invalid input"), "got: {err}");
}

#[test]
fn test_states_lists_builtin_jurisdictions() {
    let output = run(&["paycheck", "states", "--year", "2026"]).unwrap();

    assert_eq!(output.lines().count(), 51);
    assert!(output.lines().any(|line| line.starts_with("CA  California")));
}

#[test]
fn test_states_reflects_overlay() {
    let output = run_with_fixture(&["states"]).unwrap();

    let illinois = output
        .lines()
        .find(|line| line.starts_with("IL"))
        .expect("IL should be listed");
    assert!(illinois.contains("progressive"));
    assert!(illinois.ends_with("6.95%"));
}

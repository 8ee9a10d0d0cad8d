// crates/contact-probe-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for flag parsing and locale resolution.
// Purpose: Ensure the entry point helpers fail closed on invalid input.
// Dependencies: contact-probe-cli main helpers
// ============================================================================

//! ## Overview
//! Validates `resolve_locale` precedence and the clap surface of the
//! `contact-probe` binary.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use clap::Parser;
use contact_probe_cli::i18n::Locale;
use contact_probe_core::CheckName;

use super::Cli;
use super::check_label;
use super::resolve_locale;

// ============================================================================
// SECTION: Locale Resolution
// ============================================================================

#[test]
fn locale_defaults_to_english() {
    let locale = resolve_locale(None, None).expect("default locale");
    assert_eq!(locale, Locale::En);
}

#[test]
fn locale_flag_wins_over_environment() {
    let locale = resolve_locale(Some("ca"), Some("en")).expect("flag locale");
    assert_eq!(locale, Locale::Ca);
}

#[test]
fn locale_environment_applies_without_flag() {
    let locale = resolve_locale(None, Some("ca-ES")).expect("env locale");
    assert_eq!(locale, Locale::Ca);
}

#[test]
fn invalid_locale_flag_is_rejected() {
    let err = resolve_locale(Some("tlh"), None).expect_err("must reject unknown locale");
    assert!(err.to_string().contains("tlh"));
}

// ============================================================================
// SECTION: Flag Parsing
// ============================================================================

#[test]
fn cli_parses_target_flags() {
    let cli = Cli::try_parse_from([
        "contact-probe",
        "--base-url",
        "http://127.0.0.1:9999",
        "--timeout-secs",
        "5",
        "--transcript",
    ])
    .expect("parse flags");
    assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9999"));
    assert_eq!(cli.timeout_secs, Some(5));
    assert!(cli.transcript);
    assert!(!cli.show_version);
}

#[test]
fn cli_rejects_non_numeric_timeout() {
    let result = Cli::try_parse_from(["contact-probe", "--timeout-secs", "soon"]);
    assert!(result.is_err(), "non-numeric timeout must not parse");
}

#[test]
fn cli_defaults_leave_all_targets_unset() {
    let cli = Cli::try_parse_from(["contact-probe"]).expect("parse bare invocation");
    assert!(cli.base_url.is_none());
    assert!(cli.timeout_secs.is_none());
    assert!(cli.config.is_none());
    assert!(!cli.transcript);
}

// ============================================================================
// SECTION: Check Labels
// ============================================================================

#[test]
fn check_labels_are_distinct() {
    let labels: Vec<String> = CheckName::RUN_ORDER.into_iter().map(check_label).collect();
    for (index, label) in labels.iter().enumerate() {
        assert!(!label.is_empty());
        assert!(!labels[..index].contains(label), "duplicate check label {label}");
    }
}

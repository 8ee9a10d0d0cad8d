// crates/contact-probe-cli/src/main.rs
// ============================================================================
// Module: Contact Probe CLI Entry Point
// Description: Command-line front end for the contact-form API harness.
// Purpose: Resolve configuration, run the check suite, and map the exit code.
// Dependencies: clap, contact-probe-core, tokio
// ============================================================================

//! ## Overview
//! The contact-probe CLI resolves the collaborator target from flags,
//! environment variables, and an optional TOML config file, runs the check
//! suite sequentially, and prints localized per-check and summary lines. All
//! user-facing strings are routed through the i18n catalog. The process exits
//! 0 only when every check passed.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Parser;
use contact_probe_cli::i18n::Locale;
use contact_probe_cli::i18n::set_locale;
use contact_probe_cli::t;
use contact_probe_core::CheckName;
use contact_probe_core::CheckOutcome;
use contact_probe_core::ConfigFile;
use contact_probe_core::ConfigSources;
use contact_probe_core::ProbeClient;
use contact_probe_core::ProbeConfig;
use contact_probe_core::SuiteObserver;
use contact_probe_core::SuiteReport;
use contact_probe_core::TranscriptEntry;
use contact_probe_core::config::BASE_URL_ENV;
use contact_probe_core::config::TIMEOUT_ENV;
use contact_probe_core::run_suite;
use thiserror::Error;

// ============================================================================
// SECTION: Environment
// ============================================================================

/// Environment variable selecting the output language.
const LANG_ENV: &str = "CONTACT_PROBE_LANG";

/// Environment variable pointing at a config file.
const CONFIG_ENV: &str = "CONTACT_PROBE_CONFIG";

/// Default config file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "contact-probe.toml";

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Verification harness for a contact-form web service API.
#[derive(Parser, Debug)]
#[command(name = "contact-probe")]
struct Cli {
    /// Base URL of the collaborator service (scheme, host, optional port).
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,
    /// Path to a TOML config file (defaults to contact-probe.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Print the request transcript after the summary.
    #[arg(long, action = ArgAction::SetTrue)]
    transcript: bool,
    /// Output language (en or ca).
    #[arg(long, value_name = "LANG")]
    lang: Option<String>,
    /// Print version information and exit.
    #[arg(long = "version", short = 'V', action = ArgAction::SetTrue)]
    show_version: bool,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the probe run.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang.as_deref(), env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_checked(&t!("main.version", version = version))?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = resolve_config(&cli)?;
    let client = ProbeClient::new(&config)
        .map_err(|err| CliError::new(t!("client.build_failed", error = err)))?;

    write_checked(&t!("run.start", base_url = client.base_url()))?;
    let mut reporter = ConsoleReporter::default();
    let report = run_suite(&client, &mut reporter).await;
    reporter.into_result()?;

    print_summary(&report)?;
    if cli.transcript {
        print_transcript(&client.transcript())?;
    }

    Ok(if report.all_passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

// ============================================================================
// SECTION: Configuration Resolution
// ============================================================================

/// Resolves the output locale from the flag and the environment.
fn resolve_locale(flag: Option<&str>, env: Option<&str>) -> CliResult<Locale> {
    if let Some(value) = flag {
        return Locale::parse(value).ok_or_else(|| CliError::new(t!("lang.invalid", value = value)));
    }
    if let Some(value) = env {
        return Locale::parse(value).ok_or_else(|| CliError::new(t!("lang.invalid", value = value)));
    }
    Ok(Locale::En)
}

/// Resolves the probe configuration from flags, environment, and file.
fn resolve_config(cli: &Cli) -> CliResult<ProbeConfig> {
    let file = match config_path(cli) {
        Some(path) => Some(
            ConfigFile::load(&path)
                .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?,
        ),
        None => None,
    };
    let sources = ConfigSources {
        flag_base_url: cli.base_url.clone(),
        flag_timeout_secs: cli.timeout_secs,
        env_base_url: std::env::var(BASE_URL_ENV).ok(),
        env_timeout_secs: std::env::var(TIMEOUT_ENV).ok(),
        file,
    };
    ProbeConfig::resolve(&sources)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Returns the config file path to load, when any applies.
fn config_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.config {
        return Some(path.clone());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    default.exists().then_some(default)
}

// ============================================================================
// SECTION: Console Reporter
// ============================================================================

/// Observer printing localized per-check lines as the suite runs.
#[derive(Debug, Default)]
struct ConsoleReporter {
    /// First stdout write failure, surfaced after the suite completes.
    io_error: Option<std::io::Error>,
}

impl ConsoleReporter {
    /// Writes one line, remembering the first failure instead of panicking.
    fn write_line(&mut self, message: &str) {
        if self.io_error.is_some() {
            return;
        }
        if let Err(err) = write_stdout_line(message) {
            self.io_error = Some(err);
        }
    }

    /// Surfaces a buffered write failure once the suite has completed.
    fn into_result(self) -> CliResult<()> {
        match self.io_error {
            Some(err) => Err(CliError::new(output_error("stdout", &err))),
            None => Ok(()),
        }
    }
}

impl SuiteObserver for ConsoleReporter {
    fn on_check_start(&mut self, name: CheckName) {
        let line = t!("check.start", label = check_label(name));
        self.write_line(&line);
    }

    fn on_check_complete(&mut self, outcome: &CheckOutcome) {
        let line = if outcome.is_pass() {
            t!("check.pass", name = outcome.name)
        } else {
            let detail = outcome.detail.clone().unwrap_or_default();
            t!("check.fail", name = outcome.name, detail = detail)
        };
        self.write_line(&line);
        for warning in &outcome.warnings {
            let line = t!("check.warning", name = outcome.name, message = warning);
            self.write_line(&line);
        }
    }
}

/// Returns the localized display label for a check.
fn check_label(name: CheckName) -> String {
    match name {
        CheckName::ContactSubmission => t!("check.label.contact_submission"),
        CheckName::ContactValidation => t!("check.label.contact_validation"),
        CheckName::GetContacts => t!("check.label.get_contacts"),
        CheckName::HealthCheck => t!("check.label.health_check"),
    }
}

// ============================================================================
// SECTION: Summary Output
// ============================================================================

/// Prints the per-check summary block and the aggregate tally.
fn print_summary(report: &SuiteReport) -> CliResult<()> {
    write_checked(&t!("summary.header"))?;
    for outcome in report.outcomes() {
        let line = if outcome.is_pass() {
            t!("summary.line.pass", name = outcome.name)
        } else {
            t!("summary.line.fail", name = outcome.name)
        };
        write_checked(&line)?;
    }
    write_checked(&t!("summary.total", passed = report.passed(), total = report.total()))
}

/// Prints the recorded request transcript.
fn print_transcript(entries: &[TranscriptEntry]) -> CliResult<()> {
    write_checked(&t!("transcript.header"))?;
    for entry in entries {
        let line = if let Some(error) = &entry.error {
            t!(
                "transcript.entry.error",
                sequence = entry.sequence,
                method = entry.method,
                path = entry.path,
                error = error
            )
        } else {
            let status = entry.status.map_or_else(|| "-".to_string(), |code| code.to_string());
            t!(
                "transcript.entry",
                sequence = entry.sequence,
                method = entry.method,
                path = entry.path,
                status = status
            )
        };
        write_checked(&line)?;
        if let Some(body) = &entry.body {
            if !body.is_empty() {
                write_checked(&t!("transcript.body", body = body))?;
            }
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stdout, mapping failures into CLI errors.
fn write_checked(message: &str) -> CliResult<()> {
    write_stdout_line(message).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

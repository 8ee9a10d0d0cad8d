// crates/contact-probe-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings for future localization support.
// Dependencies: Standard library formatting utilities.
// ============================================================================

//! ## Overview
//! The contact-probe CLI stores user-facing strings in a small translation
//! catalog to enforce consistent messaging and to prepare for future locales.
//! All runtime output should be routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The locale is selected once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
///
/// # Invariants
/// - Variants are stable for CLI parsing and catalog lookup.
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Catalan.
    Ca,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of
    /// region tags such as `ca-ES`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "ca" => Some(Self::Ca),
            _ => None,
        }
    }
}

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `path`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"name"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "contact-probe {version}"),
    ("run.start", "Probing contact API at {base_url}"),
    ("check.start", "Checking {label}..."),
    ("check.pass", "PASS {name}"),
    ("check.fail", "FAIL {name}: {detail}"),
    ("check.warning", "WARNING {name}: {message}"),
    ("check.label.contact_submission", "contact submission"),
    ("check.label.contact_validation", "contact validation"),
    ("check.label.get_contacts", "contact listing"),
    ("check.label.health_check", "service health"),
    ("summary.header", "Summary:"),
    ("summary.line.pass", "{name}: PASS"),
    ("summary.line.fail", "{name}: FAIL"),
    ("summary.total", "{passed}/{total} checks passed"),
    ("transcript.header", "Transcript:"),
    ("transcript.entry", "#{sequence} {method} {path} -> {status}"),
    ("transcript.entry.error", "#{sequence} {method} {path} -> error: {error}"),
    ("transcript.body", "    {body}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("client.build_failed", "Failed to build HTTP client: {error}"),
    ("lang.invalid", "Invalid language {value}: expected 'en' or 'ca'."),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    (
        "i18n.disclaimer.machine_translated",
        "Note: non-English output is machine translated and may be inaccurate.",
    ),
];

/// Catalan catalog entries.
const CATALOG_CA: &[(&str, &str)] = &[
    ("main.version", "contact-probe {version}"),
    ("run.start", "Provant l'API de contacte a {base_url}"),
    ("check.start", "Comprovant {label}..."),
    ("check.pass", "PASS {name}"),
    ("check.fail", "FAIL {name}: {detail}"),
    ("check.warning", "AVÍS {name}: {message}"),
    ("check.label.contact_submission", "enviament de contacte"),
    ("check.label.contact_validation", "validació de contacte"),
    ("check.label.get_contacts", "llistat de contactes"),
    ("check.label.health_check", "salut del servei"),
    ("summary.header", "Resum:"),
    ("summary.line.pass", "{name}: PASS"),
    ("summary.line.fail", "{name}: FAIL"),
    ("summary.total", "{passed}/{total} comprovacions superades"),
    ("transcript.header", "Transcripció:"),
    ("transcript.entry", "#{sequence} {method} {path} -> {status}"),
    ("transcript.entry.error", "#{sequence} {method} {path} -> error: {error}"),
    ("transcript.body", "    {body}"),
    ("config.load_failed", "No s'ha pogut carregar la configuració: {error}"),
    ("client.build_failed", "No s'ha pogut crear el client HTTP: {error}"),
    ("lang.invalid", "Valor de llengua no vàlid {value}: s'esperava 'en' o 'ca'."),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "sortida"),
    ("output.write_failed", "No s'ha pogut escriure a {stream}: {error}"),
    (
        "i18n.disclaimer.machine_translated",
        "Nota: la sortida que no és en anglès està traduïda automàticament i pot ser inexacta.",
    ),
];

/// Looks up a message template in one locale's catalog.
fn template_in(locale: Locale, key: &str) -> Option<&'static str> {
    let catalog = match locale {
        Locale::En => CATALOG_EN,
        Locale::Ca => CATALOG_CA,
    };
    catalog.iter().find(|(entry, _)| *entry == key).map(|(_, template)| *template)
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = template_in(current_locale(), key)
        .or_else(|| template_in(Locale::En, key))
        .unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}

// crates/contact-probe-core/src/config.rs
// ============================================================================
// Module: Probe Configuration
// Description: Base URL and timeout resolution from layered sources.
// Purpose: Validate collaborator targeting fail-closed before any request.
// Dependencies: serde, thiserror, toml, url
// ============================================================================

//! ## Overview
//! Probe configuration carries the collaborator base URL and the per-request
//! timeout. Values resolve with the precedence flag > environment > config
//! file > default. Resolution is a pure function over already-read sources so
//! callers own all process-environment access and tests never mutate the
//! environment.
//!
//! Invariants:
//! - Invalid values are errors, never silently replaced by defaults.
//! - The base URL always parses, uses `http`/`https`, and carries a host.
//! - The timeout is always non-zero.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default collaborator base URL (local development address).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the collaborator base URL.
pub const BASE_URL_ENV: &str = "CONTACT_PROBE_BASE_URL";

/// Environment variable overriding the per-request timeout in seconds.
pub const TIMEOUT_ENV: &str = "CONTACT_PROBE_TIMEOUT_SECS";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration resolution or validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL did not parse.
    #[error("invalid base URL {value}: {detail}")]
    InvalidBaseUrl {
        /// Rejected value.
        value: String,
        /// Parser detail.
        detail: String,
    },
    /// The base URL used a scheme other than `http` or `https`.
    #[error("base URL {value} must use http or https")]
    UnsupportedScheme {
        /// Rejected value.
        value: String,
    },
    /// The base URL carried no host.
    #[error("base URL {value} is missing a host")]
    MissingHost {
        /// Rejected value.
        value: String,
    },
    /// The timeout override did not parse as a positive integer.
    #[error("invalid timeout {value}: must be a positive integer number of seconds")]
    InvalidTimeout {
        /// Rejected value.
        value: String,
    },
    /// The timeout resolved to zero seconds.
    #[error("timeout must be greater than zero seconds")]
    ZeroTimeout,
    /// The config file could not be read.
    #[error("failed to read config file {path}: {detail}")]
    FileRead {
        /// Offending file path.
        path: String,
        /// I/O detail.
        detail: String,
    },
    /// The config file was not valid TOML for the expected shape.
    #[error("failed to parse config file {path}: {detail}")]
    FileParse {
        /// Offending file path.
        path: String,
        /// Parser detail.
        detail: String,
    },
}

// ============================================================================
// SECTION: Config File
// ============================================================================

/// On-disk probe configuration (`contact-probe.toml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// The `[probe]` table.
    #[serde(default)]
    probe: ProbeSection,
}

/// The `[probe]` table of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProbeSection {
    /// Collaborator base URL.
    base_url: Option<String>,
    /// Per-request timeout in seconds.
    timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Reads and parses a config file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|err| ConfigError::FileRead {
            path: path.display().to_string(),
            detail: err.to_string(),
        })?;
        Self::parse(&raw, &path.display().to_string())
    }

    /// Parses config file contents, labeling errors with `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileParse`] when the contents are not valid
    /// TOML for the expected shape (unknown keys included).
    pub fn parse(raw: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|err| ConfigError::FileParse {
            path: path.to_string(),
            detail: err.to_string(),
        })
    }

    /// Returns the configured base URL, when present.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.probe.base_url.as_deref()
    }

    /// Returns the configured timeout in seconds, when present.
    #[must_use]
    pub const fn timeout_secs(&self) -> Option<u64> {
        self.probe.timeout_secs
    }
}

// ============================================================================
// SECTION: Sources
// ============================================================================

/// Already-read configuration sources, in no particular precedence.
///
/// # Invariants
/// - Environment values are raw strings; validation happens during resolve.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// `--base-url` flag value.
    pub flag_base_url: Option<String>,
    /// `--timeout-secs` flag value.
    pub flag_timeout_secs: Option<u64>,
    /// Raw [`BASE_URL_ENV`] value.
    pub env_base_url: Option<String>,
    /// Raw [`TIMEOUT_ENV`] value.
    pub env_timeout_secs: Option<String>,
    /// Parsed config file, when one was found.
    pub file: Option<ConfigFile>,
}

// ============================================================================
// SECTION: Probe Config
// ============================================================================

/// Validated probe configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Collaborator base URL (scheme + host + optional port).
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Builds a validated configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the base URL or timeout is invalid.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            base_url: validate_base_url(base_url)?,
            timeout,
        })
    }

    /// Resolves a configuration with the precedence flag > env > file >
    /// default, validating the winning value per field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any winning value fails validation.
    pub fn resolve(sources: &ConfigSources) -> Result<Self, ConfigError> {
        let base_url = sources
            .flag_base_url
            .as_deref()
            .or(sources.env_base_url.as_deref())
            .or_else(|| sources.file.as_ref().and_then(ConfigFile::base_url))
            .unwrap_or(DEFAULT_BASE_URL);

        let timeout_secs = match (&sources.flag_timeout_secs, &sources.env_timeout_secs) {
            (Some(flag), _) => *flag,
            (None, Some(raw)) => parse_timeout_secs(raw)?,
            (None, None) => sources
                .file
                .as_ref()
                .and_then(ConfigFile::timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        Self::new(base_url, Duration::from_secs(timeout_secs))
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates and normalizes a base URL value.
fn validate_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|err| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        detail: err.to_string(),
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::UnsupportedScheme {
            value: raw.to_string(),
        });
    }
    if url.host_str().is_none() {
        return Err(ConfigError::MissingHost {
            value: raw.to_string(),
        });
    }
    Ok(url)
}

/// Parses a raw timeout override into whole seconds.
fn parse_timeout_secs(raw: &str) -> Result<u64, ConfigError> {
    let trimmed = raw.trim();
    let secs: u64 = trimmed.parse().map_err(|_| ConfigError::InvalidTimeout {
        value: raw.to_string(),
    })?;
    if secs == 0 {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(secs)
}

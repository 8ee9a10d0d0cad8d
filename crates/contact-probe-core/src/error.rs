// crates/contact-probe-core/src/error.rs
// ============================================================================
// Module: Probe Errors
// Description: Error taxonomy for collaborator requests and client setup.
// Purpose: Keep transport, status, and decode failures distinguishable.
// Dependencies: reqwest, thiserror
// ============================================================================

//! ## Overview
//! Errors raised while exercising the collaborator. [`ProbeError`] values are
//! always folded into failing check outcomes by the check layer; they never
//! escape the suite. [`ClientError`] covers HTTP client construction and is
//! the only failure that precedes the run.
//!
//! Invariants:
//! - Every variant carries the endpoint it occurred against.
//! - Variants are stable for programmatic handling.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::StatusCode;
use thiserror::Error;

// ============================================================================
// SECTION: Probe Error
// ============================================================================

/// Failure observed while issuing or interpreting a collaborator request.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request never produced a usable response (connection refused,
    /// timeout, DNS failure, or a transport fault mid-body).
    #[error("transport error for {endpoint}: {source}")]
    Transport {
        /// Endpoint the request was issued against.
        endpoint: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },
    /// The collaborator answered with a status other than the contract's.
    #[error("unexpected status for {endpoint}: expected {expected}, got {actual}")]
    UnexpectedStatus {
        /// Endpoint the request was issued against.
        endpoint: String,
        /// Status the contract requires.
        expected: StatusCode,
        /// Status the collaborator returned.
        actual: StatusCode,
    },
    /// The response body did not decode into the expected typed payload.
    #[error("failed to decode response from {endpoint}: {detail}")]
    Decode {
        /// Endpoint the request was issued against.
        endpoint: String,
        /// Decode failure detail, including missing-field errors.
        detail: String,
    },
}

// ============================================================================
// SECTION: Client Error
// ============================================================================

/// Failure constructing the probe's HTTP client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying `reqwest` client could not be built.
    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),
}

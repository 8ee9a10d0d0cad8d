// crates/contact-probe-core/src/client.rs
// ============================================================================
// Module: Probe HTTP Client
// Description: HTTP client for the collaborator API with transcript capture.
// Purpose: Issue GET/POST requests under /api and record every exchange.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! [`ProbeClient`] wraps a timeout-configured `reqwest` client, normalizes
//! the collaborator base URL, and records a [`TranscriptEntry`] for every
//! request it issues, including requests that never produced a response.
//!
//! Invariants:
//! - All requests target paths under the fixed `/api` prefix.
//! - Transcript body snippets are bounded to [`TRANSCRIPT_BODY_LIMIT`] bytes.
//! - Collaborator responses are untrusted; decoding is explicit and typed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use reqwest::Client;
use reqwest::Method;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ProbeConfig;
use crate::error::ClientError;
use crate::error::ProbeError;
use crate::outcome::CheckName;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fixed path prefix for all collaborator endpoints.
pub const API_PREFIX: &str = "/api";

/// Maximum number of response-body bytes retained per transcript entry.
pub const TRANSCRIPT_BODY_LIMIT: usize = 4096;

// ============================================================================
// SECTION: Transcript
// ============================================================================

/// One recorded request/response exchange.
///
/// # Invariants
/// - `error` is populated iff the exchange did not complete cleanly; `status`
///   is populated iff a response status arrived.
/// - `body` is a snippet bounded to [`TRANSCRIPT_BODY_LIMIT`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    /// Monotonic request sequence number, starting at 1.
    pub sequence: u64,
    /// Check that issued the request.
    pub check: CheckName,
    /// HTTP method.
    pub method: String,
    /// Request path under the collaborator base URL.
    pub path: String,
    /// Response status code, when a response arrived.
    pub status: Option<u16>,
    /// Response body snippet, when a response arrived.
    pub body: Option<String>,
    /// Transport error text, when the request never completed.
    pub error: Option<String>,
}

// ============================================================================
// SECTION: Exchange
// ============================================================================

/// A completed HTTP exchange awaiting contract interpretation.
#[derive(Debug, Clone)]
pub struct HttpExchange {
    /// Endpoint the request was issued against.
    pub endpoint: String,
    /// Response status code.
    pub status: StatusCode,
    /// Full response body.
    pub body: String,
}

impl HttpExchange {
    /// Requires the response status to match the contract exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::UnexpectedStatus`] on any other status.
    pub fn expect_status(&self, expected: StatusCode) -> Result<(), ProbeError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(ProbeError::UnexpectedStatus {
                endpoint: self.endpoint.clone(),
                expected,
                actual: self.status,
            })
        }
    }

    /// Decodes the response body into a typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Decode`] when the body is not valid JSON for the
    /// expected shape, including missing required fields.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ProbeError> {
        serde_json::from_str(&self.body).map_err(|err| ProbeError::Decode {
            endpoint: self.endpoint.clone(),
            detail: err.to_string(),
        })
    }
}

// ============================================================================
// SECTION: Probe Client
// ============================================================================

/// HTTP client for the collaborator API with transcript capture.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    /// Normalized base URL without a trailing slash.
    base_url: String,
    /// Underlying HTTP client carrying the configured timeout.
    http: Client,
    /// Shared transcript of every issued request.
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
    /// Next transcript sequence number.
    sequence: Arc<AtomicU64>,
}

impl ProbeClient {
    /// Creates a probe client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the HTTP client cannot be built.
    pub fn new(config: &ProbeConfig) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(config.timeout).build().map_err(ClientError::Build)?;
        Ok(Self {
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            http,
            transcript: Arc::new(Mutex::new(Vec::new())),
            sequence: Arc::new(AtomicU64::new(1)),
        })
    }

    /// Returns the normalized collaborator base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a snapshot of the transcript so far.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Issues a GET request to an `/api` path.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Transport`] when no usable response arrived.
    pub async fn get(&self, check: CheckName, path: &str) -> Result<HttpExchange, ProbeError> {
        self.execute(check, Method::GET, path, None::<&()>).await
    }

    /// Issues a POST request with a JSON body to an `/api` path.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Transport`] when no usable response arrived.
    pub async fn post_json<T: Serialize + Sync>(
        &self,
        check: CheckName,
        path: &str,
        payload: &T,
    ) -> Result<HttpExchange, ProbeError> {
        self.execute(check, Method::POST, path, Some(payload)).await
    }

    /// Sends one request and records its transcript entry.
    async fn execute<T: Serialize + Sync>(
        &self,
        check: CheckName,
        method: Method,
        path: &str,
        payload: Option<&T>,
    ) -> Result<HttpExchange, ProbeError> {
        let endpoint = format!("{}{API_PREFIX}{path}", self.base_url);
        let mut request = self.http.request(method.clone(), &endpoint);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        match request.send().await {
            Err(err) => {
                self.record(check, &method, path, None, None, Some(err.to_string()));
                Err(ProbeError::Transport {
                    endpoint,
                    source: err,
                })
            }
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Err(err) => {
                        self.record(check, &method, path, Some(status), None, Some(err.to_string()));
                        Err(ProbeError::Transport {
                            endpoint,
                            source: err,
                        })
                    }
                    Ok(body) => {
                        self.record(
                            check,
                            &method,
                            path,
                            Some(status),
                            Some(bounded_snippet(&body)),
                            None,
                        );
                        Ok(HttpExchange {
                            endpoint,
                            status,
                            body,
                        })
                    }
                }
            }
        }
    }

    /// Appends a transcript entry, tolerating a poisoned transcript lock.
    fn record(
        &self,
        check: CheckName,
        method: &Method,
        path: &str,
        status: Option<StatusCode>,
        body: Option<String>,
        error: Option<String>,
    ) {
        let entry = TranscriptEntry {
            sequence: self.sequence.fetch_add(1, Ordering::SeqCst),
            check,
            method: method.as_str().to_string(),
            path: format!("{API_PREFIX}{path}"),
            status: status.map(|status| status.as_u16()),
            body,
            error,
        };
        if let Ok(mut entries) = self.transcript.lock() {
            entries.push(entry);
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Bounds a response body to the transcript snippet budget on a char edge.
fn bounded_snippet(body: &str) -> String {
    if body.len() <= TRANSCRIPT_BODY_LIMIT {
        return body.to_string();
    }
    let mut cut = TRANSCRIPT_BODY_LIMIT;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    body[..cut].to_string()
}

// crates/contact-probe-core/src/lib.rs
// ============================================================================
// Module: Contact Probe Core
// Description: Verification harness for the contact-form collaborator API.
// Purpose: Issue contract checks over HTTP and fold results into a report.
// Dependencies: reqwest, serde, serde_json, thiserror, toml, url
// ============================================================================

//! ## Overview
//! The contact-probe core library exercises a remote contact-form web service
//! over HTTP: it submits a contact, verifies that incomplete submissions are
//! rejected, lists stored contacts, and checks service health. Every network
//! fault, unexpected status, or malformed body is folded into a failing check
//! outcome; no check aborts the run.
//!
//! Invariants:
//! - Checks run strictly sequentially in a fixed order.
//! - The only state shared between checks is the submission identifier handed
//!   to the listing check.
//! - Collaborator responses are untrusted; payloads are decoded into typed
//!   structures and missing required fields are decode errors.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod checks;
pub mod client;
pub mod config;
pub mod contract;
pub mod error;
pub mod outcome;
pub mod suite;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use checks::RequiredField;
pub use checks::check_contact_submission;
pub use checks::check_contact_validation;
pub use checks::check_get_contacts;
pub use checks::check_health;
pub use client::ProbeClient;
pub use client::TranscriptEntry;
pub use config::ConfigError;
pub use config::ConfigFile;
pub use config::ConfigSources;
pub use config::ProbeConfig;
pub use contract::ContactSubmission;
pub use contract::ContactsPage;
pub use contract::HealthPayload;
pub use contract::SubmissionReceipt;
pub use error::ClientError;
pub use error::ProbeError;
pub use outcome::CheckName;
pub use outcome::CheckOutcome;
pub use outcome::CheckStatus;
pub use outcome::SuiteReport;
pub use suite::NoopObserver;
pub use suite::SuiteObserver;
pub use suite::run_suite;

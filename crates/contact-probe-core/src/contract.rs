// crates/contact-probe-core/src/contract.rs
// ============================================================================
// Module: Collaborator Wire Contract
// Description: Typed request and response payloads for the contact-form API.
// Purpose: Decode collaborator responses into explicit structures.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Typed payloads for the collaborator's `/api` endpoints. Required fields
//! are plain struct members so that a missing field surfaces as a decode
//! error rather than a silent default; unknown extra fields are ignored.
//!
//! Invariants:
//! - `HealthPayload::timestamp` must be present but its JSON type is not
//!   constrained by the harness.
//! - Listed contact records may omit their identifier; correlation scans
//!   tolerate that.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Sentinel value the health endpoint must report in its `status` field.
pub const HEALTH_OK: &str = "ok";

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Contact submission request body for `POST /api/contact`.
///
/// # Invariants
/// - `name`, `email`, and `message` are the fields the collaborator treats as
///   required; `phone` and `budget` are accepted but optional server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Submitter name.
    pub name: String,
    /// Submitter email address.
    pub email: String,
    /// Submitter phone number.
    pub phone: String,
    /// Free-form inquiry message.
    pub message: String,
    /// Budget range string (for example, `10000-25000`).
    pub budget: String,
}

impl ContactSubmission {
    /// Returns the fully populated submission fixture used by the harness.
    #[must_use]
    pub fn fixture() -> Self {
        Self {
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@techcorp.com".to_string(),
            phone: "+1-555-0123".to_string(),
            message: "Hi, I'm interested in your web development services for \
                      our e-commerce platform. We need a complete redesign \
                      with modern features."
                .to_string(),
            budget: "10000-25000".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Responses
// ============================================================================

/// Receipt returned by the collaborator for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Whether the collaborator accepted the submission.
    pub success: bool,
    /// Identifier generated for the stored contact.
    pub id: String,
    /// Human-readable acknowledgement message.
    pub message: String,
}

/// A single contact entry from the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Stored contact identifier, when the collaborator exposes one.
    #[serde(default)]
    pub id: Option<String>,
}

/// Response body for `GET /api/contacts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsPage {
    /// Stored contacts, most collaborator implementations return newest last.
    pub contacts: Vec<ContactRecord>,
}

impl ContactsPage {
    /// Returns whether any listed record carries the given identifier.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.contacts.iter().any(|record| record.id.as_deref() == Some(id))
    }
}

/// Response body for `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthPayload {
    /// Reported service status; must equal [`HEALTH_OK`] for a healthy pass.
    pub status: String,
    /// Report timestamp; required to be present, shape is collaborator-defined.
    pub timestamp: Value,
}

impl HealthPayload {
    /// Returns whether the payload reports a healthy service.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == HEALTH_OK
    }
}

// crates/contact-probe-core/src/checks.rs
// ============================================================================
// Module: Contract Checks
// Description: The four named checks against the collaborator API.
// Purpose: Fold every request fault into a pass/fail outcome, never a panic.
// Dependencies: reqwest, serde_json, crate::client, crate::contract
// ============================================================================

//! ## Overview
//! One async function per named check. Checks are infallible by construction:
//! every [`ProbeError`](crate::error::ProbeError) raised by the client layer
//! is converted into a failing [`CheckOutcome`] carrying the error text.
//!
//! Invariants:
//! - A check issues requests only for its own endpoint behavior.
//! - The submission check is the only producer of a contact identifier.
//! - Identifier correlation in the listing check warns, never fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::StatusCode;
use serde_json::Value;
use serde_json::json;

use crate::client::ProbeClient;
use crate::contract::ContactSubmission;
use crate::contract::ContactsPage;
use crate::contract::HEALTH_OK;
use crate::contract::HealthPayload;
use crate::contract::SubmissionReceipt;
use crate::error::ProbeError;
use crate::outcome::CheckName;
use crate::outcome::CheckOutcome;

// ============================================================================
// SECTION: Contact Submission
// ============================================================================

/// Submits the fixture contact and verifies the receipt contract.
///
/// Passes iff the collaborator answers 201 with `success == true`, a
/// non-empty generated identifier, and an acknowledgement message. The
/// identifier rides on the outcome for the listing check.
pub async fn check_contact_submission(client: &ProbeClient) -> CheckOutcome {
    let name = CheckName::ContactSubmission;
    match submit_fixture(client).await {
        Ok(receipt) => {
            if !receipt.success {
                return CheckOutcome::fail(name, "receipt success flag is not true");
            }
            if receipt.id.is_empty() {
                return CheckOutcome::fail(name, "receipt id is empty");
            }
            CheckOutcome::pass(name)
                .with_detail(format!("contact {} accepted", receipt.id))
                .with_contact_id(receipt.id)
        }
        Err(err) => CheckOutcome::fail(name, err.to_string()),
    }
}

/// Posts the fixture submission and decodes the receipt.
async fn submit_fixture(client: &ProbeClient) -> Result<SubmissionReceipt, ProbeError> {
    let payload = ContactSubmission::fixture();
    let exchange = client.post_json(CheckName::ContactSubmission, "/contact", &payload).await?;
    exchange.expect_status(StatusCode::CREATED)?;
    exchange.decode()
}

// ============================================================================
// SECTION: Contact Validation
// ============================================================================

/// Required submission fields the collaborator must enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// The `name` field.
    Name,
    /// The `email` field.
    Email,
    /// The `message` field.
    Message,
}

impl RequiredField {
    /// All required fields, in the order the variants are probed.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Builds a submission payload with exactly this field omitted.
    #[must_use]
    pub fn incomplete_submission(self) -> Value {
        match self {
            Self::Name => json!({
                "email": "test@example.com",
                "message": "Test message",
            }),
            Self::Email => json!({
                "name": "Test User",
                "message": "Test message",
            }),
            Self::Message => json!({
                "name": "Test User",
                "email": "test@example.com",
            }),
        }
    }
}

/// Verifies that each incomplete submission variant is rejected with 400.
///
/// Passes iff all three missing-field variants yield exactly status 400. The
/// response body is not inspected for this check.
pub async fn check_contact_validation(client: &ProbeClient) -> CheckOutcome {
    let name = CheckName::ContactValidation;
    let mut failures = Vec::new();
    for field in RequiredField::ALL {
        if let Err(err) = reject_incomplete(client, field).await {
            failures.push(format!("missing {}: {err}", field.as_str()));
        }
    }
    if failures.is_empty() {
        CheckOutcome::pass(name)
    } else {
        CheckOutcome::fail(name, failures.join("; "))
    }
}

/// Posts one incomplete variant and requires a 400 rejection.
async fn reject_incomplete(client: &ProbeClient, field: RequiredField) -> Result<(), ProbeError> {
    let payload = field.incomplete_submission();
    let exchange = client.post_json(CheckName::ContactValidation, "/contact", &payload).await?;
    exchange.expect_status(StatusCode::BAD_REQUEST)
}

// ============================================================================
// SECTION: Get Contacts
// ============================================================================

/// Lists stored contacts and correlates the submitted identifier.
///
/// Passes iff the collaborator answers 200 with a `contacts` sequence. When a
/// prior submission produced an identifier, its absence from the listing is
/// recorded as a warning on the outcome, never as a failure.
pub async fn check_get_contacts(client: &ProbeClient, expected_id: Option<&str>) -> CheckOutcome {
    let name = CheckName::GetContacts;
    match list_contacts(client).await {
        Ok(page) => {
            let mut outcome = CheckOutcome::pass(name)
                .with_detail(format!("{} contacts listed", page.contacts.len()));
            if let Some(id) = expected_id {
                if !page.contains_id(id) {
                    outcome.push_warning(format!("submitted contact {id} not found in listing"));
                }
            }
            outcome
        }
        Err(err) => CheckOutcome::fail(name, err.to_string()),
    }
}

/// Fetches and decodes the contact listing.
async fn list_contacts(client: &ProbeClient) -> Result<ContactsPage, ProbeError> {
    let exchange = client.get(CheckName::GetContacts, "/contacts").await?;
    exchange.expect_status(StatusCode::OK)?;
    exchange.decode()
}

// ============================================================================
// SECTION: Health Check
// ============================================================================

/// Verifies the health endpoint reports a healthy service.
///
/// Passes iff the collaborator answers 200 with `status == "ok"` and a
/// `timestamp` field present.
pub async fn check_health(client: &ProbeClient) -> CheckOutcome {
    let name = CheckName::HealthCheck;
    match fetch_health(client).await {
        Ok(payload) => {
            if payload.is_ok() {
                CheckOutcome::pass(name)
            } else {
                CheckOutcome::fail(
                    name,
                    format!("health status is '{}', expected '{HEALTH_OK}'", payload.status),
                )
            }
        }
        Err(err) => CheckOutcome::fail(name, err.to_string()),
    }
}

/// Fetches and decodes the health payload.
async fn fetch_health(client: &ProbeClient) -> Result<HealthPayload, ProbeError> {
    let exchange = client.get(CheckName::HealthCheck, "/health").await?;
    exchange.expect_status(StatusCode::OK)?;
    exchange.decode()
}

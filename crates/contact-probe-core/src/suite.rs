// crates/contact-probe-core/src/suite.rs
// ============================================================================
// Module: Suite Orchestrator
// Description: Sequential execution of the named checks in fixed order.
// Purpose: Run every check to completion and assemble the suite report.
// Dependencies: crate::checks, crate::client, crate::outcome
// ============================================================================

//! ## Overview
//! The orchestrator runs the checks strictly sequentially in the order
//! submission → validation → contacts → health, threading the submission
//! identifier into the listing check. An observer is notified at check start
//! and completion; the CLI hangs its live console output off that seam.
//!
//! Invariants:
//! - Every check runs; no failure aborts the suite.
//! - The report holds the outcomes in execution order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::checks::check_contact_submission;
use crate::checks::check_contact_validation;
use crate::checks::check_get_contacts;
use crate::checks::check_health;
use crate::client::ProbeClient;
use crate::outcome::CheckName;
use crate::outcome::CheckOutcome;
use crate::outcome::SuiteReport;

// ============================================================================
// SECTION: Observer
// ============================================================================

/// Receives suite progress notifications as checks start and complete.
pub trait SuiteObserver {
    /// Called immediately before a check issues its first request.
    fn on_check_start(&mut self, _name: CheckName) {}

    /// Called with the outcome once a check has run to completion.
    fn on_check_complete(&mut self, _outcome: &CheckOutcome) {}
}

/// Observer that discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SuiteObserver for NoopObserver {}

// ============================================================================
// SECTION: Orchestrator
// ============================================================================

/// Runs the full check suite sequentially and returns the report.
///
/// The only state handed between checks is the identifier produced by a
/// passing submission, consumed by the listing check's correlation scan.
pub async fn run_suite(client: &ProbeClient, observer: &mut dyn SuiteObserver) -> SuiteReport {
    let mut outcomes = Vec::with_capacity(CheckName::RUN_ORDER.len());

    observer.on_check_start(CheckName::ContactSubmission);
    let submission = check_contact_submission(client).await;
    observer.on_check_complete(&submission);
    let contact_id = submission.contact_id.clone();
    outcomes.push(submission);

    observer.on_check_start(CheckName::ContactValidation);
    let validation = check_contact_validation(client).await;
    observer.on_check_complete(&validation);
    outcomes.push(validation);

    observer.on_check_start(CheckName::GetContacts);
    let contacts = check_get_contacts(client, contact_id.as_deref()).await;
    observer.on_check_complete(&contacts);
    outcomes.push(contacts);

    observer.on_check_start(CheckName::HealthCheck);
    let health = check_health(client).await;
    observer.on_check_complete(&health);
    outcomes.push(health);

    SuiteReport::new(outcomes)
}

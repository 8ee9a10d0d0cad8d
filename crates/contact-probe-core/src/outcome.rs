// crates/contact-probe-core/src/outcome.rs
// ============================================================================
// Module: Check Outcomes
// Description: Named checks, per-check outcomes, and the suite report.
// Purpose: Carry pass/fail results from checks to the summary and exit code.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every check produces a [`CheckOutcome`]; the orchestrator collects them in
//! run order into a [`SuiteReport`]. Outcomes are ordinary return values
//! (checks never raise), and warnings ride along without affecting the
//! pass/fail status.
//!
//! Invariants:
//! - [`CheckName::RUN_ORDER`] is the fixed execution and summary order.
//! - A report holds exactly one outcome per executed check, run order
//!   preserved.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Check Names
// ============================================================================

/// The named checks the harness runs, one per collaborator behavior.
///
/// # Invariants
/// - Variants are stable; [`CheckName::as_str`] is the summary wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckName {
    /// Submit the fixture contact and verify the receipt.
    ContactSubmission,
    /// Verify incomplete submissions are rejected with status 400.
    ContactValidation,
    /// List stored contacts and correlate the submitted identifier.
    GetContacts,
    /// Verify the health endpoint reports a healthy service.
    HealthCheck,
}

impl CheckName {
    /// Fixed execution order for the suite.
    pub const RUN_ORDER: [Self; 4] =
        [Self::ContactSubmission, Self::ContactValidation, Self::GetContacts, Self::HealthCheck];

    /// Returns the stable summary key for this check.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ContactSubmission => "contact_submission",
            Self::ContactValidation => "contact_validation",
            Self::GetContacts => "get_contacts",
            Self::HealthCheck => "health_check",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Check Status
// ============================================================================

/// Pass/fail status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The collaborator honored the contract.
    Pass,
    /// The collaborator violated the contract or was unreachable.
    Fail,
}

impl CheckStatus {
    /// Returns whether this status is a pass.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

// ============================================================================
// SECTION: Check Outcome
// ============================================================================

/// Result of one check invocation.
///
/// # Invariants
/// - `contact_id` is only ever set by a passing submission check.
/// - Warnings never change the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Which check produced this outcome.
    pub name: CheckName,
    /// Pass/fail status.
    pub status: CheckStatus,
    /// Human-readable detail (failure reason, or pass context).
    pub detail: Option<String>,
    /// Identifier of the contact created by the submission check.
    pub contact_id: Option<String>,
    /// Non-fatal observations recorded while the check ran.
    pub warnings: Vec<String>,
}

impl CheckOutcome {
    /// Creates a passing outcome with no detail.
    #[must_use]
    pub const fn pass(name: CheckName) -> Self {
        Self {
            name,
            status: CheckStatus::Pass,
            detail: None,
            contact_id: None,
            warnings: Vec::new(),
        }
    }

    /// Creates a failing outcome with the given reason.
    #[must_use]
    pub fn fail(name: CheckName, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Fail,
            detail: Some(detail.into()),
            contact_id: None,
            warnings: Vec::new(),
        }
    }

    /// Attaches pass/fail context to the outcome.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attaches the created contact identifier to the outcome.
    #[must_use]
    pub fn with_contact_id(mut self, id: impl Into<String>) -> Self {
        self.contact_id = Some(id.into());
        self
    }

    /// Records a non-fatal warning on the outcome.
    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Returns whether the check passed.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        self.status.is_pass()
    }
}

// ============================================================================
// SECTION: Suite Report
// ============================================================================

/// Ordered outcomes of a full suite run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Outcomes in execution order.
    outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    /// Creates a report from outcomes in execution order.
    #[must_use]
    pub const fn new(outcomes: Vec<CheckOutcome>) -> Self {
        Self {
            outcomes,
        }
    }

    /// Returns the outcomes in execution order.
    #[must_use]
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Returns the outcome for a named check, when it ran.
    #[must_use]
    pub fn outcome(&self, name: CheckName) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|outcome| outcome.name == name)
    }

    /// Returns the number of passing checks.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_pass()).count()
    }

    /// Returns the total number of checks that ran.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns whether every check passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::is_pass)
    }
}

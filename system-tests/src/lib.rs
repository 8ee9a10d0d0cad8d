// system-tests/src/lib.rs
// ============================================================================
// Module: System Tests Crate
// Description: Integration suites for the contact-probe harness.
// Purpose: Anchor the system-test crate; all content lives under tests/.
// Dependencies: none
// ============================================================================

//! ## Overview
//! This crate exists to host the system-test suites under `tests/`. The
//! suites exercise the full harness against in-process collaborator stubs.

// crates/contact-probe-cli/src/lib.rs
// ============================================================================
// Module: Contact Probe CLI Library
// Description: Shared CLI support code for the contact-probe binary.
// Purpose: Expose the message catalog to the binary and its tests.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Library half of the `contact-probe` binary. It hosts the localized
//! message catalog so user-facing strings stay in one place and the `t!`
//! macro is available to the entry point and to tests.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;

// system-tests/tests/helpers/timeouts.rs
// ============================================================================
// Module: System Test Timeouts
// Description: Per-request timeout selection for the suites.
// Purpose: Allow slow environments to stretch suite timeouts via env.
// ============================================================================

use std::env;
use std::time::Duration;

/// Environment variable raising the minimum per-request timeout (seconds).
const ENV_TIMEOUT_SECS: &str = "CONTACT_PROBE_SYSTEM_TEST_TIMEOUT_SEC";

/// Default per-request timeout used by the suites.
const DEFAULT_SUITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Returns the per-request timeout for suite probe clients.
///
/// The env override only ever raises the timeout; suites that probe timeout
/// behavior itself pick their own short value deliberately.
#[must_use]
pub fn suite_timeout() -> Duration {
    let floor = env::var(ENV_TIMEOUT_SECS)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(Duration::ZERO);
    std::cmp::max(DEFAULT_SUITE_TIMEOUT, floor)
}

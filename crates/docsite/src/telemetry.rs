//! Telemetry counters for site assembly.
//! Kept independent of the site orchestrator; callers pass counters in
//! explicitly.

use anyhow::Error;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SiteCounters {
    pub pages_rendered: u64,
    pub sections_emitted: u64,
    pub cards_emitted: u64,
    pub docgen_fetch_ms_total: u64,
    pub render_ms_total: u64,
    pub docgen_misses: u64,
}

/// Serialize counters as a single JSON line.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn counters_json(counters: &SiteCounters) -> Result<String, Error> {
    Ok(serde_json::to_string(counters)?)
}

/// Emit a counter line to stdout when telemetry is enabled.
#[allow(clippy::print_stdout, reason = "telemetry lines are machine-consumed stdout output")]
pub fn maybe_emit(enabled: bool, json_line: &str) {
    if enabled {
        println!("{json_line}");
    }
}

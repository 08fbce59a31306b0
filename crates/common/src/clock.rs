//! ISO-8601 UTC timestamp rendering.
//!
//! All announcement timestamps are stored and compared as strings. This only
//! works because every timestamp in the system is a zero-padded ISO-8601 UTC
//! string produced by [`now_iso`] (or supplied by clients in the same shape),
//! which makes lexical ordering identical to chronological ordering. The
//! active-window filter in `campus-db` relies on this invariant; do not
//! switch it to parsed datetime comparison.

use chrono::Utc;

/// Render the current UTC time as a naive ISO-8601 string with microsecond
/// precision, e.g. `2025-01-10T08:30:00.000123`.
#[must_use]
pub fn now_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

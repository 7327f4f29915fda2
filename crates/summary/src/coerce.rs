//! # Boundary Coercion
//!
//! Form inputs arrive as strings. These helpers parse them into strict
//! types at the boundary so raw string arithmetic never reaches the
//! aggregation engine.

use chrono::NaiveDate;

/// Parse a non-negative count from form input.
///
/// Unparseable or negative input falls back to zero.
#[must_use]
pub fn count(input: &str) -> i64 {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
        .unwrap_or(0)
}

/// Parse a calendar date from form input (`YYYY-MM-DD`).
#[must_use]
pub fn date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

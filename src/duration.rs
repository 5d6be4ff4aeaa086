//! Duration-string parsing for trace values
//!
//! Workflow engines write elapsed time in whatever notation suited the task:
//! "42.9s", "500ms", "1h 21m 27s", "3.5d". Everything is normalized here to
//! a single nanosecond count so totals can be accumulated exactly.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

/// Errors for duration-string parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty duration string")]
    Empty,

    #[error("unsupported duration format: {0}")]
    BadToken(String),

    #[error("error parsing duration value: {0}")]
    BadNumber(String),

    #[error("unknown time unit: {0}")]
    UnknownUnit(String),
}

/// An elapsed-time magnitude with nanosecond resolution.
///
/// Plain value type: no identity beyond the count, immutable once built.
/// 64-bit nanoseconds keeps year-scale pipeline totals well in range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TraceDuration(u64);

impl TraceDuration {
    pub const ZERO: Self = TraceDuration(0);

    pub fn from_nanos(nanos: u64) -> Self {
        TraceDuration(nanos)
    }

    pub fn as_nanos(self) -> u64 {
        self.0
    }

    pub fn as_secs(self) -> u64 {
        self.0 / 1_000_000_000
    }

    /// Total minutes as a decimal, for the summary report
    pub fn as_minutes_f64(self) -> f64 {
        self.0 as f64 / 60_000_000_000.0
    }

    /// Break the total into whole hours, leftover minutes, leftover seconds
    pub fn split_hms(self) -> (u64, u64, u64) {
        let secs = self.as_secs();
        (secs / 3600, (secs / 60) % 60, secs % 60)
    }

    /// Saturating addition: a pathological file clamps instead of wrapping
    pub fn saturating_add(self, rhs: Self) -> Self {
        TraceDuration(self.0.saturating_add(rhs.0))
    }

    pub fn to_std(self) -> Duration {
        Duration::from_nanos(self.0)
    }
}

impl fmt::Display for TraceDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        humantime::format_duration(self.to_std()).fmt(f)
    }
}

/// Static regex for a single duration token. Compiled once at first use.
/// Shape: optional leading whitespace, decimal number, optional whitespace,
/// alphabetic unit suffix, nothing trailing. `\p{L}` (not `[a-zA-Z]`) so the
/// micro sign and its common mis-encoding reach the unit table.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9.]+)\s*(\p{L}+)$").expect("invalid duration token pattern")
});

/// Nanosecond scale for a lowercased unit name
fn unit_scale(unit: &str) -> Option<u64> {
    match unit {
        "ns" | "nanosecond" | "nanoseconds" => Some(1),
        // "\u{e2}\u{b5}s" is "µs" read back through a latin-1 round trip,
        // lowercased; some engines emit it that way
        "us" | "\u{b5}s" | "\u{e2}\u{b5}s" | "microsecond" | "microseconds" => Some(1_000),
        "ms" | "millisecond" | "milliseconds" => Some(1_000_000),
        "s" | "sec" | "second" | "seconds" => Some(1_000_000_000),
        "m" | "min" | "minute" | "minutes" => Some(60_000_000_000),
        "h" | "hr" | "hour" | "hours" => Some(3_600_000_000_000),
        "d" | "day" | "days" => Some(86_400_000_000_000),
        _ => None,
    }
}

/// Parse one number+unit token, e.g. "42.9s" or "500 ms".
///
/// The numeric value is read as f64 and the scaled result truncated toward
/// zero to integer nanoseconds. Truncation is per token; `parse_duration`
/// relies on that when summing composites.
fn parse_token(token: &str) -> Result<TraceDuration, ParseError> {
    let caps = TOKEN_RE
        .captures(token)
        .ok_or_else(|| ParseError::BadToken(token.to_string()))?;

    let value: f64 = caps[1]
        .parse()
        .map_err(|_| ParseError::BadNumber(caps[1].to_string()))?;

    let unit = caps[2].to_lowercase();
    let scale = unit_scale(&unit).ok_or_else(|| ParseError::UnknownUnit(caps[2].to_string()))?;

    Ok(TraceDuration::from_nanos((value * scale as f64) as u64))
}

/// Parse a trace duration string.
///
/// Two sub-parsers with explicit fallback order: the whole string is first
/// tried as a single number+unit token; failing that, it is split on
/// whitespace and each token parsed independently, summing the per-token
/// results. Any unparseable token fails the whole parse; the error names the
/// first offending token.
pub fn parse_duration(text: &str) -> Result<TraceDuration, ParseError> {
    if let Ok(single) = parse_token(text) {
        return Ok(single);
    }

    let mut tokens = text.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Err(ParseError::Empty);
    }

    let mut total = TraceDuration::ZERO;
    for token in tokens {
        total = total.saturating_add(parse_token(token)?);
    }
    Ok(total)
}

//! Numeric parsing for listing values.
//!
//! Pure helpers shared by the field extractor and the raw-text fallback
//! scans. All of them return `None` instead of failing: an unreadable
//! value is simply absent from the descriptor.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").expect("valid regex"));

/// Parses an integer that may carry grouping commas: "12,500" → 12500.
pub fn parse_grouped_int(text: &str) -> Option<i64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse().ok()
}

/// Parses a dollar amount out of surrounding text.
///
/// Strips a leading `$`, finds the first run of digits (grouping commas
/// allowed), and ignores everything around it. An amount wrapped in
/// parentheses is negative: "($50)" → -50.
pub fn parse_currency(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if let Some(inner) = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_currency(inner).map(|amount| -amount);
    }
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let run = DIGIT_RUN.find(trimmed)?;
    parse_grouped_int(run.as_str())
}

/// Parses a chip count with an optional magnitude suffix.
///
/// "1.5k" → 1500, "2M" → 2000000, "20,000" → 20000. Suffixes are
/// case-insensitive; fractional prefixes multiply then truncate.
pub fn parse_chip_count(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let lower = trimmed.to_lowercase();
    if let Some(prefix) = lower.strip_suffix('k') {
        return parse_fraction(prefix).map(|value| (value * 1_000.0) as i64);
    }
    if let Some(prefix) = lower.strip_suffix('m') {
        return parse_fraction(prefix).map(|value| (value * 1_000_000.0) as i64);
    }
    parse_grouped_int(trimmed)
}

fn parse_fraction(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse().ok()
}

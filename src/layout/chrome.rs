//! Chrome filter.
//!
//! Photographed listing screens carry navigation controls, status bar
//! text, and section headers that must never reach the field extractor
//! or the schedule interpreter.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lines whose lower-cased text equals one of these, or starts with one
/// followed by a space, are chrome. Navigation controls, short status
/// fragments, and section headers of the listing formats we scan.
const CHROME_DENYLIST: &[&str] = &[
    "back",
    "done",
    "edit",
    "cancel",
    "close",
    "menu",
    "search",
    "share",
    "sign in",
    "log in",
    "register now",
    "buy tickets",
    "today",
    "tomorrow",
    "upcoming",
    "results",
    "tournaments",
    "daily tournaments",
    "tournament schedule",
    "poker room",
    "wi-fi",
    "lte",
];

/// OS clock readouts such as "9:41" or "12:30 PM" at the start of a line.
static TIME_OF_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}(\s*[AaPp][Mm])?\b").expect("valid regex"));

/// True when a reconstructed line is boilerplate rather than content.
///
/// Anything three characters or shorter is rejected outright; real
/// labels and schedule rows are always longer.
pub fn is_chrome_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.chars().count() <= 3 {
        return true;
    }
    if TIME_OF_DAY.is_match(trimmed) {
        return true;
    }
    let lower = trimmed.to_lowercase();
    CHROME_DENYLIST
        .iter()
        .any(|entry| lower == *entry || lower.starts_with(&format!("{entry} ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lines_rejected() {
        assert!(is_chrome_line("OK"));
        assert!(is_chrome_line("5G"));
        assert!(is_chrome_line("   "));
    }

    #[test]
    fn test_denylist_exact_and_prefix() {
        assert!(is_chrome_line("Back"));
        assert!(is_chrome_line("Daily Tournaments"));
        assert!(is_chrome_line("Today 7:00 PM"));
        // Prefix must be a whole word, not a substring
        assert!(!is_chrome_line("Backdoor Bounty Bonanza"));
    }

    #[test]
    fn test_clock_readout_rejected() {
        assert!(is_chrome_line("9:41"));
        assert!(is_chrome_line("12:30 PM"));
    }

    #[test]
    fn test_content_lines_pass() {
        assert!(!is_chrome_line("Total Buy-In: $400"));
        assert!(!is_chrome_line("Level 1 30 100 200"));
        assert!(!is_chrome_line("Friday Night Deepstack"));
    }
}

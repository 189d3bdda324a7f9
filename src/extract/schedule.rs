//! Blind-schedule interpretation.
//!
//! Printed structure sheets come in two shapes: a fixed-column table
//! with a header row ("Name / Length / Small Blind / Big Blind") and
//! free-form rows of bare numbers. The interpreter detects which shape
//! it is looking at and converts numeric rows into blind levels,
//! silently skipping anything that fails the sanity rules.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::scalars::parse_grouped_int;
use crate::descriptor::BlindLevel;

static NUMBER_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").expect("valid regex"));
static TRAILING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\d[\d,]*\s*$").expect("valid regex"));

/// Section headings that introduce the schedule but carry no row data.
const SECTION_HEADERS: &[&str] = &[
    "structure",
    "blind structure",
    "tournament structure",
    "blind schedule",
    "blinds",
    "levels",
];

/// Break length used when the row does not print a plausible one.
const DEFAULT_BREAK_MINUTES: u32 = 15;

/// Converts the photograph's content lines into an ordered level list.
///
/// A running counter numbers accepted rows (breaks included) in
/// document order; a row that carries its own plausible level number
/// keeps it instead.
pub fn interpret_schedule(lines: &[String]) -> Vec<BlindLevel> {
    let header_index = lines.iter().position(|line| is_structure_header(line));
    if header_index.is_some() {
        debug!("schedule: fixed-column header found");
    }

    let mut levels: Vec<BlindLevel> = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if Some(index) == header_index || is_section_header(line) {
            continue;
        }

        let next_number = levels.len() as u32 + 1;
        let lower = line.to_lowercase();
        if lower.contains("break") {
            levels.push(break_row(line, next_number));
            continue;
        }

        let tokens = numeric_tokens(line);
        let parsed = if lower.starts_with("level") || lower.starts_with("lvl") {
            // Numbered rows always follow the fixed-column layout
            if tokens.len() >= 3 {
                fixed_row(&tokens, next_number)
            } else {
                None
            }
        } else if tokens.len() >= 3 {
            match header_index {
                // Rows above the header belong to the metadata region
                Some(header) if index > header => fixed_row(&tokens, next_number),
                Some(_) => None,
                None => generic_row(&tokens, next_number),
            }
        } else {
            None
        };

        match parsed {
            Some(level) => levels.push(level),
            None if tokens.len() >= 3 => {
                debug!("schedule: skipping implausible row {line:?}");
            }
            None => {}
        }
    }
    levels
}

/// The fixed-column source format announces itself with a header row
/// naming all four columns, full or abbreviated.
fn is_structure_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    let has_word = |abbr: &str| {
        lower
            .split_whitespace()
            .any(|word| word.trim_matches(':') == abbr)
    };
    (lower.contains("name"))
        && (lower.contains("length") || has_word("len"))
        && (lower.contains("small blind") || has_word("sb"))
        && (lower.contains("big blind") || has_word("bb"))
}

fn is_section_header(line: &str) -> bool {
    let lower = line.trim().trim_end_matches(':').to_lowercase();
    SECTION_HEADERS.contains(&lower.as_str())
}

fn numeric_tokens(line: &str) -> Vec<i64> {
    NUMBER_TOKEN
        .find_iter(line)
        .filter_map(|token| parse_grouped_int(token.as_str()))
        .collect()
}

/// Any row mentioning a break becomes a break record: the duration is
/// the last embedded number when it lies in [1,60], else the default;
/// the label is the row with a trailing numeric token stripped.
fn break_row(line: &str, number: u32) -> BlindLevel {
    let minutes = numeric_tokens(line)
        .last()
        .copied()
        .filter(|value| (1..=60).contains(value))
        .map(|value| value as u32)
        .unwrap_or(DEFAULT_BREAK_MINUTES);
    let label = TRAILING_NUMBER.replace(line.trim(), "").trim().to_string();
    let label = if label.is_empty() {
        "Break".to_string()
    } else {
        label
    };
    BlindLevel::rest(number, minutes, label)
}

/// Whether the leading token reads as an explicit level number: small,
/// and either the number we expect next or small enough to be a level
/// in any structure we have seen.
fn is_level_lead_in(token: i64, expected: u32) -> bool {
    token <= 50 && (token == i64::from(expected) || token <= 30)
}

/// Fixed-column layout: `[Level?, Duration, SB, BB, Ante?]`.
///
/// The lead-in is only consumed when a complete row remains after it;
/// an unnumbered `30 500 1000` row must keep its duration.
fn fixed_row(tokens: &[i64], expected: u32) -> Option<BlindLevel> {
    let (number, rest) = match tokens.split_first() {
        Some((&first, rest)) if rest.len() >= 3 && is_level_lead_in(first, expected) => {
            (first as u32, rest)
        }
        _ => (expected, tokens),
    };
    if rest.len() < 3 {
        return None;
    }
    let minutes = rest[0];
    let small = rest[1];
    let big = rest[2];
    let ante = rest.get(3).copied().unwrap_or(0);

    if small <= 0 || big < small || !(1..=120).contains(&minutes) {
        return None;
    }
    Some(BlindLevel::play(
        number,
        to_u32(small)?,
        to_u32(big)?,
        to_u32(ante)?,
        minutes as u32,
    ))
}

/// Generic layout: `[Level?, SB, BB, Ante?, Duration?]`.
///
/// A third remaining token is a duration when it is plausible as one
/// and too small to be an ante for these blinds; otherwise it is the
/// ante and a fourth token, if any, supplies the duration.
fn generic_row(tokens: &[i64], expected: u32) -> Option<BlindLevel> {
    let (number, rest) = match tokens.split_first() {
        Some((&first, rest)) if rest.len() >= 2 && is_level_lead_in(first, expected) => {
            (first as u32, rest)
        }
        _ => (expected, tokens),
    };
    if rest.len() < 2 {
        return None;
    }
    let small = rest[0];
    let big = rest[1];

    let mut ante = 0;
    let mut minutes = None;
    if let Some(&third) = rest.get(2) {
        if (5..=60).contains(&third) && third < small {
            minutes = Some(third);
        } else {
            ante = third;
            minutes = rest.get(3).copied();
        }
    }
    let minutes = match minutes {
        Some(value) if (1..=120).contains(&value) => value as u32,
        _ => 30,
    };

    if small <= 0 || big < small {
        return None;
    }
    Some(BlindLevel::play(
        number,
        to_u32(small)?,
        to_u32(big)?,
        to_u32(ante)?,
        minutes,
    ))
}

fn to_u32(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}

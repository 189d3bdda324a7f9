//! Label/value extraction from reconstructed lines.
//!
//! Listings print metadata either inline ("Total Buy-In: $400") or as a
//! label line followed by a value line. Both shapes feed one map keyed
//! by a closed label vocabulary; the first value seen for a label wins.

use std::collections::HashMap;

/// The metadata labels we know how to read. Closed set: adding a label
/// is one variant plus one keyword-table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    EventName,
    Venue,
    GameType,
    TotalBuyIn,
    EntryFee,
    Deductions,
    Guarantee,
    BountyAmount,
    StartingChips,
    StartingBlinds,
    ReEntry,
}

/// Keyword table, normalized form. Aliases map to the same label.
const LABEL_KEYWORDS: &[(&str, FieldLabel)] = &[
    ("event name", FieldLabel::EventName),
    ("venue", FieldLabel::Venue),
    ("location", FieldLabel::Venue),
    ("game type", FieldLabel::GameType),
    ("total buy-in", FieldLabel::TotalBuyIn),
    ("entry fee", FieldLabel::EntryFee),
    ("deductions", FieldLabel::Deductions),
    ("guarantee", FieldLabel::Guarantee),
    ("bounty amount", FieldLabel::BountyAmount),
    ("starting chips", FieldLabel::StartingChips),
    ("starting stack", FieldLabel::StartingChips),
    ("starting blinds", FieldLabel::StartingBlinds),
    ("re-entry", FieldLabel::ReEntry),
];

/// Label → trimmed value, at most one value per label per photograph.
pub type FieldMap = HashMap<FieldLabel, String>;

/// Lower-cases and folds unicode dash variants to a plain hyphen, so
/// "Re–Entry" and "re-entry" compare equal.
fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' => '-',
            other => other,
        })
        .collect()
}

/// Label match at the start of a normalized line. The label must end at
/// a boundary (end of line, colon, or whitespace) so "guaranteed $10K"
/// is not read as a "guarantee" value of "d $10K".
fn leading_label(normalized: &str) -> Option<(FieldLabel, &str)> {
    for (keyword, label) in LABEL_KEYWORDS {
        if let Some(rest) = normalized.strip_prefix(keyword) {
            if rest.is_empty() || rest.starts_with(':') || rest.starts_with(char::is_whitespace) {
                return Some((*label, rest));
            }
        }
    }
    None
}

/// True when the line is nothing but a label (a trailing colon allowed).
fn is_bare_label(normalized: &str) -> Option<FieldLabel> {
    let stripped = normalized.trim_end_matches(':').trim_end();
    LABEL_KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == stripped)
        .map(|(_, label)| *label)
}

/// Builds the field map for one photograph.
///
/// Strategy 1: a label at the start of a line, value = the remainder
/// with leading colon/whitespace stripped, kept only if non-empty.
/// Strategy 2: a line that is exactly a label takes the following line
/// as its value, unless that line itself starts with a known label
/// (two stacked labels, not a label/value pair). Both strategies are
/// additive and never overwrite an earlier value.
pub fn extract_fields(lines: &[String]) -> FieldMap {
    let mut fields = FieldMap::new();
    let normalized: Vec<String> = lines.iter().map(|line| normalize(line)).collect();

    for (index, line) in lines.iter().enumerate() {
        if let Some((label, rest)) = leading_label(&normalized[index]) {
            // Take the value from the original line so casing survives.
            // Normalization maps characters one for one, so a char count
            // locates the label end even when a dash variant shrank.
            let consumed = normalized[index].chars().count() - rest.chars().count();
            let value: String = line.trim().chars().skip(consumed).collect();
            let value = value.trim_start_matches(':').trim().to_string();
            if !value.is_empty() {
                fields.entry(label).or_insert(value);
                continue;
            }
        }

        if let Some(label) = is_bare_label(&normalized[index]) {
            if let Some(next) = lines.get(index + 1) {
                if leading_label(&normalized[index + 1]).is_none() {
                    let value = next.trim().to_string();
                    if !value.is_empty() {
                        fields.entry(label).or_insert(value);
                    }
                }
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_prefix_match_with_colon() {
        let fields = extract_fields(&lines(&["Total Buy-In: $400", "Entry Fee: $50"]));
        assert_eq!(fields.get(&FieldLabel::TotalBuyIn).map(String::as_str), Some("$400"));
        assert_eq!(fields.get(&FieldLabel::EntryFee).map(String::as_str), Some("$50"));
    }

    #[test]
    fn test_prefix_match_requires_boundary() {
        // "Guaranteed $10K" must not become a "guarantee" value of "d $10K"
        let fields = extract_fields(&lines(&["Guaranteed $10K Prize Pool"]));
        assert!(fields.get(&FieldLabel::Guarantee).is_none());
    }

    #[test]
    fn test_dash_variants_normalized() {
        let fields = extract_fields(&lines(&["Re\u{2013}Entry: 1 allowed"]));
        assert_eq!(fields.get(&FieldLabel::ReEntry).map(String::as_str), Some("1 allowed"));
    }

    #[test]
    fn test_adjacent_line_pairing() {
        let fields = extract_fields(&lines(&["Starting Chips", "20,000"]));
        assert_eq!(
            fields.get(&FieldLabel::StartingChips).map(String::as_str),
            Some("20,000")
        );
    }

    #[test]
    fn test_adjacent_pairing_skips_stacked_labels() {
        // Two consecutive label lines: the second is not a value
        let fields = extract_fields(&lines(&["Starting Chips", "Entry Fee: $40"]));
        assert!(fields.get(&FieldLabel::StartingChips).is_none());
        assert_eq!(fields.get(&FieldLabel::EntryFee).map(String::as_str), Some("$40"));
    }

    #[test]
    fn test_first_writer_wins() {
        let fields = extract_fields(&lines(&["Guarantee: $10,000", "Guarantee: $99"]));
        assert_eq!(
            fields.get(&FieldLabel::Guarantee).map(String::as_str),
            Some("$10,000")
        );
    }

    #[test]
    fn test_alias_maps_to_same_label() {
        let fields = extract_fields(&lines(&["Starting Stack: 25K"]));
        assert_eq!(
            fields.get(&FieldLabel::StartingChips).map(String::as_str),
            Some("25K")
        );
    }

    #[test]
    fn test_empty_value_not_recorded() {
        let fields = extract_fields(&lines(&["Entry Fee:"]));
        assert!(fields.get(&FieldLabel::EntryFee).is_none());
    }
}

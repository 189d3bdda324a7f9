//! Scalar metadata resolution.
//!
//! Labeled fields are the trusted source; when a label is missing the
//! resolver falls back to regex scans over the photograph's full text.
//! Everything here is best-effort: a value that cannot be recovered
//! stays `None` in the descriptor.

use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::{FieldLabel, FieldMap};
use super::scalars::{parse_chip_count, parse_currency, parse_grouped_int};
use crate::descriptor::{GameVariant, ReentryPolicy, TournamentDescriptor};

/// "$150 + $30" style split printed without labels.
static BUYIN_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\s*(\d[\d,]*)\s*\+\s*\$?\s*(\d[\d,]*)").expect("valid regex"));

/// Bare "buy-in: $250" mention.
static BUYIN_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)buy-?in:?\s*\$\s*(\d[\d,]*)").expect("valid regex"));

/// "Starting chips: 20,000" / "starting stack 25K" in running text.
static STARTING_STACK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)starting\s+(?:chips|stack):?\s*(\d[\d,]*(?:\.\d+)?[km]?)\b")
        .expect("valid regex")
});

/// Guarantee written amount-first ("$100K GTD") or label-first
/// ("GTD: $100K"); amounts may carry a magnitude suffix.
static GTD_AMOUNT_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$\s*(\d[\d,.]*[km]?)\s*(?:gtd|guaranteed?)\b").expect("valid regex")
});
static GTD_LABEL_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:gtd|guaranteed?):?\s*\$\s*(\d[\d,.]*[km]?)\b").expect("valid regex")
});

/// Bounty, same two-sided search, plain dollar amounts.
static BOUNTY_AMOUNT_FIRST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\$\s*(\d[\d,]*)\s*bount").expect("valid regex"));
static BOUNTY_LABEL_FIRST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)bount(?:y|ies)?:?\s*\$\s*(\d[\d,]*)").expect("valid regex"));

/// "100/200" blind pair, in a field value or after a "blinds" mention.
static BLINDS_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d[\d,]*)\s*/\s*(\d[\d,]*)").expect("valid regex"));
static BLINDS_IN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)blinds:?\s*(\d[\d,]*)\s*/\s*(\d[\d,]*)").expect("valid regex"));

/// A "City, ST" line; the line above it is usually the venue.
static CITY_STATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z.' -]*,\s*[A-Z]{2}$").expect("valid regex"));

/// "at <Venue>" phrase; the capture enforces the 3-60 length window.
static AT_VENUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[Aa]t\s+([A-Z][A-Za-z0-9.'& -]{2,59})").expect("valid regex"));

/// Ordered game-variant rules; the first keyword hit wins. "no limit"
/// must run before "limit hold" or No Limit Hold'em reads as fixed
/// limit.
const GAME_RULES: &[(&[&str], GameVariant)] = &[
    (&["omaha", "plo"], GameVariant::PotLimitOmaha),
    (&["no limit", "no-limit", "nlh"], GameVariant::NoLimitHoldem),
    (&["limit hold", "fixed limit"], GameVariant::LimitHoldem),
    (&["hold'em", "holdem"], GameVariant::NoLimitHoldem),
    (&["mixed", "horse", "8-game"], GameVariant::MixedGame),
];

/// Ordered re-entry rules over the lower-cased field value.
const REENTRY_RULES: &[(&str, ReentryPolicy)] = &[
    ("unlim", ReentryPolicy::Unlimited),
    ("none", ReentryPolicy::None),
    ("0", ReentryPolicy::None),
    ("no", ReentryPolicy::None),
    ("1", ReentryPolicy::Single),
    ("2", ReentryPolicy::Double),
];

/// Fills the descriptor's scalar fields from the field map, falling
/// back to raw-text scans. `lines` are the chrome-filtered lines of the
/// photograph in reading order.
pub fn resolve_metadata(
    fields: &FieldMap,
    lines: &[String],
    descriptor: &mut TournamentDescriptor,
) {
    let full_text = fold_dashes(&lines.join("\n"));

    resolve_buyin(fields, &full_text, descriptor);

    descriptor.starting_chips = fields
        .get(&FieldLabel::StartingChips)
        .and_then(|value| parse_chip_count(value))
        .or_else(|| {
            STARTING_STACK
                .captures(&full_text)
                .and_then(|caps| parse_chip_count(&caps[1]))
        });

    descriptor.guarantee = fields
        .get(&FieldLabel::Guarantee)
        .and_then(|value| parse_chip_count(value))
        .or_else(|| first_capture(&[&GTD_AMOUNT_FIRST, &GTD_LABEL_FIRST], &full_text)
            .and_then(|amount| parse_chip_count(&amount)));

    descriptor.bounty = fields
        .get(&FieldLabel::BountyAmount)
        .and_then(|value| parse_currency(value))
        .or_else(|| first_capture(&[&BOUNTY_AMOUNT_FIRST, &BOUNTY_LABEL_FIRST], &full_text)
            .and_then(|amount| parse_currency(&amount)));

    descriptor.reentry = fields
        .get(&FieldLabel::ReEntry)
        .map(|value| normalize_reentry(value));

    descriptor.game_type = fields
        .get(&FieldLabel::GameType)
        .and_then(|value| classify_game(value))
        .or_else(|| classify_game(&full_text));

    descriptor.name = fields
        .get(&FieldLabel::EventName)
        .map(|value| value.clone())
        .or_else(|| {
            lines
                .iter()
                .map(|line| line.trim())
                .find(|line| line.chars().count() >= 5)
                .map(|line| line.to_string())
        });

    descriptor.venue = fields
        .get(&FieldLabel::Venue)
        .map(|value| value.clone())
        .or_else(|| venue_before_city_line(lines))
        .or_else(|| venue_from_at_phrase(&full_text));

    let blinds = fields
        .get(&FieldLabel::StartingBlinds)
        .and_then(|value| blind_pair(&BLINDS_PAIR, value))
        .or_else(|| blind_pair(&BLINDS_IN_TEXT, &full_text));
    if let Some((small, big)) = blinds {
        descriptor.starting_small_blind = Some(small);
        descriptor.starting_big_blind = Some(big);
    }
}

/// Buy-in / fee split policy, tried in order: explicit total with
/// deductions, explicit total with entry fee, explicit total alone,
/// "$X + $Y" in raw text, bare "buy-in: $X" in raw text.
fn resolve_buyin(fields: &FieldMap, full_text: &str, descriptor: &mut TournamentDescriptor) {
    let total = fields
        .get(&FieldLabel::TotalBuyIn)
        .and_then(|value| parse_currency(value));

    if let Some(total) = total {
        let deductions = fields
            .get(&FieldLabel::Deductions)
            .and_then(|value| parse_currency(value));
        let fee = fields
            .get(&FieldLabel::EntryFee)
            .and_then(|value| parse_currency(value));
        let (buy_in, entry_fee) = split_total(total, deductions, fee);
        descriptor.buy_in = Some(buy_in);
        descriptor.entry_fee = entry_fee;
        return;
    }

    if let Some(caps) = BUYIN_SPLIT.captures(full_text) {
        descriptor.buy_in = parse_grouped_int(&caps[1]);
        descriptor.entry_fee = parse_grouped_int(&caps[2]);
        return;
    }

    if let Some(caps) = BUYIN_BARE.captures(full_text) {
        descriptor.buy_in = parse_grouped_int(&caps[1]);
    }
}

fn split_total(total: i64, deductions: Option<i64>, fee: Option<i64>) -> (i64, Option<i64>) {
    if let Some(deducted) = deductions {
        if deducted > 0 && deducted < total {
            return (total - deducted, Some(deducted));
        }
    }
    if let Some(fee) = fee {
        if fee > 0 && fee < total {
            return (fee, Some(total - fee));
        }
    }
    (total, None)
}

fn classify_game(text: &str) -> Option<GameVariant> {
    let lower = text.to_lowercase();
    GAME_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, variant)| *variant)
}

fn normalize_reentry(raw: &str) -> ReentryPolicy {
    let lower = raw.trim().to_lowercase();
    REENTRY_RULES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, policy)| policy.clone())
        .unwrap_or_else(|| ReentryPolicy::Other(raw.trim().to_string()))
}

/// The line just above a "City, ST" line, when its length is plausible
/// for a venue name.
fn venue_before_city_line(lines: &[String]) -> Option<String> {
    lines.windows(2).find_map(|pair| {
        let candidate = pair[0].trim();
        let length = candidate.chars().count();
        if CITY_STATE.is_match(pair[1].trim()) && (3..=60).contains(&length) {
            Some(candidate.to_string())
        } else {
            None
        }
    })
}

fn venue_from_at_phrase(full_text: &str) -> Option<String> {
    AT_VENUE.captures(full_text).and_then(|caps| {
        let venue = caps[1].trim().to_string();
        (venue.chars().count() >= 3).then_some(venue)
    })
}

fn blind_pair(pattern: &Regex, text: &str) -> Option<(u32, u32)> {
    let caps = pattern.captures(text)?;
    let small = parse_grouped_int(&caps[1])?;
    let big = parse_grouped_int(&caps[2])?;
    Some((u32::try_from(small).ok()?, u32::try_from(big).ok()?))
}

fn first_capture(patterns: &[&Lazy<Regex>], text: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|pattern| pattern.captures(text).map(|caps| caps[1].to_string()))
}

fn fold_dashes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' => '-',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn resolve(texts: &[&str]) -> TournamentDescriptor {
        let lines = lines(texts);
        let fields = crate::extract::fields::extract_fields(&lines);
        let mut descriptor = TournamentDescriptor::default();
        resolve_metadata(&fields, &lines, &mut descriptor);
        descriptor
    }

    #[test]
    fn test_buyin_split_total_and_deductions() {
        let d = resolve(&["Total Buy-In: $400", "Deductions: $50"]);
        assert_eq!(d.buy_in, Some(350));
        assert_eq!(d.entry_fee, Some(50));
    }

    #[test]
    fn test_buyin_split_total_and_entry_fee() {
        let d = resolve(&["Total Buy-In: $400", "Entry Fee: $360"]);
        assert_eq!(d.buy_in, Some(360));
        assert_eq!(d.entry_fee, Some(40));
    }

    #[test]
    fn test_buyin_total_alone() {
        let d = resolve(&["Total Buy-In: $300"]);
        assert_eq!(d.buy_in, Some(300));
        assert_eq!(d.entry_fee, None);
    }

    #[test]
    fn test_buyin_out_of_range_fee_ignored() {
        // A "fee" not strictly inside (0, total) cannot split the total
        let d = resolve(&["Total Buy-In: $300", "Entry Fee: $300"]);
        assert_eq!(d.buy_in, Some(300));
        assert_eq!(d.entry_fee, None);
    }

    #[test]
    fn test_buyin_plus_pattern_fallback() {
        let d = resolve(&["Saturday Special $150 + $30"]);
        assert_eq!(d.buy_in, Some(150));
        assert_eq!(d.entry_fee, Some(30));
    }

    #[test]
    fn test_buyin_bare_pattern_fallback() {
        let d = resolve(&["Nightly Turbo Buy-in: $250 per player"]);
        assert_eq!(d.buy_in, Some(250));
        assert_eq!(d.entry_fee, None);
    }

    #[test]
    fn test_starting_chips_from_field_and_text() {
        assert_eq!(resolve(&["Starting Chips: 20,000"]).starting_chips, Some(20000));
        assert_eq!(
            resolve(&["Players receive a starting stack 25K in chips"]).starting_chips,
            Some(25000)
        );
    }

    #[test]
    fn test_guarantee_two_sided_patterns() {
        assert_eq!(resolve(&["Main Event $100K GTD"]).guarantee, Some(100000));
        assert_eq!(resolve(&["Guaranteed: $50,000 prize pool"]).guarantee, Some(50000));
        assert_eq!(resolve(&["Guarantee: $10,000"]).guarantee, Some(10000));
    }

    #[test]
    fn test_bounty_two_sided_patterns() {
        assert_eq!(resolve(&["Bounty Amount: $100"]).bounty, Some(100));
        assert_eq!(resolve(&["Knockout event, $50 bounty per player"]).bounty, Some(50));
        assert_eq!(resolve(&["Progressive bounties: $200 to start"]).bounty, Some(200));
    }

    #[test]
    fn test_reentry_normalization() {
        assert_eq!(
            resolve(&["Re-Entry: Unlimited through level 8"]).reentry,
            Some(ReentryPolicy::Unlimited)
        );
        assert_eq!(resolve(&["Re-Entry: none"]).reentry, Some(ReentryPolicy::None));
        assert_eq!(
            resolve(&["Re-Entry: 1 allowed"]).reentry,
            Some(ReentryPolicy::Single)
        );
        assert_eq!(
            resolve(&["Re-Entry: 2 per flight"]).reentry,
            Some(ReentryPolicy::Double)
        );
        assert_eq!(
            resolve(&["Re-Entry: see floor"]).reentry,
            Some(ReentryPolicy::Other("see floor".to_string()))
        );
        assert_eq!(resolve(&["Starting Chips: 20,000"]).reentry, None);
    }

    #[test]
    fn test_game_rule_order() {
        // "No Limit Hold'em" contains "limit hold"; the no-limit rule
        // must win
        assert_eq!(
            resolve(&["Game Type: No Limit Hold'em"]).game_type,
            Some(GameVariant::NoLimitHoldem)
        );
        assert_eq!(
            resolve(&["Game Type: Limit Hold'em"]).game_type,
            Some(GameVariant::LimitHoldem)
        );
        assert_eq!(
            resolve(&["Game Type: Pot Limit Omaha"]).game_type,
            Some(GameVariant::PotLimitOmaha)
        );
        assert_eq!(
            resolve(&["$240 PLO Bomb Pot Night"]).game_type,
            Some(GameVariant::PotLimitOmaha)
        );
        assert_eq!(
            resolve(&["HORSE rotation, limit betting"]).game_type,
            Some(GameVariant::MixedGame)
        );
    }

    #[test]
    fn test_name_explicit_field_wins() {
        let d = resolve(&["Friday Night Poker", "Event Name: Spring Classic #4"]);
        assert_eq!(d.name.as_deref(), Some("Spring Classic #4"));
    }

    #[test]
    fn test_name_first_substantial_line() {
        let d = resolve(&["Friday $400 Deepstack", "Starting Chips: 20,000"]);
        assert_eq!(d.name.as_deref(), Some("Friday $400 Deepstack"));
    }

    #[test]
    fn test_venue_from_city_state_line() {
        let d = resolve(&["Weekly Deepstack", "Lucky Chances Casino", "Colma, CA"]);
        assert_eq!(d.venue.as_deref(), Some("Lucky Chances Casino"));
    }

    #[test]
    fn test_venue_from_at_phrase() {
        // The capture runs to the end of the line
        let d = resolve(&["Summer Series at Bay 101", "Starts Friday evening"]);
        assert_eq!(d.venue.as_deref(), Some("Bay 101"));
    }

    #[test]
    fn test_starting_blinds_from_field() {
        let d = resolve(&["Starting Blinds: 100/200"]);
        assert_eq!(d.starting_small_blind, Some(100));
        assert_eq!(d.starting_big_blind, Some(200));
    }

    #[test]
    fn test_starting_blinds_from_text() {
        let d = resolve(&["Play begins with blinds 100/200 and a 30 minute clock"]);
        assert_eq!(d.starting_small_blind, Some(100));
        assert_eq!(d.starting_big_blind, Some(200));
    }
}

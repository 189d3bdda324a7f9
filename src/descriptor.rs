//! Tournament descriptor types.
//!
//! The structured result of scanning one or more photographs of a
//! tournament listing. Every scalar is optional: listings rarely show
//! everything, and a partially filled descriptor is still usable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the blind-level schedule, either a play level or a break.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindLevel {
    /// 1-based position in the schedule
    pub number: u32,
    /// Small blind in chips (0 for breaks)
    pub small_blind: u32,
    /// Big blind in chips (0 for breaks)
    pub big_blind: u32,
    /// Ante in chips, 0 when the level plays without one
    pub ante: u32,
    /// Level or break length in minutes
    pub minutes: u32,
    /// True for breaks; breaks carry no blinds
    pub is_break: bool,
    /// Label printed on the break row, e.g. "Break - End of Reg"
    pub break_label: Option<String>,
}

impl BlindLevel {
    /// A playing level. Callers are expected to have validated
    /// `big_blind >= small_blind > 0` and `1 <= minutes <= 120`.
    pub fn play(number: u32, small_blind: u32, big_blind: u32, ante: u32, minutes: u32) -> Self {
        BlindLevel {
            number,
            small_blind,
            big_blind,
            ante,
            minutes,
            is_break: false,
            break_label: None,
        }
    }

    /// A break row: no blinds, just a length and a label.
    pub fn rest(number: u32, minutes: u32, label: impl Into<String>) -> Self {
        BlindLevel {
            number,
            small_blind: 0,
            big_blind: 0,
            ante: 0,
            minutes,
            is_break: true,
            break_label: Some(label.into()),
        }
    }
}

/// Game variant shown on the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameVariant {
    NoLimitHoldem,
    PotLimitOmaha,
    LimitHoldem,
    MixedGame,
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameVariant::NoLimitHoldem => "No Limit Hold'em",
            GameVariant::PotLimitOmaha => "Pot Limit Omaha",
            GameVariant::LimitHoldem => "Limit Hold'em",
            GameVariant::MixedGame => "Mixed Game",
        };
        f.write_str(name)
    }
}

/// How many times a player may re-enter after busting.
///
/// Listings phrase this loosely; values that do not normalize to the
/// closed set are carried through verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReentryPolicy {
    None,
    Single,
    Double,
    Unlimited,
    Other(String),
}

impl fmt::Display for ReentryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReentryPolicy::None => f.write_str("None"),
            ReentryPolicy::Single => f.write_str("1 Re-entry"),
            ReentryPolicy::Double => f.write_str("2 Re-entries"),
            ReentryPolicy::Unlimited => f.write_str("Unlimited"),
            ReentryPolicy::Other(raw) => f.write_str(raw),
        }
    }
}

/// Everything recovered from the photographs of one listing.
///
/// Built empty per photograph, filled in by the extraction pipeline,
/// and possibly combined across photographs by the capture merger.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentDescriptor {
    /// Event name as printed on the listing
    pub name: Option<String>,
    /// Venue or card room name
    pub venue: Option<String>,
    /// Recognized game variant
    pub game_type: Option<GameVariant>,
    /// Portion of the total buy-in that goes to the prize pool, in dollars
    pub buy_in: Option<i64>,
    /// House fee portion of the buy-in, in dollars
    pub entry_fee: Option<i64>,
    /// Per-knockout bounty, in dollars
    pub bounty: Option<i64>,
    /// Guaranteed prize pool, in dollars
    pub guarantee: Option<i64>,
    /// Starting stack in chips
    pub starting_chips: Option<i64>,
    /// Re-entry rule shown on the listing
    pub reentry: Option<ReentryPolicy>,
    /// Small blind of the first level
    pub starting_small_blind: Option<u32>,
    /// Big blind of the first level
    pub starting_big_blind: Option<u32>,
    /// Ordered blind-level schedule, breaks included
    pub levels: Vec<BlindLevel>,
}

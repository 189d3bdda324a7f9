//! Capture merging.
//!
//! A user photographs a long structure sheet in overlapping sections,
//! often out of order. Each photograph resolves to its own descriptor;
//! merging folds them into one, keeping the first value seen for every
//! scalar and deduplicating the combined schedule.

use std::collections::HashSet;

use crate::descriptor::{BlindLevel, TournamentDescriptor};

/// Identity of a level for deduplication. Play levels match on their
/// blinds and ante; breaks match on label and length. A play level
/// never matches a break.
#[derive(PartialEq, Eq, Hash)]
enum LevelKey {
    Play {
        small_blind: u32,
        big_blind: u32,
        ante: u32,
    },
    Rest {
        label: Option<String>,
        minutes: u32,
    },
}

impl LevelKey {
    fn of(level: &BlindLevel) -> Self {
        if level.is_break {
            LevelKey::Rest {
                label: level.break_label.clone(),
                minutes: level.minutes,
            }
        } else {
            LevelKey::Play {
                small_blind: level.small_blind,
                big_blind: level.big_blind,
                ante: level.ante,
            }
        }
    }
}

/// Combines per-photograph descriptors, in the order supplied by the
/// caller, into one. A single capture passes through unchanged; scalar
/// conflicts resolve to the first photograph that provided a value.
pub fn merge_captures(mut captures: Vec<TournamentDescriptor>) -> TournamentDescriptor {
    if captures.len() <= 1 {
        return captures.pop().unwrap_or_default();
    }

    let mut merged = captures
        .into_iter()
        .reduce(merge_scalars)
        .unwrap_or_default();
    merged.levels = canonical_schedule(std::mem::take(&mut merged.levels));
    merged
}

/// First-non-null scalar merge; level lists concatenate for later
/// deduplication.
fn merge_scalars(
    first: TournamentDescriptor,
    second: TournamentDescriptor,
) -> TournamentDescriptor {
    let mut levels = first.levels;
    levels.extend(second.levels);
    TournamentDescriptor {
        name: first.name.or(second.name),
        venue: first.venue.or(second.venue),
        game_type: first.game_type.or(second.game_type),
        buy_in: first.buy_in.or(second.buy_in),
        entry_fee: first.entry_fee.or(second.entry_fee),
        bounty: first.bounty.or(second.bounty),
        guarantee: first.guarantee.or(second.guarantee),
        starting_chips: first.starting_chips.or(second.starting_chips),
        reentry: first.reentry.or(second.reentry),
        starting_small_blind: first.starting_small_blind.or(second.starting_small_blind),
        starting_big_blind: first.starting_big_blind.or(second.starting_big_blind),
        levels,
    }
}

/// Deduplicates the concatenated schedule, orders it by the level
/// numbers the photographs assigned, and renumbers densely from 1.
fn canonical_schedule(levels: Vec<BlindLevel>) -> Vec<BlindLevel> {
    let (mut unique, _) = levels.into_iter().fold(
        (Vec::new(), HashSet::new()),
        |(mut unique, mut seen), level| {
            if seen.insert(LevelKey::of(&level)) {
                unique.push(level);
            }
            (unique, seen)
        },
    );
    unique.sort_by_key(|level| level.number);
    unique
        .into_iter()
        .enumerate()
        .map(|(index, level)| BlindLevel {
            number: index as u32 + 1,
            ..level
        })
        .collect()
}

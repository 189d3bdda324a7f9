//! Tournament listing scanner.
//!
//! Turns photographed casino tournament-listing screens, already run
//! through text recognition, into a structured descriptor: buy-in and
//! fee split, starting stack, guarantee, bounty, re-entry policy, and
//! the ordered blind-level schedule. Multiple photographs of the same
//! listing merge into one result.

pub mod descriptor;
pub mod error;
pub mod extract;
pub mod layout;
pub mod merge;
pub mod ocr;

pub use descriptor::{BlindLevel, GameVariant, ReentryPolicy, TournamentDescriptor};
pub use error::ScanError;
pub use merge::merge_captures;
pub use ocr::{parse_fragments, scan_image, scan_images, NormalizedRect, TextFragment, TextRecognizer};

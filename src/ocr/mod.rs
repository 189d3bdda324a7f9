pub mod fragment;
pub mod recognizer;

pub use fragment::{NormalizedRect, TextFragment};
pub use recognizer::TextRecognizer;

use image::DynamicImage;
use log::debug;

use crate::descriptor::TournamentDescriptor;
use crate::error::ScanError;
use crate::extract::{extract_fields, interpret_schedule, resolve_metadata};
use crate::layout::{is_chrome_line, reconstruct_lines};
use crate::merge::merge_captures;

/// Runs the extraction pipeline over one photograph's fragments.
///
/// Total by design: rows that cannot be read are skipped and fields
/// that cannot be recovered stay empty, so the result is always a
/// usable (possibly sparse) descriptor.
pub fn parse_fragments(fragments: &[TextFragment]) -> TournamentDescriptor {
    let lines = reconstruct_lines(fragments);
    let content: Vec<String> = lines
        .into_iter()
        .filter(|line| !is_chrome_line(line))
        .collect();
    debug!(
        "scan: {} fragments -> {} content lines",
        fragments.len(),
        content.len()
    );

    let fields = extract_fields(&content);
    debug!("scan: {} labeled fields", fields.len());

    let mut descriptor = TournamentDescriptor::default();
    resolve_metadata(&fields, &content, &mut descriptor);
    descriptor.levels = interpret_schedule(&content);
    debug!("scan: {} schedule rows", descriptor.levels.len());

    // A listing with a schedule but no printed starting blinds still
    // has them: they are the first level's.
    if descriptor.starting_small_blind.is_none() {
        if let Some(first) = descriptor.levels.iter().find(|level| !level.is_break) {
            descriptor.starting_small_blind = Some(first.small_blind);
            descriptor.starting_big_blind = Some(first.big_blind);
        }
    }
    descriptor
}

/// Scans one photograph: recognize text, then parse the fragments.
pub fn scan_image(
    recognizer: &dyn TextRecognizer,
    image: &DynamicImage,
) -> Result<TournamentDescriptor, ScanError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ScanError::InvalidImage);
    }
    let fragments = recognizer.recognize(image)?;
    if fragments.is_empty() {
        return Err(ScanError::NoTextFound);
    }
    Ok(parse_fragments(&fragments))
}

/// Scans photographs of the same listing in caller order and merges
/// their descriptors. Fail-fast: the first photograph that cannot be
/// recognized aborts the whole scan with no partial result.
pub fn scan_images(
    recognizer: &dyn TextRecognizer,
    images: &[DynamicImage],
) -> Result<TournamentDescriptor, ScanError> {
    if images.is_empty() {
        return Err(ScanError::InvalidImage);
    }
    let mut captures = Vec::with_capacity(images.len());
    for image in images {
        captures.push(scan_image(recognizer, image)?);
    }
    Ok(merge_captures(captures))
}

//! Recognizer boundary.
//!
//! The pipeline never touches pixels itself; a `TextRecognizer`
//! implementation (Vision, Tesseract, a test stub) turns a decoded image
//! into positioned text fragments.

use image::DynamicImage;

use super::fragment::TextFragment;
use crate::error::ScanError;

/// Turns a decoded photograph into recognized text fragments.
///
/// Implementations should map their platform failure into
/// `ScanError::OcrFailed` and may return an empty list when the
/// photograph contains no text; the caller turns that into
/// `ScanError::NoTextFound`.
pub trait TextRecognizer {
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<TextFragment>, ScanError>;
}

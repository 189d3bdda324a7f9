//! Error type for the scanning entry points.
//!
//! The extraction stages themselves are total: unreadable rows are
//! skipped and missing fields stay empty. Only the recognizer boundary
//! and the multi-photograph orchestration can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The input is unusable for recognition (zero-sized image, empty
    /// photograph list). Not a parsing failure.
    #[error("image is unusable for text recognition")]
    InvalidImage,

    /// The platform recognizer reported a failure of its own.
    #[error("text recognition failed")]
    OcrFailed(#[source] anyhow::Error),

    /// Recognition ran but the photograph contained no text at all.
    #[error("no text found in image")]
    NoTextFound,

    /// Reserved for structural validation of parsed descriptors.
    #[error("recognized text could not be parsed")]
    ParsingFailed,
}

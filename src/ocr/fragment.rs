//! Recognized-text input model.
//!
//! Fragments are produced by the platform recognizer and consumed by the
//! layout stage. Coordinates are normalized so the pipeline never needs
//! the pixel dimensions of the photograph.

use serde::{Deserialize, Serialize};

/// A rectangle in normalized coordinates (0.0 to 1.0 on both axes).
///
/// The origin sits at the bottom-left of the page, so a larger `y`
/// means higher on the page.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct NormalizedRect {
    /// X position of the left edge (0.0 = left edge of the page)
    pub x: f32,
    /// Y position of the bottom edge (0.0 = bottom of the page)
    pub y: f32,
    /// Width as a fraction of page width
    pub width: f32,
    /// Height as a fraction of page height
    pub height: f32,
}

impl NormalizedRect {
    /// Vertical center of the box; used to group fragments into rows.
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// One recognized run of text and where it sits on the page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    pub bounds: NormalizedRect,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        TextFragment {
            text: text.into(),
            bounds: NormalizedRect {
                x,
                y,
                width,
                height,
            },
        }
    }
}

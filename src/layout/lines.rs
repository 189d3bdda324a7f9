//! Row reconstruction from fragment geometry.
//!
//! The recognizer reports cell-level fragments in no particular order.
//! Grouping by vertical center rebuilds the printed rows without
//! assuming any column grid.

use crate::ocr::TextFragment;

/// Fragments whose vertical centers sit within this fraction of the page
/// height of a row's running average belong to the same row.
const ROW_TOLERANCE: f32 = 0.01;

/// A row being accumulated, plus the running average of its centers.
struct OpenRow<'a> {
    fragments: Vec<&'a TextFragment>,
    average_y: f32,
}

impl<'a> OpenRow<'a> {
    fn start(fragment: &'a TextFragment) -> Self {
        OpenRow {
            average_y: fragment.bounds.center_y(),
            fragments: vec![fragment],
        }
    }

    fn accepts(&self, fragment: &TextFragment) -> bool {
        (fragment.bounds.center_y() - self.average_y).abs() <= ROW_TOLERANCE
    }

    fn push(mut self, fragment: &'a TextFragment) -> Self {
        self.fragments.push(fragment);
        let sum: f32 = self.fragments.iter().map(|f| f.bounds.center_y()).sum();
        self.average_y = sum / self.fragments.len() as f32;
        self
    }

    /// Close the row: left-to-right order, texts joined with spaces.
    fn close(mut self) -> String {
        self.fragments
            .sort_by(|a, b| a.bounds.x.total_cmp(&b.bounds.x));
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Groups fragments into reading-order rows, top of the page first.
///
/// Fragments are sorted by vertical center descending (larger `y` is
/// higher on the page), then folded into rows: a fragment joins the
/// current row while its center stays within `ROW_TOLERANCE` of the
/// row's running average center, otherwise the row closes and a new one
/// starts. A single stray fragment still yields a one-fragment row.
pub fn reconstruct_lines(fragments: &[TextFragment]) -> Vec<String> {
    let mut ordered: Vec<&TextFragment> = fragments.iter().collect();
    ordered.sort_by(|a, b| b.bounds.center_y().total_cmp(&a.bounds.center_y()));

    let (mut lines, open) = ordered.into_iter().fold(
        (Vec::new(), None::<OpenRow>),
        |(mut lines, open), fragment| match open {
            None => (lines, Some(OpenRow::start(fragment))),
            Some(row) if row.accepts(fragment) => (lines, Some(row.push(fragment))),
            Some(row) => {
                lines.push(row.close());
                (lines, Some(OpenRow::start(fragment)))
            }
        },
    );
    if let Some(row) = open {
        lines.push(row.close());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, x: f32, y: f32) -> TextFragment {
        TextFragment::new(text, x, y, 0.1, 0.02)
    }

    #[test]
    fn test_single_fragment_single_row() {
        let lines = reconstruct_lines(&[frag("Hello", 0.1, 0.5)]);
        assert_eq!(lines, vec!["Hello"]);
    }

    #[test]
    fn test_rows_ordered_top_to_bottom() {
        // Larger y is higher on the page
        let fragments = vec![
            frag("bottom", 0.1, 0.10),
            frag("top", 0.1, 0.90),
            frag("middle", 0.1, 0.50),
        ];
        let lines = reconstruct_lines(&fragments);
        assert_eq!(lines, vec!["top", "middle", "bottom"]);
    }

    #[test]
    fn test_row_fragments_ordered_left_to_right() {
        let fragments = vec![
            frag("1,000", 0.6, 0.500),
            frag("Level", 0.1, 0.502),
            frag("500", 0.4, 0.498),
        ];
        let lines = reconstruct_lines(&fragments);
        assert_eq!(lines, vec!["Level 500 1,000"]);
    }

    #[test]
    fn test_tolerance_splits_adjacent_rows() {
        let fragments = vec![
            frag("row one", 0.1, 0.500),
            frag("row two", 0.1, 0.470),
        ];
        let lines = reconstruct_lines(&fragments);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_line_count_never_exceeds_fragment_count() {
        let fragments: Vec<TextFragment> = (0..20)
            .map(|i| frag("x", 0.1, 0.05 + (i as f32) * 0.011))
            .collect();
        let lines = reconstruct_lines(&fragments);
        assert!(lines.len() <= fragments.len());
        assert!(!lines.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(reconstruct_lines(&[]).is_empty());
    }
}

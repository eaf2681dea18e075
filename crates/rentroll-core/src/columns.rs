//! Wall-based column inference for documents without visible column rules.
//!
//! Columns are inferred from one reference page's header row: a "wall" is
//! placed at the midpoint between each header label's right edge and the next
//! label's left edge. The midpoint tolerates header text that is not
//! left-aligned to its data column, which is the common case in unruled
//! reports.

use crate::error::ExtractError;
use crate::words::Word;

/// Options for wall-based column inference.
#[derive(Debug, Clone, PartialEq)]
pub struct WallOptions {
    /// Substring identifying the header row's anchor word.
    pub anchor_text: String,
    /// Maximum distance between a word's `top` and the anchor's `top` for the
    /// word to count as part of the header row.
    pub header_tolerance: f64,
}

impl Default for WallOptions {
    fn default() -> Self {
        Self {
            anchor_text: "Occupant".to_string(),
            header_tolerance: 3.0,
        }
    }
}

/// A named column interval `[x_start, x_end)` in page coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDef {
    pub name: String,
    pub x_start: f64,
    pub x_end: f64,
}

impl ColumnDef {
    /// Check whether an x coordinate falls inside this column's half-open
    /// interval.
    pub fn contains(&self, x: f64) -> bool {
        self.x_start <= x && x < self.x_end
    }
}

/// Result of wall-based inference on the reference page.
///
/// Carries everything downstream stages need: the column intervals for word
/// assignment, the header extent for separating data words, and the raw
/// header words and wall positions for the diagnostic trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Columns ordered left to right; together they partition
    /// `[0, page_width]`.
    pub columns: Vec<ColumnDef>,
    /// Wall positions between adjacent columns (`columns.len() - 1` entries).
    pub walls: Vec<f64>,
    /// Header words sorted left to right.
    pub header_words: Vec<Word>,
    /// `top` of the anchor word.
    pub header_top: f64,
    /// `bottom` of the anchor word; data words start below this.
    pub header_bottom: f64,
}

/// Infer column boundaries from the header row of a reference page.
///
/// Finds the first word containing `options.anchor_text`, collects all words
/// within `header_tolerance` of its `top` as the header row, and places a
/// wall at the midpoint of each adjacent header pair. The first column starts
/// at 0 and the last ends at `page_width`.
///
/// A single header word yields zero walls and one column spanning the full
/// page width. Returns [`ExtractError::HeaderNotFound`] if no word on the
/// page contains the anchor substring.
pub fn infer_columns(
    words: &[Word],
    page_width: f64,
    page_number: usize,
    options: &WallOptions,
) -> Result<ColumnLayout, ExtractError> {
    let anchor = words
        .iter()
        .find(|w| w.text.contains(&options.anchor_text))
        .ok_or_else(|| ExtractError::HeaderNotFound {
            anchor: options.anchor_text.clone(),
            page: page_number,
        })?;

    let header_top = anchor.bbox.top;
    let header_bottom = anchor.bbox.bottom;

    let mut header_words: Vec<Word> = words
        .iter()
        .filter(|w| (w.bbox.top - header_top).abs() < options.header_tolerance)
        .cloned()
        .collect();
    header_words.sort_by(|a, b| a.bbox.x0.partial_cmp(&b.bbox.x0).unwrap());

    // Wall between each adjacent header pair: midpoint of the gap between
    // the left label's right edge and the right label's left edge.
    let walls: Vec<f64> = header_words
        .windows(2)
        .map(|pair| (pair[0].bbox.x1 + pair[1].bbox.x0) / 2.0)
        .collect();

    let last = header_words.len() - 1;
    let columns: Vec<ColumnDef> = header_words
        .iter()
        .enumerate()
        .map(|(i, hw)| ColumnDef {
            name: hw.text.clone(),
            x_start: if i == 0 { 0.0 } else { walls[i - 1] },
            x_end: if i == last { page_width } else { walls[i] },
        })
        .collect();

    Ok(ColumnLayout {
        columns,
        walls,
        header_words,
        header_top,
        header_bottom,
    })
}

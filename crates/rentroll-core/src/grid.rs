//! Grid boundary detection and cell text extraction for ruled documents.
//!
//! Ruled tables expose exact cell rectangles from line geometry: vertical
//! ruling lines in the header band give the column boundaries (fixed for the
//! whole document), and full-width horizontal ruling lines give each page's
//! row boundaries. No midpoint heuristic is needed.

use crate::edges::{Edge, Orientation};
use crate::geometry::BBox;
use crate::words::Word;

/// Options for grid-line boundary detection.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    /// Inclusive `top` range a vertical edge must start in to count as a
    /// column boundary (the header band of the reference page).
    pub header_band: (f64, f64),
    /// Minimum width of a horizontal edge to count as a row boundary.
    /// Excludes partial decorative lines.
    pub min_row_width: f64,
    /// Two boundary positions closer than this collapse into one.
    pub merge_tolerance: f64,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            header_band: (90.0, 95.0),
            min_row_width: 600.0,
            merge_tolerance: 5.0,
        }
    }
}

/// Detect column boundary x-positions from a reference page's edges.
///
/// Vertical edges whose `top` falls within the header band are taken as
/// column rules; their `x0` values are sorted and deduplicated. `N`
/// boundaries yield `N - 1` columns.
pub fn column_boundaries(edges: &[Edge], options: &GridOptions) -> Vec<f64> {
    let (band_lo, band_hi) = options.header_band;
    let mut xs: Vec<f64> = edges
        .iter()
        .filter(|e| e.orientation == Orientation::Vertical)
        .filter(|e| band_lo <= e.top && e.top <= band_hi)
        .map(|e| e.x0)
        .collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    merge_close(&xs, options.merge_tolerance)
}

/// Detect row boundary y-positions from one page's edges.
///
/// Horizontal edges wider than `min_row_width` are taken as row rules; their
/// `top` values are sorted and deduplicated. Fewer than two boundaries mean
/// the page has no extractable rows.
pub fn row_boundaries(edges: &[Edge], options: &GridOptions) -> Vec<f64> {
    let mut ys: Vec<f64> = edges
        .iter()
        .filter(|e| e.orientation == Orientation::Horizontal)
        .filter(|e| e.width() > options.min_row_width)
        .map(|e| e.top)
        .collect();
    ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
    merge_close(&ys, options.merge_tolerance)
}

/// Collapse sorted positions closer than `tolerance`, keeping the first
/// value of each cluster.
fn merge_close(sorted: &[f64], tolerance: f64) -> Vec<f64> {
    let mut unique: Vec<f64> = Vec::new();
    for &v in sorted {
        match unique.last() {
            Some(&last) if v - last <= tolerance => {}
            _ => unique.push(v),
        }
    }
    unique
}

/// Extract the text of one cell by spatial cropping.
///
/// Takes the words whose bbox center lies inside `region`, orders them
/// top-to-bottom then left-to-right, and joins them with single spaces,
/// collapsing any internal line structure. An empty region yields an empty
/// string; this never fails.
pub fn cell_text(words: &[Word], region: &BBox) -> String {
    let mut inside: Vec<&Word> = words
        .iter()
        .filter(|w| {
            let (cx, cy) = w.bbox.center();
            region.contains_point(cx, cy)
        })
        .collect();
    inside.sort_by(|a, b| {
        a.bbox
            .top
            .partial_cmp(&b.bbox.top)
            .unwrap()
            .then(a.bbox.x0.partial_cmp(&b.bbox.x0).unwrap())
    });
    let joined = inside
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    joined.trim().to_string()
}

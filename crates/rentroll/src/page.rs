//! Page type carrying one page's geometry.

use rentroll_core::{BBox, Edge, Orientation, Word, cell_text};

/// A single page of a rent roll document.
///
/// Holds the positioned words and ruling-line edges produced by the geometry
/// provider for this page. Read-only for the duration of an extraction run.
#[derive(Debug)]
pub struct Page {
    /// Page index (0-based).
    page_number: usize,
    /// Page width in points.
    width: f64,
    /// Page height in points.
    height: f64,
    /// Words on this page.
    words: Vec<Word>,
    /// Ruling-line edges on this page.
    edges: Vec<Edge>,
}

impl Page {
    /// Create a new page from provider geometry.
    pub fn new(
        page_number: usize,
        width: f64,
        height: f64,
        words: Vec<Word>,
        edges: Vec<Edge>,
    ) -> Self {
        Self {
            page_number,
            width,
            height,
            words,
            edges,
        }
    }

    /// Returns the page index (0-based).
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Returns the page width in points.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the page height in points.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the words on this page.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the ruling-line edges on this page.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the vertical ruling edges on this page.
    pub fn vertical_edges(&self) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| e.orientation == Orientation::Vertical)
            .collect()
    }

    /// Returns the horizontal ruling edges on this page.
    pub fn horizontal_edges(&self) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| e.orientation == Orientation::Horizontal)
            .collect()
    }

    /// Extract the text inside a rectangular region of this page.
    ///
    /// Words whose bbox center lies inside the region are joined in reading
    /// order with internal line breaks collapsed to spaces. Never fails; an
    /// empty region yields an empty string.
    pub fn crop_text(&self, region: &BBox) -> String {
        cell_text(&self.words, region)
    }
}

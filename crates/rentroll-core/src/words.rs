use crate::geometry::BBox;

/// A positioned word supplied by the document-geometry provider.
///
/// One `Word` per visible token on a page. Words are read-only input to the
/// inference algorithms; they are never synthesized or modified here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// The text content of this word.
    pub text: String,
    /// Bounding box in page coordinates.
    pub bbox: BBox,
}

impl Word {
    pub fn new(text: impl Into<String>, x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            text: text.into(),
            bbox: BBox::new(x0, top, x1, bottom),
        }
    }
}

//! Ruling-line edges supplied by the document-geometry provider.
//!
//! Edges delimit table rows and columns directly in ruled documents and are
//! the input to the grid boundary detection in [`crate::grid`].

/// Orientation of a ruling line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight ruling-line segment in page coordinates.
///
/// Horizontal edges have `top == bottom`; vertical edges have `x0 == x1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Left x coordinate.
    pub x0: f64,
    /// Top y coordinate (distance from top of page).
    pub top: f64,
    /// Right x coordinate.
    pub x1: f64,
    /// Bottom y coordinate (distance from top of page).
    pub bottom: f64,
    /// Edge orientation.
    pub orientation: Orientation,
}

impl Edge {
    /// Horizontal extent of the edge.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Vertical extent of the edge.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Construct a horizontal edge spanning `[x0, x1]` at height `top`.
    pub fn horizontal(x0: f64, x1: f64, top: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom: top,
            orientation: Orientation::Horizontal,
        }
    }

    /// Construct a vertical edge spanning `[top, bottom]` at `x0`.
    pub fn vertical(x0: f64, top: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1: x0,
            bottom,
            orientation: Orientation::Vertical,
        }
    }
}

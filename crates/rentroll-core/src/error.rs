//! Error types for rent roll extraction.
//!
//! Every failure is either fatal for the whole run (no partial table) or
//! recovered at the smallest scope: a single cell whose text cannot be
//! extracted degrades to an empty string and never surfaces here.

use std::fmt;

/// Fatal extraction errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// The reference page lacks the expected header anchor word.
    ///
    /// No fallback page is attempted; the run produces no table.
    HeaderNotFound {
        /// Anchor substring that was searched for.
        anchor: String,
        /// 0-indexed reference page that was searched.
        page: usize,
    },
    /// The designated reference page is beyond the end of the document.
    PageOutOfRange {
        /// 0-indexed page that was requested.
        page: usize,
        /// Number of pages in the document.
        page_count: usize,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::HeaderNotFound { anchor, page } => {
                write!(f, "header row not found: no word containing {anchor:?} on page {page}")
            }
            ExtractError::PageOutOfRange { page, page_count } => {
                write!(f, "page {page} out of range (document has {page_count} pages)")
            }
        }
    }
}

impl std::error::Error for ExtractError {}

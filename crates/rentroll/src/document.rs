//! Document handle over an ordered sequence of pages.

use rentroll_core::ExtractError;

use crate::page::Page;

/// A rent roll document: pages in reading order.
///
/// Pages are supplied by the geometry provider. With the `serde` feature a
/// document can also be loaded from a geometry dump — the JSON shape the
/// provider emits, one object per page with flat word and edge records.
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// Create a document from pages, in order.
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Access a page by 0-based index.
    pub fn page(&self, index: usize) -> Result<&Page, ExtractError> {
        self.pages.get(index).ok_or(ExtractError::PageOutOfRange {
            page: index,
            page_count: self.pages.len(),
        })
    }

    /// Iterate pages in order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }
}

#[cfg(feature = "serde")]
mod dump {
    //! Geometry dump deserialization.
    //!
    //! The dump is the flat per-token shape emitted by the upstream geometry
    //! provider: `{"pages": [{"width", "height", "words": [{"text", "x0",
    //! "top", "x1", "bottom"}], "edges": [{"orientation", "x0", "top", "x1",
    //! "bottom"}]}]}`.

    use rentroll_core::{Edge, Orientation, Word};
    use serde::Deserialize;

    use super::Document;
    use crate::page::Page;

    #[derive(Debug, Deserialize)]
    struct DocumentDump {
        pages: Vec<PageDump>,
    }

    #[derive(Debug, Deserialize)]
    struct PageDump {
        width: f64,
        height: f64,
        #[serde(default)]
        words: Vec<WordDump>,
        #[serde(default)]
        edges: Vec<EdgeDump>,
    }

    #[derive(Debug, Deserialize)]
    struct WordDump {
        text: String,
        x0: f64,
        top: f64,
        x1: f64,
        bottom: f64,
    }

    #[derive(Debug, Deserialize)]
    struct EdgeDump {
        orientation: Orientation,
        x0: f64,
        top: f64,
        x1: f64,
        bottom: f64,
    }

    impl Document {
        /// Load a document from a geometry dump read from `reader`.
        pub fn from_json_reader(reader: impl std::io::Read) -> Result<Self, serde_json::Error> {
            let dump: DocumentDump = serde_json::from_reader(reader)?;
            Ok(Self::from_dump(dump))
        }

        /// Load a document from in-memory geometry dump bytes.
        pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
            let dump: DocumentDump = serde_json::from_slice(bytes)?;
            Ok(Self::from_dump(dump))
        }

        fn from_dump(dump: DocumentDump) -> Self {
            let pages = dump
                .pages
                .into_iter()
                .enumerate()
                .map(|(i, p)| {
                    let words = p
                        .words
                        .into_iter()
                        .map(|w| Word::new(w.text, w.x0, w.top, w.x1, w.bottom))
                        .collect();
                    let edges = p
                        .edges
                        .into_iter()
                        .map(|e| Edge {
                            x0: e.x0,
                            top: e.top,
                            x1: e.x1,
                            bottom: e.bottom,
                            orientation: e.orientation,
                        })
                        .collect();
                    Page::new(i, p.width, p.height, words, edges)
                })
                .collect();
            Self::new(pages)
        }
    }
}

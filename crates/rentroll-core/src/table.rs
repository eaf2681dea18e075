//! Final table assembly.
//!
//! Converts the cleaned row/column structure into the column-name-keyed
//! result shape that callers consume, plus run metadata.

use std::collections::BTreeMap;

use crate::columns::ColumnLayout;

/// Diagnostic trace of a wall-based inference run.
///
/// Formatted strings describing the header words, wall positions, and column
/// intervals, for debugging the inference step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallTrace {
    pub header_words: Vec<String>,
    pub walls: Vec<String>,
    pub column_defs: Vec<String>,
}

impl WallTrace {
    /// Build a trace from an inference result.
    pub fn from_layout(layout: &ColumnLayout) -> Self {
        Self {
            header_words: layout
                .header_words
                .iter()
                .map(|w| format!("{} [x0:{:.1}, x1:{:.1}]", w.text, w.bbox.x0, w.bbox.x1))
                .collect(),
            walls: layout.walls.iter().map(|w| format!("{w:.1}")).collect(),
            column_defs: layout
                .columns
                .iter()
                .map(|c| format!("{}: {:.1}-{:.1}", c.name, c.x_start, c.x_end))
                .collect(),
        }
    }
}

/// Run metadata attached to every table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableMeta {
    /// Number of pages in the source document.
    pub pages: usize,
    /// Number of emitted data rows.
    pub total_rows: usize,
    /// Wall-pipeline diagnostic trace, when available.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub debug: Option<WallTrace>,
}

/// The final extraction result.
///
/// `rows` are keyed by column name with keys drawn from `columns`. This is
/// the only externally visible artifact of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Column names, ordered left to right.
    pub columns: Vec<String>,
    /// One mapping per data row.
    pub rows: Vec<BTreeMap<String, String>>,
    /// Run metadata.
    pub meta: TableMeta,
}

impl Table {
    /// Assemble a table from column names and positional rows.
    ///
    /// Positions missing from a row default to the empty string. Duplicate
    /// column names are not deduplicated: a later duplicate silently
    /// overwrites the earlier entry in each row mapping.
    pub fn from_rows(
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
        pages: usize,
        debug: Option<WallTrace>,
    ) -> Self {
        let total_rows = rows.len();
        let rows = rows
            .into_iter()
            .map(|row| {
                columns
                    .iter()
                    .enumerate()
                    .map(|(i, name)| (name.clone(), row.get(i).cloned().unwrap_or_default()))
                    .collect()
            })
            .collect();
        Self {
            columns,
            rows,
            meta: TableMeta {
                pages,
                total_rows,
                debug,
            },
        }
    }

    /// An empty table (no columns, no rows) with the given page count.
    pub fn empty(pages: usize) -> Self {
        Self::from_rows(Vec::new(), Vec::new(), pages, None)
    }
}

//! Grid-based extraction pipeline for ruled multifamily rent rolls.

use rentroll_core::{BBox, ExtractError, GridOptions, Table, column_boundaries, merge_spillover,
    row_boundaries};

use crate::document::Document;

/// Options for the multifamily (grid-based) pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct MultifamilyOptions {
    /// 0-based page whose vertical ruling lines establish the columns.
    pub reference_page: usize,
    /// Grid boundary detection options.
    pub grid: GridOptions,
}

impl Default for MultifamilyOptions {
    fn default() -> Self {
        Self {
            reference_page: 0,
            grid: GridOptions::default(),
        }
    }
}

/// Extract a rent roll table from a document with visible ruling lines.
///
/// Column boundaries come once from the reference page's vertical rules in
/// the header band; row boundaries are recomputed per page from full-width
/// horizontal rules, because pagination legitimately varies the number of
/// data rows per page. Each cell's text is extracted by spatial cropping;
/// a failed or empty cell degrades to an empty string. Rows split across a
/// page or ruling boundary are folded back into their parent row, and the
/// first detected row provides the column names.
///
/// Pages with fewer than two row boundaries are skipped. A reference page
/// with fewer than two column boundaries yields the empty table.
pub fn extract_multifamily(
    doc: &Document,
    options: &MultifamilyOptions,
) -> Result<Table, ExtractError> {
    let reference = doc.page(options.reference_page)?;
    let xs = column_boundaries(reference.edges(), &options.grid);
    if xs.len() < 2 {
        return Ok(Table::empty(doc.page_count()));
    }

    let mut raw_rows = Vec::new();
    for page in doc.pages() {
        let ys = row_boundaries(page.edges(), &options.grid);
        if ys.len() < 2 {
            continue;
        }
        for y_pair in ys.windows(2) {
            let row: Vec<String> = xs
                .windows(2)
                .map(|x_pair| {
                    let cell = BBox::new(x_pair[0], y_pair[0], x_pair[1], y_pair[1]);
                    page.crop_text(&cell)
                })
                .collect();
            raw_rows.push(row);
        }
    }

    let merged = merge_spillover(raw_rows);
    let mut rows = merged.into_iter();
    let Some(columns) = rows.next() else {
        return Ok(Table::empty(doc.page_count()));
    };

    Ok(Table::from_rows(columns, rows.collect(), doc.page_count(), None))
}

//! Wall-based extraction pipeline for unruled commercial retail rent rolls.

use rentroll_core::{
    AssignOptions, ExtractError, Table, WallOptions, WallTrace, assign_rows, drop_repeated_headers,
    infer_columns,
};

use crate::document::Document;

/// Options for the commercial retail (wall-based) pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RetailOptions {
    /// 0-based page whose header row establishes the column boundaries.
    pub reference_page: usize,
    /// Wall inference options.
    pub wall: WallOptions,
    /// Word-to-cell assignment options.
    pub assign: AssignOptions,
}

impl Default for RetailOptions {
    fn default() -> Self {
        Self {
            // The title block usually occupies the opening pages; page 3 is
            // the first with a clean header row in these reports.
            reference_page: 2,
            wall: WallOptions::default(),
            assign: AssignOptions::default(),
        }
    }
}

/// Extract a rent roll table from a document without visible gridlines.
///
/// Infers column boundaries from the reference page's header row via wall
/// inference, assigns every page's data words to (row, column), filters
/// noise and repeated-header rows, and assembles the result. Rows are
/// emitted independently: this pipeline performs no cross-row spillover
/// merging.
///
/// Fatal errors: the reference page is out of range, or its header anchor
/// word is missing. No partial table is returned on failure.
pub fn extract_commercial_retail(
    doc: &Document,
    options: &RetailOptions,
) -> Result<Table, ExtractError> {
    let reference = doc.page(options.reference_page)?;
    let layout = infer_columns(
        reference.words(),
        reference.width(),
        options.reference_page,
        &options.wall,
    )?;

    let mut all_rows = Vec::new();
    for page in doc.pages() {
        all_rows.extend(assign_rows(page.words(), &layout, &options.assign));
    }

    let columns: Vec<String> = layout.columns.iter().map(|c| c.name.clone()).collect();
    let rows = drop_repeated_headers(all_rows, &columns[0]);

    let trace = WallTrace::from_layout(&layout);
    Ok(Table::from_rows(columns, rows, doc.page_count(), Some(trace)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use rentroll_core::Word;

    fn header_words(top: f64) -> Vec<Word> {
        vec![
            Word::new("Unit", 10.0, top, 40.0, top + 12.0),
            Word::new("Occupant", 100.0, top, 160.0, top + 12.0),
            Word::new("Rent", 300.0, top, 330.0, top + 12.0),
        ]
    }

    fn data_row(unit: &str, name: &str, rent: &str, top: f64) -> Vec<Word> {
        vec![
            Word::new(unit, 12.0, top, 35.0, top + 12.0),
            Word::new(name, 102.0, top, 150.0, top + 12.0),
            Word::new(rent, 305.0, top, 330.0, top + 12.0),
        ]
    }

    fn single_page_doc(words: Vec<Word>) -> Document {
        Document::new(vec![Page::new(0, 612.0, 792.0, words, Vec::new())])
    }

    fn options_for_page_0() -> RetailOptions {
        RetailOptions {
            reference_page: 0,
            ..RetailOptions::default()
        }
    }

    #[test]
    fn test_end_to_end_single_page() {
        let mut words = header_words(100.0);
        words.extend(data_row("101", "Acme", "1200", 130.0));
        words.extend(data_row("102", "Baker", "950", 150.0));
        let table = extract_commercial_retail(&single_page_doc(words), &options_for_page_0())
            .unwrap();

        assert_eq!(table.columns, vec!["Unit", "Occupant", "Rent"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["Unit"], "101");
        assert_eq!(table.rows[0]["Occupant"], "Acme");
        assert_eq!(table.rows[1]["Rent"], "950");
        assert_eq!(table.meta.pages, 1);
        assert_eq!(table.meta.total_rows, 2);
    }

    #[test]
    fn test_debug_trace_attached() {
        let table = extract_commercial_retail(
            &single_page_doc(header_words(100.0)),
            &options_for_page_0(),
        )
        .unwrap();
        let trace = table.meta.debug.unwrap();
        assert_eq!(trace.header_words.len(), 3);
        assert_eq!(trace.walls.len(), 2);
        assert_eq!(trace.column_defs.len(), 3);
    }

    #[test]
    fn test_repeated_header_on_later_page_dropped() {
        let mut p0 = header_words(100.0);
        p0.extend(data_row("101", "Acme", "1200", 130.0));
        // Later page reprints the header lower on the page, past the data
        // margin, so it shows up as a candidate row.
        let mut p1 = header_words(130.0);
        p1.extend(data_row("201", "Cole", "800", 160.0));
        let doc = Document::new(vec![
            Page::new(0, 612.0, 792.0, p0, Vec::new()),
            Page::new(1, 612.0, 792.0, p1, Vec::new()),
        ]);
        let table = extract_commercial_retail(&doc, &options_for_page_0()).unwrap();
        assert_eq!(table.meta.pages, 2);
        let units: Vec<&str> = table.rows.iter().map(|r| r["Unit"].as_str()).collect();
        assert_eq!(units, vec!["101", "201"]);
    }

    #[test]
    fn test_no_cross_row_merge() {
        // A continuation row with empty Unit stays its own row here.
        let mut words = header_words(100.0);
        words.extend(data_row("101", "Acme", "1200", 130.0));
        words.push(Word::new("incl.", 305.0, 150.0, 330.0, 162.0));
        let table = extract_commercial_retail(&single_page_doc(words), &options_for_page_0())
            .unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1]["Unit"], "");
        assert_eq!(table.rows[1]["Rent"], "incl.");
    }

    #[test]
    fn test_page_footer_filtered() {
        let mut words = header_words(100.0);
        words.extend(data_row("101", "Acme", "1200", 130.0));
        words.push(Word::new("Page", 12.0, 700.0, 40.0, 712.0));
        words.push(Word::new("3", 44.0, 700.0, 50.0, 712.0));
        let table = extract_commercial_retail(&single_page_doc(words), &options_for_page_0())
            .unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_missing_header_is_fatal() {
        let words = data_row("101", "Acme", "1200", 130.0);
        let err = extract_commercial_retail(&single_page_doc(words), &options_for_page_0())
            .unwrap_err();
        assert!(matches!(err, ExtractError::HeaderNotFound { page: 0, .. }));
    }

    #[test]
    fn test_reference_page_out_of_range() {
        let doc = single_page_doc(header_words(100.0));
        let err = extract_commercial_retail(&doc, &RetailOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ExtractError::PageOutOfRange {
                page: 2,
                page_count: 1,
            }
        );
    }

    #[test]
    fn test_columns_partition_invariant() {
        let table = extract_commercial_retail(
            &single_page_doc(header_words(100.0)),
            &options_for_page_0(),
        )
        .unwrap();
        let defs = table.meta.debug.unwrap().column_defs;
        assert!(defs[0].contains(": 0.0-"));
        assert!(defs[defs.len() - 1].ends_with("-612.0"));
    }
}

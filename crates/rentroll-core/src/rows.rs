//! Row normalization: repeated-header removal and spillover-row merging.
//!
//! A detected row whose first column is empty but that carries content
//! elsewhere is a spillover: the continuation of the logical record started
//! by the row before it, split there by a page or ruling boundary. Merging
//! folds it back into its parent.

/// Remove rows that are a reprint of the header on a later page.
///
/// A row is a repeated header when its first column exactly equals
/// `header_label` (the header's column-0 label). Such rows are dropped
/// outright, never merged.
pub fn drop_repeated_headers(rows: Vec<Vec<String>>, header_label: &str) -> Vec<Vec<String>> {
    rows.into_iter()
        .filter(|row| row.first().map(String::as_str) != Some(header_label))
        .collect()
}

/// Fold spillover rows into their parent row.
///
/// Expects the header as the first row; it is never merged. Repeated headers
/// among the data rows are discarded first. Then, walking the data rows in
/// order, a row with an empty first column and non-empty content elsewhere is
/// merged into the accumulated parent column-by-column: both non-empty joins
/// with a single space, otherwise the non-empty side wins. Any other row
/// flushes the accumulator and starts a new one.
///
/// Output is the header followed by the merged rows. Running this on its own
/// output is a no-op: merged output contains no spillover rows.
pub fn merge_spillover(raw: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut iter = raw.into_iter();
    let Some(header) = iter.next() else {
        return Vec::new();
    };
    let header_label = header.first().cloned().unwrap_or_default();

    let mut data = drop_repeated_headers(iter.collect(), &header_label).into_iter();
    let Some(first) = data.next() else {
        return vec![header];
    };

    let mut merged = vec![header];
    let mut current = first;
    for row in data {
        let is_spillover =
            row.first().is_some_and(String::is_empty) && row.iter().any(|c| !c.is_empty());
        if is_spillover {
            current = merge_pair(&current, &row);
        } else {
            merged.push(std::mem::replace(&mut current, row));
        }
    }
    merged.push(current);
    merged
}

/// Merge one spillover row into its parent, column by column.
fn merge_pair(parent: &[String], spill: &[String]) -> Vec<String> {
    parent
        .iter()
        .zip(spill.iter())
        .map(|(a, b)| {
            if !a.is_empty() && !b.is_empty() {
                format!("{a} {b}")
            } else {
                // Concatenation: one side is empty, so this is the other side.
                format!("{a}{b}")
            }
        })
        .collect()
}

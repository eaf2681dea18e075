use std::path::Path;

use rentroll::{
    ExtractError, MultifamilyOptions, RetailOptions, Table, extract_commercial_retail,
    extract_multifamily,
};

use crate::cli::{DocType, OutputFormat};
use crate::shared::{csv_escape, open_document};

pub fn run(
    file: &Path,
    doc_type: DocType,
    format: OutputFormat,
    reference_page: Option<usize>,
) -> Result<(), i32> {
    // Unimplemented selectors are rejected before anything is loaded.
    if doc_type == DocType::CommercialMall {
        eprintln!("Error: extraction for 'commercial-mall' is not implemented yet");
        return Err(2);
    }

    let doc = open_document(file)?;

    let table = match doc_type {
        DocType::CommercialRetail => {
            let mut options = RetailOptions::default();
            if let Some(page) = reference_page {
                options.reference_page = page;
            }
            extract_commercial_retail(&doc, &options)
        }
        DocType::Multifamily => {
            let mut options = MultifamilyOptions::default();
            if let Some(page) = reference_page {
                options.reference_page = page;
            }
            extract_multifamily(&doc, &options)
        }
        DocType::CommercialMall => unreachable!("rejected above"),
    }
    .map_err(|e| {
        eprintln!("Error: {e}");
        match e {
            // Unprocessable input rather than a tool failure.
            ExtractError::HeaderNotFound { .. } => 2,
            ExtractError::PageOutOfRange { .. } => 2,
        }
    })?;

    match format {
        OutputFormat::Json => write_json(&table),
        OutputFormat::Csv => write_csv(&table),
        OutputFormat::Text => write_text(&table),
    }
    Ok(())
}

fn write_json(table: &Table) {
    match serde_json::to_string_pretty(table) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error: failed to serialize table: {e}"),
    }
}

fn write_csv(table: &Table) {
    let header: Vec<String> = table.columns.iter().map(|c| csv_escape(c)).collect();
    println!("{}", header.join(","));
    for row in &table.rows {
        let cells: Vec<String> = table
            .columns
            .iter()
            .map(|c| csv_escape(row.get(c).map(String::as_str).unwrap_or("")))
            .collect();
        println!("{}", cells.join(","));
    }
}

fn write_text(table: &Table) {
    // Compute column widths for aligned output.
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.len()).collect();
    for row in &table.rows {
        for (i, col) in table.columns.iter().enumerate() {
            if let Some(cell) = row.get(col) {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let line: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{c:<width$}", width = widths[i]))
        .collect();
    println!("{}", line.join(" | "));

    for row in &table.rows {
        let line: Vec<String> = table
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cell = row.get(col).map(String::as_str).unwrap_or("");
                format!("{cell:<width$}", width = widths[i])
            })
            .collect();
        println!("{}", line.join(" | "));
    }

    println!();
    println!(
        "{} rows across {} pages",
        table.meta.total_rows, table.meta.pages
    );
}

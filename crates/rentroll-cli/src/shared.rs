use std::fs::File;
use std::path::Path;

use rentroll::Document;

/// Open a geometry dump file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not
/// found or cannot be parsed as a geometry dump.
pub fn open_document(file: &Path) -> Result<Document, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let reader = File::open(file).map_err(|e| {
        eprintln!("Error: failed to open {}: {e}", file.display());
        1
    })?;

    Document::from_json_reader(reader).map_err(|e| {
        eprintln!("Error: failed to parse geometry dump: {e}");
        1
    })
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

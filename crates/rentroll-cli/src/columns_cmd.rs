use std::path::Path;

use rentroll::{WallOptions, infer_columns};

use crate::shared::open_document;

pub fn run(file: &Path, reference_page: usize, anchor: &str) -> Result<(), i32> {
    let doc = open_document(file)?;

    let page = doc.page(reference_page).map_err(|e| {
        eprintln!("Error: {e}");
        2
    })?;

    let options = WallOptions {
        anchor_text: anchor.to_string(),
        ..WallOptions::default()
    };
    let layout = infer_columns(page.words(), page.width(), reference_page, &options)
        .map_err(|e| {
            eprintln!("Error: {e}");
            2
        })?;

    println!("header words:");
    for word in &layout.header_words {
        println!("  {} [x0:{:.1}, x1:{:.1}]", word.text, word.bbox.x0, word.bbox.x1);
    }
    println!("walls:");
    for wall in &layout.walls {
        println!("  {wall:.1}");
    }
    println!("columns:");
    for col in &layout.columns {
        println!("  {}: {:.1}-{:.1}", col.name, col.x_start, col.x_end);
    }
    Ok(())
}

//! rentroll-core: Provider-independent types and algorithms for rent roll
//! table extraction.
//!
//! This crate provides the geometry types (`BBox`, `Word`, `Edge`) supplied by
//! an upstream document-geometry provider, and the four table-inference
//! algorithms built on them: wall-based column inference, word-to-cell
//! assignment, grid-line boundary detection, and spillover-row merging.
//! It has no required external dependencies.

pub mod assign;
pub mod columns;
pub mod edges;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod rows;
pub mod table;
pub mod words;

pub use assign::{AssignOptions, assign_rows};
pub use columns::{ColumnDef, ColumnLayout, WallOptions, infer_columns};
pub use edges::{Edge, Orientation};
pub use error::ExtractError;
pub use geometry::BBox;
pub use grid::{GridOptions, cell_text, column_boundaries, row_boundaries};
pub use rows::{drop_repeated_headers, merge_spillover};
pub use table::{Table, TableMeta, WallTrace};
pub use words::Word;

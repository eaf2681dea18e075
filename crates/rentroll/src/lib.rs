//! rentroll: normalized table extraction from rent roll documents.
//!
//! A rent roll is a paginated tabular report. This crate turns one into a
//! [`Table`] of named columns and string rows via one of two pipelines:
//!
//! - [`extract_commercial_retail`] — for reports without visible gridlines;
//!   columns are inferred from header word positions and midpoint "walls".
//! - [`extract_multifamily`] — for reports with visible ruling lines;
//!   cell rectangles come directly from line geometry, and rows split across
//!   a page or ruling boundary are merged back together.
//!
//! Pipeline selection is the caller's responsibility; document type is not
//! detected. Input geometry (positioned words and ruling-line edges per page)
//! comes from an external document-geometry provider via [`Document`] /
//! [`Page`].

mod commercial_retail;
mod document;
mod multifamily;
mod page;

pub use commercial_retail::{RetailOptions, extract_commercial_retail};
pub use document::Document;
pub use multifamily::{MultifamilyOptions, extract_multifamily};
pub use page::Page;

pub use rentroll_core::{
    AssignOptions, BBox, ColumnDef, ColumnLayout, Edge, ExtractError, GridOptions, Orientation,
    Table, TableMeta, WallOptions, WallTrace, Word, infer_columns,
};

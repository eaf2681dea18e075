use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Extract normalized tables from rent roll geometry dumps.
#[derive(Debug, Parser)]
#[command(name = "rentroll", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract a table from a geometry dump
    Extract {
        /// Path to the geometry dump (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Rent roll document type
        #[arg(long = "doc-type", value_enum)]
        doc_type: DocType,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Reference page for column inference (0-based). Defaults to the
        /// pipeline's convention: 2 for commercial-retail, 0 for multifamily
        #[arg(long)]
        reference_page: Option<usize>,
    },

    /// Show the inferred wall-based column boundaries (debugging aid)
    Columns {
        /// Path to the geometry dump (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Reference page for column inference (0-based)
        #[arg(long, default_value_t = 2)]
        reference_page: usize,

        /// Header anchor substring
        #[arg(long, default_value = "Occupant")]
        anchor: String,
    },
}

/// Supported rent roll document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocType {
    /// Unruled report; columns inferred from header word positions
    CommercialRetail,
    /// Ruled report; columns and rows from ruling-line geometry
    Multifamily,
    /// Recognized but not yet implemented
    CommercialMall,
}

/// Output format for extracted tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON object with columns, rows, and meta
    Json,
    /// Comma-separated values, header row first
    Csv,
    /// Aligned plain-text grid
    Text,
}

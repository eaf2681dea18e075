mod cli;
mod columns_cmd;
mod extract_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Extract {
            ref file,
            doc_type,
            format,
            reference_page,
        } => extract_cmd::run(file, doc_type, format, reference_page),
        cli::Commands::Columns {
            ref file,
            reference_page,
            ref anchor,
        } => columns_cmd::run(file, reference_page, anchor),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Consolidate a directory of CSV exports into a single JSON database
#[derive(Parser, Debug)]
#[command(name = "lodgedb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the CSV exports (walked recursively)
    pub input_dir: PathBuf,

    /// Path of the JSON document to write
    #[arg(short, long, default_value = "db.json")]
    pub output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

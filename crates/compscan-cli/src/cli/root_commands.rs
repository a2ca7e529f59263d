use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Walk a directory and write one JSONL record per component.
    Scan(ScanArgs),
    /// Analyze a single file and print everything found in it.
    Inspect(InspectArgs),
    /// Print the JSON Schema of an emitted record.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Directory (or single file) to scan.
    #[arg(default_value = ".")]
    pub path: PathBuf,
    /// Write JSONL here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Attach each file's source text to its records.
    #[arg(long)]
    pub include_source: bool,
    /// Also scan test, spec, and story files.
    #[arg(long)]
    pub no_skip_tests: bool,
    /// File extension to scan (repeatable); replaces the configured list.
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which record to describe.
    #[arg(long, value_enum, default_value = "component")]
    pub record: SchemaRecord,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaRecord {
    /// `ComponentMetadata`
    Component,
    /// `FileAnalysis`
    Analysis,
    /// One JSONL line written by `scan`
    Line,
}

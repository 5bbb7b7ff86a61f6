pub mod icon;
pub mod parse;
pub mod reparse;
pub mod schema;
pub mod taxonomy;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tressa")]
#[command(
    author,
    version,
    about = "Extract structured fields from free-text hair analysis reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (defaults apply when it does not exist)
    #[arg(short, long, global = true, default_value = "tressa.yaml", env = "TRESSA_CONFIG")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a report and print the structured result
    Parse(ParseArgs),

    /// Resolve icon hints to icon names
    Icon(IconArgs),

    /// List the color taxonomy
    Taxonomy(TaxonomyArgs),

    /// Re-parse stored analysis records
    Reparse(ReparseArgs),

    /// Print JSON Schema for results, records or config
    Schema(SchemaArgs),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

#[derive(Parser, Clone)]
pub struct ParseArgs {
    /// Report file to parse (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Declared report language (en, fr, ar); detected from content when omitted
    #[arg(long)]
    pub lang: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Exit 1 when the analysis failed or the report is blank
    #[arg(long)]
    pub strict: bool,

    /// Store an analysis record under this directory
    #[arg(long)]
    pub record_dir: Option<PathBuf>,

    /// Owner of the stored record
    #[arg(long, default_value = "anonymous")]
    pub user: String,

    /// Image reference that accompanied the request (repeatable)
    #[arg(long = "image", value_name = "REF")]
    pub images: Vec<String>,
}

#[derive(Parser, Clone)]
pub struct IconArgs {
    /// Icon hints: emoji, English or Arabic keywords
    #[arg(value_name = "HINT", required = true)]
    pub hints: Vec<String>,
}

#[derive(Parser, Clone)]
pub struct TaxonomyArgs {
    /// Print as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Look up a single color phrase instead of listing everything
    #[arg(long)]
    pub lookup: Option<String>,
}

#[derive(Parser, Clone)]
pub struct ReparseArgs {
    /// Record directory (default: record_dir from config)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemaTarget {
    #[default]
    Result,
    Record,
    Config,
}

#[derive(Parser, Clone)]
pub struct SchemaArgs {
    /// Which schema to print
    #[arg(value_enum, default_value_t = SchemaTarget::Result)]
    pub target: SchemaTarget,
}

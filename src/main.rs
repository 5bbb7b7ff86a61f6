use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod output;
mod parser;
mod taxonomy;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("tressa=debug")
    } else {
        EnvFilter::new("tressa=warn")
    };

    // stdout carries results, logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse(args) => cli::parse::execute(args, &cli.config),
        Commands::Icon(args) => cli::icon::execute(args),
        Commands::Taxonomy(args) => cli::taxonomy::execute(args),
        Commands::Reparse(args) => cli::reparse::execute(args, &cli.config),
        Commands::Schema(args) => cli::schema::execute(args),
    }
}

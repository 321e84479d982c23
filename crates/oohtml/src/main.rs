//! oohtml CLI - HTML page assembly.
//!
//! Provides commands for:
//! - `page`: Assemble an HTML5 document from blocks
//! - `block`: Print a single block

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BlockArgs, PageArgs};
use output::Output;

/// oohtml - HTML page assembly.
#[derive(Parser)]
#[command(name = "oohtml", version, about)]
struct Cli {
    /// Enable verbose output (debug logs on stderr).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble an HTML5 page from blocks.
    Page(PageArgs),
    /// Print a single block.
    Block(BlockArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Page(args) => args.execute(),
        Commands::Block(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

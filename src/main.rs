//! importscan - list the external packages a source tree imports
//!
//! importscan provides:
//! - Recursive discovery of source files by extension
//! - Line-based detection of `import <name>;` statements
//! - Deduplicated, first-seen-order reporting on stdout

use anyhow::Result;
use clap::Parser;
use tracing::Level;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Diagnostics go to stderr so stdout carries references only
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli)
}

//! fanout - expand one templated JSON document into a matrix of variants.
//!
//! Usage: fanout <INPUT> <OUTPUT> <DEPTH>
//!
//! Reads a JSON document from INPUT, substitutes every sequence-valued field
//! with each of its elements and descends into nested mappings up to DEPTH
//! levels, then writes one JSON record per variant to OUTPUT.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "fanout")]
#[command(about = "Expand a templated JSON document into a matrix of variants")]
struct Cli {
    /// Path of the JSON document to expand
    input: PathBuf,

    /// Path the newline-delimited JSON records are written to
    output: PathBuf,

    /// Depth budget: how many nested-mapping levels to descend into
    depth: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let document = fanout_io::read_document(&cli.input)
        .with_context(|| format!("failed to read document from {}", cli.input.display()))?;

    let variants = fanout_expander::expand(&document, cli.depth);
    info!(variants = variants.len(), depth = cli.depth, "expansion complete");

    fanout_io::write_records_file(&cli.output, &variants)
        .with_context(|| format!("failed to write records to {}", cli.output.display()))?;

    Ok(())
}

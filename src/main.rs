use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use stemma::{render_index_table, token_stream, Block, RepeatIndex, TokenStream, Witness};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stemma", about = "Find repeated blocks across text witnesses")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect repeated blocks across the given witnesses.
    Blocks {
        /// Witness files, one witness per file; the file stem is the sigil.
        files: Vec<PathBuf>,
    },
    /// Print the suffix-array/LCP table for the combined stream.
    Index {
        /// Witness files, one witness per file; the file stem is the sigil.
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Blocks { files } => run_blocks(files)?,
        Commands::Index { files } => run_index(files)?,
    }

    Ok(())
}

fn run_blocks(files: Vec<PathBuf>) -> Result<()> {
    let witnesses = load_witnesses(&files)?;
    let stream = token_stream(&witnesses);
    info!(
        witnesses = witnesses.len(),
        tokens = stream.len(),
        "combined stream built"
    );
    let index = RepeatIndex::build(&stream);

    if index.blocks().is_empty() {
        println!("No repeated blocks found.");
        return Ok(());
    }
    for (idx, block) in index.blocks().iter().enumerate() {
        println!(
            "block {}\tpositions={}\tranges={}\t\"{}\"",
            idx + 1,
            block.cardinality(),
            block.ranges(),
            block_preview(&stream, block)
        );
    }

    Ok(())
}

fn run_index(files: Vec<PathBuf>) -> Result<()> {
    let witnesses = load_witnesses(&files)?;
    let stream = token_stream(&witnesses);
    let index = RepeatIndex::build(&stream);
    let table = render_index_table(&stream, &index).context("failed to render index table")?;
    print!("{table}");
    Ok(())
}

fn load_witnesses(files: &[PathBuf]) -> Result<Vec<Witness>> {
    if files.is_empty() {
        bail!("no witness files given");
    }
    let mut witnesses = Vec::with_capacity(files.len());
    for path in files {
        witnesses.push(load_witness(path)?);
    }
    Ok(witnesses)
}

fn load_witness(path: &Path) -> Result<Witness> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read witness from {}", path.display()))?;
    let sigil = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("w")
        .to_string();
    Ok(Witness::plain(sigil, &text))
}

/// Tokens of the block's first occurrence, for a human-readable report line.
fn block_preview(stream: &TokenStream<String>, block: &Block) -> String {
    match block.spans().first() {
        Some(span) => stream.tokens()[span.start..span.end]
            .iter()
            .filter_map(|token| token.content())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" "),
        None => String::new(),
    }
}

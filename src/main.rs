//! clualign - align FASTA with Clustal Omega, emit JSON
//!
//! ## Usage
//!
//! ```bash
//! clualign < sequences.fasta
//! clualign sequences.fasta
//! ```
//!
//! On success, prints one JSON line on stdout:
//!
//! ```text
//! {"rows": [{"id": "seq1", "sequence": "ACGT--"}, ...]}
//! ```
//!
//! On any failure, prints a single diagnostic line on stderr and exits 1.
//! Requires `clustalo` on PATH.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use clualign::pipeline;

/// Align FASTA sequences with Clustal Omega and emit the alignment as JSON
///
/// Reads a FASTA document, runs `clustalo` with input ordering preserved,
/// and writes {"rows": [{"id", "sequence"}, ...]} to stdout. All sequences
/// in the output have equal length (the alignment width).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FASTA file to align. Use "-" (or omit) to read from stdin.
    #[arg(default_value = "-")]
    file: PathBuf,
}

fn read_input(args: &Args) -> Result<String> {
    if args.file.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("failed to read {}", args.file.display()))
    }
}

async fn run(args: Args) -> Result<()> {
    let fasta = read_input(&args)?;
    let result = pipeline::run(&fasta).await?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

// Single-threaded by design: one blocking external invocation per run.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    if let Err(err) = run(args).await {
        // "{:#}" keeps the whole error chain on one line.
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

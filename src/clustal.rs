//! Clustal alignment format parser.
//!
//! Parses the legacy "clu" output format produced by Clustal Omega
//! (`--outfmt=clu`). The format is block-interleaved:
//!
//! ```text
//! CLUSTAL O(1.2.4) multiple sequence alignment
//!
//! seq1      ACGTACGTAC 10
//! seq2      AC--ACGTAC 10
//!           **  ******
//!
//! seq1      GGGG 14
//! seq2      GGGG 14
//! ```
//!
//! Each sequence line starts with the record label at column 0, followed by a
//! sequence fragment and an optional cumulative residue count. Fragments for
//! the same label are concatenated across blocks, in file order. Conservation
//! lines (`*`, `:`, `.`) are indented and carry no label; they are skipped.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::{AlignmentRow, RunResult};

/// Errors that can occur during Clustal parsing.
#[derive(Error, Debug)]
pub enum ClustalError {
    #[error("failed to read clustalo output: {0}")]
    IoError(#[from] std::io::Error),

    #[error("not a clustal file: expected a header line starting with 'CLUSTAL'")]
    MissingHeader,

    #[error("line {line}: expected '<label> <fragment>', got '{content}'")]
    MalformedLine { line: usize, content: String },
}

/// Result type for Clustal operations.
pub type ClustalResult<T> = Result<T, ClustalError>;

/// Parses a Clustal alignment file and returns the extracted rows.
pub fn parse_clustal_file<P: AsRef<Path>>(path: P) -> ClustalResult<RunResult> {
    let content = fs::read_to_string(path)?;
    parse_clustal_str(&content)
}

/// Parses Clustal content from a string.
///
/// Row order is the order in which labels first appear, which is the input
/// order when clustalo runs with `--output-order=input-order`.
pub fn parse_clustal_str(content: &str) -> ClustalResult<RunResult> {
    let mut lines = content.lines().enumerate();

    // The header is the first non-empty line and must identify the format.
    let header = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .map(|(_, line)| line);
    match header {
        Some(line) if line.trim_start().starts_with("CLUSTAL") => {}
        _ => return Err(ClustalError::MissingHeader),
    }

    let mut rows: Vec<(String, String)> = Vec::new();

    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        // Conservation lines are indented; sequence lines start at column 0.
        if line.starts_with(' ') || line.starts_with('\t') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let label = parts.next().unwrap_or_default();
        let fragment = parts.next().ok_or_else(|| ClustalError::MalformedLine {
            line: idx + 1,
            content: line.to_string(),
        })?;

        // A trailing token, if present, is the cumulative residue count.
        if let Some(extra) = parts.next() {
            let is_count = extra.chars().all(|c| c.is_ascii_digit()) && parts.next().is_none();
            if !is_count {
                return Err(ClustalError::MalformedLine {
                    line: idx + 1,
                    content: line.to_string(),
                });
            }
        }

        match rows.iter_mut().find(|(l, _)| l == label) {
            Some((_, seq)) => seq.push_str(fragment),
            None => rows.push((label.to_string(), fragment.to_string())),
        }
    }

    Ok(RunResult::new(
        rows.into_iter()
            .map(|(id, sequence)| AlignmentRow::new(id, sequence))
            .collect(),
    ))
}

//! The alignment pipeline.
//!
//! One run is strictly linear and fail-fast:
//!
//! ```text
//! Read -> Stage -> Invoke -> Parse -> Validate
//! ```
//!
//! All scratch files live in a run-private temporary directory. The
//! `TempDir` guard removes the directory and everything in it on every exit
//! path, success or failure, so no staging state outlives the run.

use std::fs;

use thiserror::Error;

use crate::clustal::{self, ClustalError};
use crate::model::{RunResult, ValidationError};
use crate::runner::{self, RunnerError};

/// Errors from any stage of the pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("empty input: expected a FASTA document on stdin")]
    EmptyInput,

    #[error("failed to stage alignment files: {0}")]
    Staging(#[from] std::io::Error),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error("clustalo reported success but produced no output file")]
    MissingOutput,

    #[error("failed to parse clustalo output: {0}")]
    Parse(#[from] ClustalError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Aligns the given FASTA text and returns the validated rows.
///
/// The text is written verbatim to a staged input file; no FASTA validation
/// happens here. Malformed input surfaces through the tool's own failure or
/// through a degenerate parsed alignment.
pub async fn run(fasta: &str) -> PipelineResult<RunResult> {
    if fasta.trim().is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let staging = tempfile::tempdir()?;
    let input = staging.path().join("input.fasta");
    let output = staging.path().join("output.aln");
    fs::write(&input, fasta)?;

    runner::run_clustalo(&input, &output).await?;

    if !output.is_file() {
        return Err(PipelineError::MissingOutput);
    }

    let result = clustal::parse_clustal_file(&output)?;
    result.validate()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_input_rejected() {
        assert!(matches!(run("").await, Err(PipelineError::EmptyInput)));
        assert!(matches!(
            run("  \n\t\n").await,
            Err(PipelineError::EmptyInput)
        ));
    }

    #[tokio::test]
    async fn test_empty_input_diagnostic_mentions_empty() {
        let err = run("").await.unwrap_err();
        assert!(err.to_string().contains("empty input"));
    }
}

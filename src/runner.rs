//! External alignment tool invocation.
//!
//! Runs Clustal Omega (`clustalo`) on a staged input file with a fixed
//! argument set and a bounded wall-clock timeout. Output streams are captured,
//! never streamed through; stderr is surfaced in failure diagnostics.
//!
//! The argument set is fixed: `--outfmt=clu` selects the legacy Clustal
//! output format and `--output-order=input-order` keeps rows in input order
//! instead of clustalo's default similarity-based reordering.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tokio::time;

/// The external alignment executable, resolved on PATH.
pub const ALIGNMENT_TOOL: &str = "clustalo";

/// Upper bound on alignment wall-clock time.
pub const ALIGNMENT_TIMEOUT: Duration = Duration::from_secs(300);

/// Errors that can occur while invoking the alignment tool.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("could not launch '{program}' (is Clustal Omega installed and on PATH?): {source}")]
    ToolNotFound {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' failed: {detail}")]
    ToolFailed { program: String, detail: String },

    #[error("'{program}' timed out after {} seconds", limit.as_secs())]
    Timeout { program: String, limit: Duration },
}

/// Result type for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Aligns the staged input file, writing the clu-format alignment to
/// `output`. Blocks (asynchronously) until the tool exits or the timeout
/// fires.
pub async fn run_clustalo(input: &Path, output: &Path) -> RunnerResult<()> {
    run_tool(ALIGNMENT_TOOL, input, output, ALIGNMENT_TIMEOUT).await
}

async fn run_tool(
    program: &str,
    input: &Path,
    output: &Path,
    limit: Duration,
) -> RunnerResult<()> {
    let child = Command::new(program)
        .arg("-i")
        .arg(input)
        .arg("-o")
        .arg(output)
        .arg("--outfmt=clu")
        .arg("--force")
        .arg("--output-order=input-order")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        // On timeout the future holding the child is dropped; this makes the
        // drop kill and reap the process instead of leaving it running.
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| RunnerError::ToolNotFound {
            program: program.to_string(),
            source,
        })?;

    let out = match time::timeout(limit, child.wait_with_output()).await {
        Ok(waited) => waited.map_err(|e| RunnerError::ToolFailed {
            program: program.to_string(),
            detail: format!("could not collect process output: {e}"),
        })?,
        Err(_elapsed) => {
            return Err(RunnerError::Timeout {
                program: program.to_string(),
                limit,
            })
        }
    };

    if out.status.success() {
        return Ok(());
    }

    // Prefer the tool's own stderr, then stdout, then the bare exit status.
    let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
    let stdout = String::from_utf8_lossy(&out.stdout).trim().to_string();
    let detail = if !stderr.is_empty() {
        stderr
    } else if !stdout.is_empty() {
        stdout
    } else {
        format!("exit status {}", out.status)
    };

    Err(RunnerError::ToolFailed {
        program: program.to_string(),
        detail,
    })
}

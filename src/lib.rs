//! # clualign - Clustal Omega JSON adapter
//!
//! Aligns a FASTA document with Clustal Omega and emits the aligned rows as
//! a single JSON object. Alignment itself is fully delegated to the external
//! `clustalo` binary; this crate does format translation and process
//! orchestration only.
//!
//! ## Architecture
//!
//! One run is a linear pipeline with no persistent state:
//! - `pipeline`: stage input, invoke the tool, parse and validate the result
//! - `runner`: subprocess invocation with a bounded timeout and captured streams
//! - `clustal`: parser for the legacy block-interleaved "clu" output format
//! - `model`: `AlignmentRow` / `RunResult` and the length invariant
//!
//! Scratch files live in a run-private temporary directory that is removed
//! on every exit path.

pub mod clustal;
pub mod model;
pub mod pipeline;
pub mod runner;

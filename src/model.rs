//! Data model for one alignment run.
//!
//! This module contains the two structures produced by a run:
//! - `AlignmentRow`: one aligned sequence with its identifier
//! - `RunResult`: the ordered collection of rows, with the length invariant
//!
//! Both are transient — they live for a single invocation and are serialized
//! straight to JSON on success.

use serde::Serialize;
use thiserror::Error;

/// Errors raised when a parsed alignment violates its structural invariant.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("alignment is empty: no sequences were parsed from the clustalo output")]
    EmptyAlignment,

    #[error("alignment rows have different lengths (min: {min}, max: {max})")]
    InconsistentLength { min: usize, max: usize },
}

/// A single aligned sequence with its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentRow {
    /// The sequence identifier (from the FASTA header, without '>')
    pub id: String,
    /// The aligned sequence data, gap characters included
    pub sequence: String,
}

impl AlignmentRow {
    /// Creates a new row.
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    /// Returns the length of the aligned sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the aligned sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// The result of one alignment run: rows in input order.
///
/// Serializes as `{"rows": [{"id": ..., "sequence": ...}, ...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// All aligned rows, in the order they appeared in the input
    pub rows: Vec<AlignmentRow>,
}

impl RunResult {
    /// Creates a result from a vector of rows.
    pub fn new(rows: Vec<AlignmentRow>) -> Self {
        Self { rows }
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the alignment width (common row length), if any rows exist.
    pub fn alignment_width(&self) -> Option<usize> {
        self.rows.first().map(|r| r.len())
    }

    /// Checks the structural invariant of a valid alignment: at least one
    /// row, and every row has the same length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rows.is_empty() {
            return Err(ValidationError::EmptyAlignment);
        }

        let first_len = self.rows[0].len();
        if self.rows.iter().all(|r| r.len() == first_len) {
            return Ok(());
        }

        let min = self.rows.iter().map(|r| r.len()).min().unwrap_or(0);
        let max = self.rows.iter().map(|r| r.len()).max().unwrap_or(0);
        Err(ValidationError::InconsistentLength { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uniform_lengths() {
        let result = RunResult::new(vec![
            AlignmentRow::new("a", "ACGT--"),
            AlignmentRow::new("b", "AC--GT"),
        ]);
        assert!(result.validate().is_ok());
        assert_eq!(result.row_count(), 2);
        assert_eq!(result.alignment_width(), Some(6));
    }

    #[test]
    fn test_validate_empty() {
        let result = RunResult::new(vec![]);
        assert!(matches!(
            result.validate(),
            Err(ValidationError::EmptyAlignment)
        ));
        assert_eq!(result.alignment_width(), None);
    }

    #[test]
    fn test_validate_inconsistent_lengths() {
        let result = RunResult::new(vec![
            AlignmentRow::new("a", "ACGT"),
            AlignmentRow::new("b", "AC"),
        ]);
        assert!(matches!(
            result.validate(),
            Err(ValidationError::InconsistentLength { min: 2, max: 4 })
        ));
    }

    #[test]
    fn test_single_row_is_valid() {
        let result = RunResult::new(vec![AlignmentRow::new("only", "ACGT")]);
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_json_shape() {
        let result = RunResult::new(vec![
            AlignmentRow::new("a", "ACGT--"),
            AlignmentRow::new("b", "AC--GT"),
        ]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"rows":[{"id":"a","sequence":"ACGT--"},{"id":"b","sequence":"AC--GT"}]}"#
        );
    }
}

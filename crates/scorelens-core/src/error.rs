/// Pipeline failure kinds.
///
/// Only two things can stop a run: input that is not a table at all, and a
/// table that lacks a column some later step requires. Anything optional
/// (like the grouping column) is skipped silently and never becomes an error.
use std::fmt;
use thiserror::Error;

/// Why a required column could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnProblem {
    /// No column with that name exists after normalisation.
    Absent,
    /// The column exists but holds non-numeric text.
    NotNumeric,
    /// The column is numeric but the cell at this (0-based) row is empty.
    EmptyCell { row: usize },
}

impl fmt::Display for ColumnProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("column not found"),
            Self::NotNumeric => f.write_str("column is not numeric"),
            Self::EmptyCell { row } => write!(f, "empty value in row {}", row + 1),
        }
    }
}

/// A failure that aborts the whole pipeline run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// The input could not be parsed as delimited tabular data.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A column required by a downstream step is absent or unusable.
    #[error("Missing column `{column}`: {problem}")]
    MissingColumn {
        column: String,
        problem: ColumnProblem,
    },
}

impl PipelineError {
    pub(crate) fn missing(column: &str, problem: ColumnProblem) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
            problem,
        }
    }

    /// Short category name shown above the diagnostic message.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "MalformedInput",
            Self::MissingColumn { .. } => "MissingColumn",
        }
    }
}

impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

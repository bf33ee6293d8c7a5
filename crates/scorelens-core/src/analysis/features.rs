/// Feature deriver -- per-row aggregate score and Pass/Fail outcome.
///
/// Reads the three subject columns, appends `average_score` and `result`
/// to the table, and returns the typed columns every later step works from.
use crate::error::PipelineError;
use crate::model::{Outcome, RecordTable, Value};
use compact_str::CompactString;
use tracing::debug;

pub const MATH_COLUMN: &str = "math_score";
pub const READING_COLUMN: &str = "reading_score";
pub const WRITING_COLUMN: &str = "writing_score";
pub const AVERAGE_COLUMN: &str = "average_score";
pub const RESULT_COLUMN: &str = "result";

/// Typed score columns, one entry per table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreColumns {
    pub math: Vec<f64>,
    pub reading: Vec<f64>,
    pub writing: Vec<f64>,
    pub average: Vec<f64>,
    pub outcome: Vec<Outcome>,
}

impl ScoreColumns {
    pub fn len(&self) -> usize {
        self.outcome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcome.is_empty()
    }

    /// Number of rows with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcome.iter().filter(|&&o| o == outcome).count()
    }

    /// Fraction of rows that pass, or `None` for an empty table.
    pub fn pass_rate(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.count(Outcome::Pass) as f64 / self.len() as f64)
        }
    }
}

/// Compute `average_score` and `result` for every row.
///
/// Fails with `MissingColumn` if any subject column is absent, non-numeric,
/// or has an empty cell. On failure the table is left untouched.
pub fn derive_features(
    table: &mut RecordTable,
    pass_threshold: f64,
) -> Result<ScoreColumns, PipelineError> {
    let math = table.numeric_column(MATH_COLUMN)?;
    let reading = table.numeric_column(READING_COLUMN)?;
    let writing = table.numeric_column(WRITING_COLUMN)?;

    let average: Vec<f64> = math
        .iter()
        .zip(&reading)
        .zip(&writing)
        .map(|((m, r), w)| (m + r + w) / 3.0)
        .collect();

    let outcome: Vec<Outcome> = average
        .iter()
        .map(|&avg| Outcome::classify(avg, pass_threshold))
        .collect();

    table.set_column(
        AVERAGE_COLUMN,
        average.iter().copied().map(Value::Number).collect(),
    );
    table.set_column(
        RESULT_COLUMN,
        outcome
            .iter()
            .map(|o| Value::Text(CompactString::new(o.label())))
            .collect(),
    );

    let columns = ScoreColumns {
        math,
        reading,
        writing,
        average,
        outcome,
    };
    debug!(
        rows = columns.len(),
        passed = columns.count(Outcome::Pass),
        "Derived average_score and result"
    );
    Ok(columns)
}

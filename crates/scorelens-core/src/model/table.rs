/// In-memory record table.
///
/// Rows are stored as flat `Vec<Value>`s aligned with `columns`. Column
/// names are already normalised when the table is built, so every lookup
/// is an exact match.
use super::value::Value;
use crate::error::{ColumnProblem, PipelineError};
use compact_str::CompactString;

/// An ordered sequence of rows keyed by normalised column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    columns: Vec<CompactString>,
    rows: Vec<Vec<Value>>,
}

impl RecordTable {
    /// Build a table from column names and row cells.
    ///
    /// Every row must have exactly one cell per column.
    pub fn from_parts(columns: Vec<CompactString>, rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[CompactString] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by its normalised name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.as_str() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// The cell at `row` in column `name`, if both exist.
    pub fn cell(&self, row: usize, name: &str) -> Option<&Value> {
        let col = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[col])
    }

    /// Iterate over every cell of one column, top to bottom.
    pub fn column_values<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Value>> {
        let col = self.column_index(name)?;
        Some(self.rows.iter().map(move |r| &r[col]))
    }

    /// Read a required numeric column as a dense `Vec<f64>`.
    ///
    /// Fails with `MissingColumn` if the column is absent, holds text, or
    /// has an empty cell in any row.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, PipelineError> {
        let values = self
            .column_values(name)
            .ok_or_else(|| PipelineError::missing(name, ColumnProblem::Absent))?;

        values
            .enumerate()
            .map(|(row, value)| match value {
                Value::Number(n) => Ok(*n),
                Value::Missing => Err(PipelineError::missing(
                    name,
                    ColumnProblem::EmptyCell { row },
                )),
                Value::Text(_) => Err(PipelineError::missing(name, ColumnProblem::NotNumeric)),
            })
            .collect()
    }

    /// Overwrite column `name` with `values`, appending it if it does not exist.
    ///
    /// `values` must have one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.column_index(name) {
            Some(col) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[col] = value;
                }
            }
            None => {
                self.columns.push(CompactString::new(name));
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }

    /// A copy of the first `n` rows (or all rows if there are fewer).
    pub fn head(&self, n: usize) -> RecordTable {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// A copy holding only the rows at `indices`, in the given order.
    ///
    /// Out-of-range indices are ignored.
    pub fn select_rows(&self, indices: &[usize]) -> RecordTable {
        Self {
            columns: self.columns.clone(),
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
        }
    }
}

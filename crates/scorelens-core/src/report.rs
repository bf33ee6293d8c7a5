/// The output of one pipeline run, in display order.
///
/// A frontend never decides what to show or in which order: it walks
/// [`Report::sections`] and draws each section it is handed.
use crate::analysis::{GroupSummary, Histogram, OutlierSelection, ScatterSeries, ScoreColumns};
use crate::model::{Outcome, RecordTable};
use chrono::{DateTime, Local};

/// Shown instead of an outlier table when no row qualifies.
pub const NO_OUTLIERS_NOTICE: &str = "No outliers found based on criteria.";

/// Everything derived from one input.
#[derive(Debug, Clone)]
pub struct Report {
    /// Display name of the input (file name or caller-supplied label).
    pub source: String,
    pub loaded_at: DateTime<Local>,
    /// First rows of the table as loaded, before derived columns are added.
    pub preview: RecordTable,
    /// The full table including `average_score` and `result`.
    pub table: RecordTable,
    pub scores: ScoreColumns,
    pub histogram: Histogram,
    pub math_vs_reading: ScatterSeries,
    pub math_vs_writing: ScatterSeries,
    pub outliers: OutlierSelection,
    /// Full rows of every outlier, in table order.
    pub outlier_table: RecordTable,
    /// Absent when the grouping column does not exist.
    pub groups: Option<GroupSummary>,
}

/// How the outlier section should be presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlierView<'a> {
    /// Render [`NO_OUTLIERS_NOTICE`], never an empty table.
    NoneFound,
    Rows(&'a RecordTable),
}

/// One block of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section<'a> {
    Preview(&'a RecordTable),
    Histogram(&'a Histogram),
    Scatter(&'a ScatterSeries),
    Outliers(OutlierView<'a>),
    Groups(&'a GroupSummary),
}

impl Section<'_> {
    /// Heading shown above the section.
    pub fn title(&self) -> String {
        match self {
            Self::Preview(_) => "Dataset Preview".to_string(),
            Self::Histogram(_) => "Average Score Distribution".to_string(),
            Self::Scatter(series) => series.title.to_string(),
            Self::Outliers(_) => "Outliers (High in one subject, Low in another)".to_string(),
            Self::Groups(summary) => {
                format!("Pass/Fail Ratios by {}", title_case(&summary.column))
            }
        }
    }
}

impl Report {
    pub fn row_count(&self) -> usize {
        self.table.len()
    }

    pub fn outlier_view(&self) -> OutlierView<'_> {
        if self.outliers.is_empty() {
            OutlierView::NoneFound
        } else {
            OutlierView::Rows(&self.outlier_table)
        }
    }

    /// All sections in their fixed display order.
    ///
    /// Preview, histogram, math-vs-reading, math-vs-writing, outliers, and
    /// the group breakdown when one was computed.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut sections = vec![
            Section::Preview(&self.preview),
            Section::Histogram(&self.histogram),
            Section::Scatter(&self.math_vs_reading),
            Section::Scatter(&self.math_vs_writing),
            Section::Outliers(self.outlier_view()),
        ];
        if let Some(groups) = &self.groups {
            sections.push(Section::Groups(groups));
        }
        sections
    }

    /// `(pass, fail)` row counts.
    pub fn outcome_counts(&self) -> (usize, usize) {
        (
            self.scores.count(Outcome::Pass),
            self.scores.count(Outcome::Fail),
        )
    }
}

/// `"race/ethnicity"` → `"Race/ethnicity"`, `"gender"` → `"Gender"`.
fn title_case(column: &str) -> String {
    let spaced = column.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalises_first_letter() {
        assert_eq!(title_case("gender"), "Gender");
        assert_eq!(title_case("lunch_type"), "Lunch type");
        assert_eq!(title_case(""), "");
    }
}

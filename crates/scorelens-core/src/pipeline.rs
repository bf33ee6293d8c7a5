/// The pipeline -- load, derive, select, summarise, in that order.
///
/// Every input event calls [`run`] (or [`run_path`]) with the raw input.
/// Nothing is cached between calls: each run rebuilds the whole report
/// from scratch, and any error stops the run before later steps execute.
use crate::analysis::{
    build_histogram, derive_features, select_outliers, summarize_groups, ScatterSeries,
};
use crate::error::PipelineError;
use crate::loader;
use crate::model::RecordTable;
use crate::report::Report;
use std::path::Path;
use tracing::{info, warn};

/// Tunables for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Minimum average score that counts as a pass (inclusive).
    pub pass_threshold: f64,
    /// Rows shown in the dataset preview.
    pub preview_rows: usize,
    /// Categorical column for the Pass/Fail breakdown; skipped when absent.
    pub group_column: String,
    /// Force a histogram bin count instead of the automatic rule.
    pub histogram_bins: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 50.0,
            preview_rows: 5,
            group_column: "gender".to_string(),
            histogram_bins: None,
        }
    }
}

/// Run the full pipeline over in-memory CSV bytes.
///
/// `source` is only used for display and logging.
pub fn run(source: &str, bytes: &[u8], config: &PipelineConfig) -> Result<Report, PipelineError> {
    info!("Running pipeline for {} ({} bytes)", source, bytes.len());
    let result = loader::load_bytes(bytes).and_then(|table| build_report(source, table, config));
    log_outcome(source, &result);
    result
}

/// Run the full pipeline over a CSV file on disk.
pub fn run_path(path: &Path, config: &PipelineConfig) -> Result<Report, PipelineError> {
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    info!("Running pipeline for {}", path.display());
    let result = loader::load_path(path).and_then(|table| build_report(&source, table, config));
    log_outcome(&source, &result);
    result
}

fn log_outcome(source: &str, result: &Result<Report, PipelineError>) {
    match result {
        Ok(report) => info!(
            "Pipeline complete for {}: {} rows, {} outliers, groups: {}",
            source,
            report.row_count(),
            report.outliers.len(),
            report.groups.is_some()
        ),
        Err(e) => warn!("Pipeline aborted for {}: {}", source, e),
    }
}

/// Everything after loading. The preview is captured before derivation
/// so it shows the table exactly as it was read.
fn build_report(
    source: &str,
    mut table: RecordTable,
    config: &PipelineConfig,
) -> Result<Report, PipelineError> {
    let preview = table.head(config.preview_rows);

    let scores = derive_features(&mut table, config.pass_threshold)?;
    let histogram = build_histogram(&scores.average, &scores.outcome, config.histogram_bins);
    let math_vs_reading = ScatterSeries::math_vs_reading(&scores);
    let math_vs_writing = ScatterSeries::math_vs_writing(&scores);
    let outliers = select_outliers(&scores);
    let outlier_table = table.select_rows(&outliers.rows);
    let groups = summarize_groups(&table, &config.group_column, &scores.outcome);

    Ok(Report {
        source: source.to_string(),
        loaded_at: chrono::Local::now(),
        preview,
        table,
        scores,
        histogram,
        math_vs_reading,
        math_vs_writing,
        outliers,
        outlier_table,
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::RESULT_COLUMN;

    const CSV: &str = "\
gender,race/ethnicity,math score,reading score,writing score
female,group B,72,72,74
female,group C,69,90,88
male,group A,47,57,44
male,group C,76,78,75
female,group B,40,60,50
male,group D,90,30,60
";

    #[test]
    fn preview_is_taken_before_derivation() {
        let report = run("t.csv", CSV.as_bytes(), &PipelineConfig::default()).unwrap();
        assert_eq!(report.preview.len(), 5);
        assert!(!report.preview.has_column(RESULT_COLUMN));
        assert!(report.table.has_column(RESULT_COLUMN));
    }

    #[test]
    fn custom_threshold_and_preview() {
        let config = PipelineConfig {
            pass_threshold: 70.0,
            preview_rows: 2,
            ..PipelineConfig::default()
        };
        let report = run("t.csv", CSV.as_bytes(), &config).unwrap();
        assert_eq!(report.preview.len(), 2);
        // Averages: 72.67, 82.33, 49.33, 76.33, 50, 60.
        assert_eq!(report.outcome_counts(), (3, 3));
    }

    #[test]
    fn alternate_group_column() {
        let config = PipelineConfig {
            group_column: "race/ethnicity".to_string(),
            ..PipelineConfig::default()
        };
        let report = run("t.csv", CSV.as_bytes(), &config).unwrap();
        let groups = report.groups.expect("group summary");
        let labels: Vec<&str> = groups.groups.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(labels, ["group A", "group B", "group C", "group D"]);
    }

    #[test]
    fn malformed_input_stops_before_derivation() {
        let err = run("bad.csv", b"a,b\n1\n", &PipelineConfig::default()).unwrap_err();
        assert_eq!(err.kind(), "MalformedInput");
    }
}

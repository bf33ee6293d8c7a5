/// ScoreLens Core -- loading, derivation, statistics, and report model.
///
/// This crate contains all data logic with zero UI dependencies.
/// A frontend hands raw bytes to [`pipeline::run`] and renders the
/// returned [`Report`] section by section.
///
/// # Modules
///
/// - [`model`]: Record table, cell values, outcome labels, display formatting.
/// - [`loader`]: CSV parsing and column-label normalisation.
/// - [`analysis`]: Derived columns, outliers, group proportions, chart data.
/// - [`report`]: The ordered output of one pipeline run.
/// - [`pipeline`]: The single entry point that chains everything together.
pub mod analysis;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::{ColumnProblem, PipelineError};
pub use pipeline::{run, run_path, PipelineConfig};
pub use report::{OutlierView, Report, Section};

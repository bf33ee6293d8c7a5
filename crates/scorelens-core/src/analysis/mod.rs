/// Analysis modules -- everything computed from the loaded table.

pub mod features;
pub mod groups;
pub mod histogram;
pub mod outliers;
pub mod scatter;
pub mod stats;

pub use features::{derive_features, ScoreColumns, AVERAGE_COLUMN, RESULT_COLUMN};
pub use groups::{summarize_groups, GroupProportion, GroupSummary};
pub use histogram::{build_histogram, Histogram, HistogramBin};
pub use outliers::{select_outliers, OutlierSelection};
pub use scatter::{ScatterPoint, ScatterSeries};

/// UI widgets for ScoreLens.

pub mod chart_frame;
pub mod data_table;
pub mod histogram_chart;
pub mod scatter_chart;
pub mod stacked_bar_chart;
pub mod status_bar;
pub mod toolbar;

/// Panels composing the dashboard body.

pub mod group_panel;
pub mod outlier_panel;
pub mod report_panel;

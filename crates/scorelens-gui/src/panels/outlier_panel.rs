/// Outlier panel -- rows high in one of math/reading and low in the other.
use crate::theme::ScoreLensTheme;
use crate::widgets::data_table;
use egui::Ui;
use scorelens_core::model::format::format_number;
use scorelens_core::report::NO_OUTLIERS_NOTICE;
use scorelens_core::{OutlierView, Report};

pub fn outlier_panel(ui: &mut Ui, report: &Report, view: OutlierView<'_>, theme: &ScoreLensTheme) {
    if let (Some(math), Some(reading)) =
        (report.outliers.math_median, report.outliers.reading_median)
    {
        ui.label(
            egui::RichText::new(format!(
                "Medians: math {}, reading {}",
                format_number(math),
                format_number(reading)
            ))
            .size(12.0)
            .color(theme.text_muted),
        );
        ui.add_space(4.0);
    }

    match view {
        OutlierView::NoneFound => {
            ui.label(
                egui::RichText::new(NO_OUTLIERS_NOTICE)
                    .italics()
                    .color(theme.text),
            );
        }
        OutlierView::Rows(table) => {
            ui.label(
                egui::RichText::new(format!("{} rows", table.len()))
                    .size(12.0)
                    .color(theme.text_muted),
            );
            data_table::data_table(ui, "outlier_table", table, theme);
        }
    }
}

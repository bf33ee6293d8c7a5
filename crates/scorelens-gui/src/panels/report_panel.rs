/// Report panel -- the scrolling dashboard body.
///
/// Shows one of three things: a prompt when nothing is loaded, the error
/// from the last run, or every section of the current report in order.
use super::{group_panel, outlier_panel};
use crate::state::{AppPhase, AppState};
use crate::theme::ScoreLensTheme;
use crate::widgets::{data_table, histogram_chart, scatter_chart};
use egui::Ui;
use scorelens_core::{PipelineError, Report, Section};

/// Draw the body of the window for the current phase.
pub fn report_panel(ui: &mut Ui, state: &AppState) {
    let theme = ScoreLensTheme::for_mode(state.dark_mode);
    match (state.phase, &state.report, &state.error) {
        (AppPhase::Results, Some(report), _) => sections(ui, report, &theme),
        (AppPhase::Failed, _, Some(err)) => error_view(ui, err, &theme),
        _ => idle_view(ui, state, &theme),
    }
}

fn idle_view(ui: &mut Ui, state: &AppState, theme: &ScoreLensTheme) {
    ui.add_space(80.0);
    ui.vertical_centered(|ui| {
        let prompt = if state.file_hovering {
            "Release to load the file"
        } else {
            "Drop a CSV file here, or enter its path above and press Open."
        };
        ui.label(egui::RichText::new(prompt).size(16.0).color(theme.text));
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(
                "Expected columns: math score, reading score, writing score \
                 (labels are case- and space-insensitive).",
            )
            .size(12.0)
            .color(theme.text_muted),
        );
    });
}

fn error_view(ui: &mut Ui, err: &PipelineError, theme: &ScoreLensTheme) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("⚠ {}", err.kind()))
                .size(20.0)
                .strong()
                .color(theme.error),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new(err.to_string()).size(13.0).color(theme.text));
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Fix the file and press Reload, or open another file.")
                .size(12.0)
                .color(theme.text_muted),
        );
    });
}

fn sections(ui: &mut Ui, report: &Report, theme: &ScoreLensTheme) {
    for (i, section) in report.sections().into_iter().enumerate() {
        if i > 0 {
            ui.add_space(12.0);
            ui.separator();
        }
        ui.heading(section.title());
        ui.add_space(6.0);

        match section {
            Section::Preview(table) => {
                data_table::data_table(ui, "preview_table", table, theme);
            }
            Section::Histogram(histogram) => {
                histogram_chart::histogram_chart(
                    ui,
                    histogram,
                    "Average Score",
                    "Number of Students",
                    theme,
                );
            }
            Section::Scatter(series) => {
                ui.push_id(series.title, |ui| {
                    scatter_chart::scatter_chart(ui, series, theme);
                });
            }
            Section::Outliers(view) => {
                outlier_panel::outlier_panel(ui, report, view, theme);
            }
            Section::Groups(summary) => {
                group_panel::group_panel(ui, summary, theme);
            }
        }
    }
    ui.add_space(16.0);
}

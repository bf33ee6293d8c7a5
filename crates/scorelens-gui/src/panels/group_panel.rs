/// Group panel -- Pass/Fail proportions per group as a table and a stacked bar chart.
use crate::theme::ScoreLensTheme;
use crate::widgets::stacked_bar_chart;
use egui::Ui;
use scorelens_core::analysis::GroupSummary;
use scorelens_core::model::format::{format_count, format_percent};
use scorelens_core::model::Outcome;

pub fn group_panel(ui: &mut Ui, summary: &GroupSummary, theme: &ScoreLensTheme) {
    egui::Grid::new("group_grid")
        .num_columns(4)
        .spacing([24.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label(egui::RichText::new(summary.column.as_str()).strong());
            ui.label(egui::RichText::new("Rows").strong());
            for outcome in Outcome::STACK_ORDER {
                ui.label(
                    egui::RichText::new(outcome.label())
                        .strong()
                        .color(theme.outcome(outcome)),
                );
            }
            ui.end_row();

            for group in &summary.groups {
                ui.label(group.group.as_str());
                ui.label(format_count(group.count as u64));
                for outcome in Outcome::STACK_ORDER {
                    ui.label(format_percent(group.share(outcome)));
                }
                ui.end_row();
            }
        });

    ui.add_space(10.0);
    stacked_bar_chart::stacked_bar_chart(ui, summary, "Proportion", theme);
}

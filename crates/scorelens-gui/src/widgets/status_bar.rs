/// Bottom status bar -- load outcome and dataset statistics.
use crate::state::{AppPhase, AppState};
use crate::theme::ScoreLensTheme;
use egui::{Color32, Ui};
use scorelens_core::model::format::{format_count, format_percent};
use scorelens_core::model::Outcome;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let theme = ScoreLensTheme::for_mode(state.dark_mode);
    let color_error = phase_color(AppPhase::Failed, &theme);
    let color_success = phase_color(AppPhase::Results, &theme);

    ui.horizontal(|ui| match state.phase {
        AppPhase::Idle => {
            ui.label(egui::RichText::new("Ready").size(12.0).color(color_weak));
        }
        AppPhase::Failed => {
            let kind = state.error.as_ref().map_or("Error", |e| e.kind());
            ui.label(
                egui::RichText::new(format!("\u{2717} {kind}"))
                    .size(12.0)
                    .color(color_error),
            );
            if let Some(ref input) = state.last_input {
                ui.separator();
                ui.label(
                    egui::RichText::new(truncate_path(&input.name, 60))
                        .size(12.0)
                        .color(color_normal),
                );
            }
        }
        AppPhase::Results => {
            let Some(ref report) = state.report else {
                return;
            };
            ui.label(
                egui::RichText::new("\u{2713} Loaded")
                    .size(12.0)
                    .color(color_success),
            );

            ui.separator();
            ui.label(
                egui::RichText::new(truncate_path(&report.source, 60))
                    .size(12.0)
                    .color(color_normal),
            );

            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "{} rows",
                    format_count(report.row_count() as u64)
                ))
                .size(12.0)
                .color(color_normal),
            );

            if let Some(rate) = state.pass_rate() {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{} pass", format_percent(rate)))
                        .size(12.0)
                        .color(color_accent),
                );
            }

            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "{} outliers",
                    format_count(report.outliers.len() as u64)
                ))
                .size(12.0)
                .color(color_normal),
            );

            if let Some(duration) = state.last_run_duration {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{:.0} ms", duration.as_secs_f64() * 1000.0))
                        .size(12.0)
                        .color(color_weak),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(report.loaded_at.format("%H:%M:%S").to_string())
                        .size(11.0)
                        .color(color_weak),
                );
            });
        }
    });
}

/// Badge colour for a phase, from the active theme.
fn phase_color(phase: AppPhase, theme: &ScoreLensTheme) -> Color32 {
    match phase {
        AppPhase::Idle => theme.text_muted,
        AppPhase::Results => theme.outcome(Outcome::Pass),
        AppPhase::Failed => theme.error,
    }
}

/// Truncate a string to at most `max_len` characters, replacing the middle
/// with "..." if needed.
fn truncate_path(path: &str, max_len: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_len {
        return path.to_string();
    }
    let half = (max_len - 3) / 2;
    let head: String = chars[..half].iter().collect();
    let tail: String = chars[chars.len() - half..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_colours_follow_theme() {
        let light = ScoreLensTheme::light();
        assert_eq!(phase_color(AppPhase::Failed, &light), light.error);
        assert_eq!(phase_color(AppPhase::Results, &light), light.outcome(Outcome::Pass));
        let dark = ScoreLensTheme::dark();
        assert_eq!(phase_color(AppPhase::Failed, &dark), dark.error);
        assert_ne!(
            phase_color(AppPhase::Failed, &dark),
            phase_color(AppPhase::Failed, &light)
        );
    }

    #[test]
    fn short_paths_are_untouched() {
        assert_eq!(truncate_path("students.csv", 60), "students.csv");
    }

    #[test]
    fn long_paths_keep_both_ends() {
        let long = format!("C:/{}/StudentsPerformance.csv", "x".repeat(80));
        let short = truncate_path(&long, 30);
        assert_eq!(short.chars().count(), 29);
        assert!(short.starts_with("C:/"));
        assert!(short.ends_with("ance.csv"));
        assert!(short.contains("..."));
    }
}

/// Top action bar -- input path, load and reload controls, theme toggle, and branding.
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("📊 ScoreLens")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // Path field. Enter loads, same as the Open button.
        let field = ui.add(
            egui::TextEdit::singleline(&mut state.path_input)
                .hint_text("Path to a CSV file, or drop one onto the window")
                .desired_width(360.0),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let can_open = !state.path_input.trim().is_empty();
        let open_btn = ui
            .add_enabled(
                can_open,
                egui::Button::new("📂 Open").min_size(egui::vec2(70.0, 28.0)),
            )
            .on_hover_text("Load the file named in the path field");
        if (open_btn.clicked() || submitted) && can_open {
            state.load_path_input();
        }

        let can_reload = state.can_reload();
        if ui
            .add_enabled(can_reload, egui::Button::new("🔄 Reload"))
            .on_hover_text(if can_reload {
                "Re-read the last file and rebuild the dashboard"
            } else {
                "Load a file first to enable reload"
            })
            .clicked()
        {
            state.reload();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About ScoreLens").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }
        });
    });
}

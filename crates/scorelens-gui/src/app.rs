/// Main `eframe::App` implementation for ScoreLens.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::AppState;
use crate::widgets;
use std::path::PathBuf;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that a file
/// named on the command line is already loaded when the window first paints.
pub struct ScoreLensState {
    pub(crate) inner: AppState,
}

impl ScoreLensState {
    /// Build state, loading `initial` if one was given.
    pub fn build(initial: Option<PathBuf>) -> Self {
        let mut state = AppState::new();
        if let Some(path) = initial {
            tracing::info!("Loading {} on startup", path.display());
            state.load_path(&path);
        }
        Self { inner: state }
    }

    /// The state the window will start from.
    pub fn state(&self) -> &AppState {
        &self.inner
    }
}

/// The ScoreLens application.
pub struct ScoreLensApp {
    state: AppState,
}

impl ScoreLensApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: ScoreLensState) -> Self {
        let visuals = if state.inner.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);

        Self { state: state.inner }
    }

    /// Load any file dropped onto the window this frame.
    ///
    /// On the web and some platforms only bytes are available; on desktop
    /// only the path is.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        self.state.file_hovering = hovering;

        // Only the first file counts when several are dropped at once.
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        if let Some(bytes) = file.bytes {
            tracing::info!("Dropped file {} ({} bytes)", file.name, bytes.len());
            self.state.path_input = file.name.clone();
            self.state.load_bytes(file.name, bytes.to_vec());
        } else if let Some(path) = file.path {
            tracing::info!("Dropped file {}", path.display());
            self.state.load_path(&path);
        }
    }
}

impl eframe::App for ScoreLensApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.handle_dropped_files(ctx);

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About ScoreLens")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("📊 ScoreLens")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "A dashboard for student exam scores.\n\
                             Score distribution, subject scatter plots,\n\
                             outliers, and pass rates by group.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "Pass threshold: average ≥ {}",
                            self.state.config.pass_threshold
                        ))
                        .size(11.0)
                        .color(muted),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Central panel (dashboard) ─────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::report_panel::report_panel(ui, &self.state);
                });
        });
    }
}

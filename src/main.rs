//! ScoreLens -- student exam score dashboard.
//!
//! Thin binary entry point. All logic lives in the `scorelens-core`
//! and `scorelens-gui` crates.
//!
//! Usage: `ScoreLens [path/to/scores.csv]`

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("ScoreLens starting");

    let icon = scorelens_gui::icon::generate_icon(64);

    // Load any file given on the command line before the window opens so the
    // first frame already shows the dashboard.
    let initial = std::env::args_os().nth(1).map(PathBuf::from);
    let state = scorelens_gui::ScoreLensState::build(initial);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("ScoreLens -- Student Performance Dashboard")
            .with_inner_size([1180.0, 860.0])
            .with_min_inner_size([760.0, 520.0])
            .with_icon(icon)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "ScoreLens",
        options,
        Box::new(|cc| {
            Ok(Box::new(scorelens_gui::ScoreLensApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}

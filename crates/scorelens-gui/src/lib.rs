/// ScoreLens GUI -- egui-based desktop frontend.
///
/// This crate contains all UI code. Data logic lives in `scorelens-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{ScoreLensApp, ScoreLensState};

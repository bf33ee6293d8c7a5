/// Colour scheme for ScoreLens charts and tables.
///
/// Outcome colours come from `Outcome::rgb` so every chart, table cell, and
/// legend uses the same green/red. Everything else here is chart chrome
/// (plot background, grid, axes) tuned for dark and light mode.
use egui::Color32;
use scorelens_core::model::Outcome;

/// Semantic colour palette for charts.
#[derive(Debug, Clone, Copy)]
pub struct ScoreLensTheme {
    pub plot_bg: Color32,
    pub grid: Color32,
    pub axis: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub bar_outline: Color32,
}

impl ScoreLensTheme {
    /// Dark theme, the default.
    pub fn dark() -> Self {
        Self {
            plot_bg: Color32::from_rgb(0x20, 0x20, 0x2a),
            grid: Color32::from_rgb(0x33, 0x33, 0x44),
            axis: Color32::from_rgb(0x8a, 0x8a, 0x9a),
            text: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            text_muted: Color32::from_rgb(0x9a, 0x9c, 0xae),
            accent: Color32::from_rgb(0x89, 0xb4, 0xfa),
            error: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            bar_outline: Color32::from_rgb(0x1e, 0x1e, 0x2e),
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            plot_bg: Color32::from_rgb(0xfa, 0xfa, 0xfc),
            grid: Color32::from_rgb(0xe0, 0xe0, 0xe8),
            axis: Color32::from_rgb(0x5a, 0x5a, 0x6a),
            text: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            text_muted: Color32::from_rgb(0x6a, 0x6a, 0x7a),
            accent: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            error: Color32::from_rgb(0xd0, 0x40, 0x50),
            bar_outline: Color32::WHITE,
        }
    }

    /// Get the theme for the current mode.
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Fill colour for an outcome: Pass green, Fail red.
    pub fn outcome(&self, outcome: Outcome) -> Color32 {
        let [r, g, b] = outcome.rgb();
        Color32::from_rgb(r, g, b)
    }

    /// Outcome colour with transparency, for overlapping scatter points.
    pub fn outcome_translucent(&self, outcome: Outcome) -> Color32 {
        let [r, g, b] = outcome.rgb();
        Color32::from_rgba_unmultiplied(r, g, b, 0xb0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_colours_match_core_palette() {
        let theme = ScoreLensTheme::dark();
        let pass = theme.outcome(Outcome::Pass);
        let fail = theme.outcome(Outcome::Fail);
        assert!(pass.g() > pass.r(), "Pass must be green");
        assert!(fail.r() > fail.g(), "Fail must be red");
        assert_eq!(pass, ScoreLensTheme::light().outcome(Outcome::Pass));
    }
}

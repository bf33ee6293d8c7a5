/// Shared chart chrome: plot area allocation, data-to-screen mapping, axes
/// with tick labels, and the Pass/Fail legend.
///
/// Every chart widget allocates a [`ChartFrame`], draws the grid and axes,
/// paints its marks on top through [`ChartFrame::to_screen`], and finishes
/// with the legend.
use crate::theme::ScoreLensTheme;
use egui::{Align2, FontId, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};
use scorelens_core::model::format::format_number;
use scorelens_core::model::Outcome;

/// Space reserved around the plot area for tick labels and axis titles.
const MARGIN_LEFT: f32 = 58.0;
const MARGIN_BOTTOM: f32 = 42.0;
const MARGIN_TOP: f32 = 26.0;
const MARGIN_RIGHT: f32 = 14.0;

/// Roughly how many ticks to aim for per axis.
const TARGET_TICKS: usize = 6;

/// Plot area on screen plus the data ranges it maps.
#[derive(Debug, Clone, Copy)]
pub struct ChartFrame {
    /// Whole widget rect, margins included.
    pub outer: Rect,
    /// Inner plot area where marks are drawn.
    pub plot: Rect,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl ChartFrame {
    /// Allocate a full-width chart of `height` pixels and paint its background.
    pub fn allocate(
        ui: &mut Ui,
        height: f32,
        x_range: (f64, f64),
        y_range: (f64, f64),
        theme: &ScoreLensTheme,
    ) -> (Self, Response, Painter) {
        let width = ui.available_width().max(240.0);
        let (outer, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
        let painter = ui.painter_at(outer);

        let plot = Rect::from_min_max(
            Pos2::new(outer.left() + MARGIN_LEFT, outer.top() + MARGIN_TOP),
            Pos2::new(outer.right() - MARGIN_RIGHT, outer.bottom() - MARGIN_BOTTOM),
        );
        painter.rect_filled(plot, 2.0, theme.plot_bg);

        let frame = Self {
            outer,
            plot,
            x_range: widen(x_range),
            y_range: widen(y_range),
        };
        (frame, response, painter)
    }

    pub fn x_to_screen(&self, x: f64) -> f32 {
        let (lo, hi) = self.x_range;
        let t = ((x - lo) / (hi - lo)) as f32;
        self.plot.left() + t * self.plot.width()
    }

    pub fn y_to_screen(&self, y: f64) -> f32 {
        let (lo, hi) = self.y_range;
        let t = ((y - lo) / (hi - lo)) as f32;
        self.plot.bottom() - t * self.plot.height()
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        Pos2::new(self.x_to_screen(x), self.y_to_screen(y))
    }

    /// Draw grid lines, tick labels, and axis titles.
    pub fn draw_axes(
        &self,
        painter: &Painter,
        theme: &ScoreLensTheme,
        x_label: &str,
        y_label: &str,
        y_format: fn(f64) -> String,
    ) {
        let tick_font = FontId::proportional(11.0);
        let grid = Stroke::new(1.0, theme.grid);

        for y in nice_ticks(self.y_range.0, self.y_range.1, TARGET_TICKS) {
            let sy = self.y_to_screen(y);
            painter.hline(self.plot.x_range(), sy, grid);
            painter.text(
                Pos2::new(self.plot.left() - 6.0, sy),
                Align2::RIGHT_CENTER,
                y_format(y),
                tick_font.clone(),
                theme.text_muted,
            );
        }

        for x in nice_ticks(self.x_range.0, self.x_range.1, TARGET_TICKS) {
            let sx = self.x_to_screen(x);
            painter.vline(sx, self.plot.y_range(), grid);
            painter.text(
                Pos2::new(sx, self.plot.bottom() + 4.0),
                Align2::CENTER_TOP,
                format_number(x),
                tick_font.clone(),
                theme.text_muted,
            );
        }

        let axis = Stroke::new(1.0, theme.axis);
        painter.hline(self.plot.x_range(), self.plot.bottom(), axis);
        painter.vline(self.plot.left(), self.plot.y_range(), axis);

        let title_font = FontId::proportional(12.0);
        painter.text(
            Pos2::new(self.plot.center().x, self.outer.bottom() - 4.0),
            Align2::CENTER_BOTTOM,
            x_label,
            title_font.clone(),
            theme.text,
        );
        // egui cannot rotate text, so the y title sits above the axis.
        painter.text(
            Pos2::new(self.outer.left() + 4.0, self.outer.top() + 4.0),
            Align2::LEFT_TOP,
            y_label,
            title_font,
            theme.text,
        );
    }

    /// Draw a Pass/Fail legend in the top-right corner of the widget.
    pub fn draw_legend(&self, painter: &Painter, theme: &ScoreLensTheme) {
        let font = FontId::proportional(11.0);
        let mut x = self.outer.right() - MARGIN_RIGHT;
        let y = self.outer.top() + 12.0;
        // Right to left, so Pass ends up rightmost.
        for outcome in Outcome::STACK_ORDER.iter().rev() {
            let galley =
                painter.layout_no_wrap(outcome.label().to_string(), font.clone(), theme.text);
            x -= galley.size().x;
            painter.galley(Pos2::new(x, y - galley.size().y / 2.0), galley, theme.text);
            x -= 14.0;
            let swatch = Rect::from_center_size(Pos2::new(x + 5.0, y), Vec2::splat(10.0));
            painter.rect_filled(swatch, 2.0, theme.outcome(*outcome));
            x -= 12.0;
        }
    }

    /// Whether `pos` lies inside the plot area.
    pub fn contains(&self, pos: Pos2) -> bool {
        self.plot.contains(pos)
    }
}

/// Give a degenerate range some width so the mapping never divides by zero.
fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, lo + 0.5)
    }
}

/// "Nice" tick positions covering `[lo, hi]`: steps of 1, 2, or 5 times a
/// power of ten, giving about `target` ticks.
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !(hi > lo) || !lo.is_finite() || !hi.is_finite() || target == 0 {
        return Vec::new();
    }
    let raw = (hi - lo) / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Tick label for count axes: integers only.
pub fn format_tick_count(v: f64) -> String {
    format!("{}", v.round() as i64)
}

/// Tick label for proportion axes.
pub fn format_tick_share(v: f64) -> String {
    format!("{v:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(nice_ticks(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        let unit = nice_ticks(0.0, 1.0, 5);
        assert_eq!(unit.len(), 6);
        for (tick, expected) in unit.iter().zip([0.0, 0.2, 0.4, 0.6, 0.8, 1.0]) {
            assert!((tick - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn ticks_stay_inside_range() {
        let ticks = nice_ticks(17.3, 93.8, 6);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|&t| (17.3..=93.8).contains(&t)));
        assert_eq!(ticks[0], 20.0);
    }

    #[test]
    fn empty_or_inverted_range_has_no_ticks() {
        assert!(nice_ticks(5.0, 5.0, 6).is_empty());
        assert!(nice_ticks(9.0, 1.0, 6).is_empty());
        assert!(nice_ticks(f64::NAN, 1.0, 6).is_empty());
    }

    #[test]
    fn degenerate_range_is_widened() {
        assert_eq!(widen((3.0, 3.0)), (2.5, 3.5));
        assert_eq!(widen((0.0, 4.0)), (0.0, 4.0));
    }
}

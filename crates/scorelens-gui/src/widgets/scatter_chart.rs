/// Scatter plot of one score against another, points coloured by outcome.
use super::chart_frame::ChartFrame;
use crate::theme::ScoreLensTheme;
use egui::{Stroke, Ui};
use scorelens_core::analysis::{ScatterPoint, ScatterSeries};
use scorelens_core::model::format::format_number;

const CHART_HEIGHT: f32 = 320.0;
const POINT_RADIUS: f32 = 3.5;

/// Pointer distance (px) within which a point counts as hovered.
const HOVER_RADIUS: f32 = 8.0;

/// Draw a scatter series. The nearest point under the pointer gets a tooltip.
pub fn scatter_chart(ui: &mut Ui, series: &ScatterSeries, theme: &ScoreLensTheme) {
    let Some((x0, x1, y0, y1)) = series.bounds() else {
        ui.label(egui::RichText::new("No rows to plot.").color(theme.text_muted));
        return;
    };
    let pad = |lo: f64, hi: f64| {
        let p = ((hi - lo) * 0.04).max(1.0);
        (lo - p, hi + p)
    };
    let (frame, response, painter) =
        ChartFrame::allocate(ui, CHART_HEIGHT, pad(x0, x1), pad(y0, y1), theme);

    frame.draw_axes(
        &painter,
        theme,
        series.x_label,
        series.y_label,
        format_number,
    );

    for point in &series.points {
        painter.circle_filled(
            frame.to_screen(point.x, point.y),
            POINT_RADIUS,
            theme.outcome_translucent(point.outcome),
        );
    }

    frame.draw_legend(&painter, theme);

    // ── Hover ──────────────────────────────────────────────────────
    let Some(pos) = response.hover_pos().filter(|p| frame.contains(*p)) else {
        return;
    };
    let nearest = series
        .points
        .iter()
        .map(|p| (p, frame.to_screen(p.x, p.y).distance(pos)))
        .filter(|(_, d)| *d <= HOVER_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1));
    let Some((point, _)) = nearest else {
        return;
    };

    painter.circle_stroke(
        frame.to_screen(point.x, point.y),
        POINT_RADIUS + 2.0,
        Stroke::new(1.5, theme.accent),
    );
    point_tooltip(ui, response.id, series, point, theme);
}

fn point_tooltip(
    ui: &Ui,
    id: egui::Id,
    series: &ScatterSeries,
    point: &ScatterPoint,
    theme: &ScoreLensTheme,
) {
    egui::show_tooltip_at_pointer(ui.ctx(), ui.layer_id(), id.with("scatter_tip"), |ui| {
        ui.label(
            egui::RichText::new(format!("Row {}", point.row + 1))
                .strong()
                .size(12.0),
        );
        ui.label(format!("{}: {}", series.x_label, format_number(point.x)));
        ui.label(format!("{}: {}", series.y_label, format_number(point.y)));
        ui.label(egui::RichText::new(point.outcome.label()).color(theme.outcome(point.outcome)));
    });
}

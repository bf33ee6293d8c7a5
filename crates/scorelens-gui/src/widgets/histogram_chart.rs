/// Stacked histogram of average scores, Fail on the bottom and Pass on top.
use super::chart_frame::{format_tick_count, ChartFrame};
use crate::theme::ScoreLensTheme;
use egui::{Pos2, Rect, Stroke, Ui};
use scorelens_core::analysis::Histogram;
use scorelens_core::model::format::format_number;
use scorelens_core::model::Outcome;

const CHART_HEIGHT: f32 = 300.0;

/// Draw the histogram. Hovering a bar shows its range and per-outcome counts.
pub fn histogram_chart(
    ui: &mut Ui,
    histogram: &Histogram,
    x_label: &str,
    y_label: &str,
    theme: &ScoreLensTheme,
) {
    let Some(x_range) = histogram.range() else {
        ui.label(egui::RichText::new("No rows to plot.").color(theme.text_muted));
        return;
    };
    let y_max = (histogram.max_total() as f64 * 1.08).max(1.0);
    let (frame, response, painter) =
        ChartFrame::allocate(ui, CHART_HEIGHT, x_range, (0.0, y_max), theme);

    frame.draw_axes(&painter, theme, x_label, y_label, format_tick_count);

    let outline = Stroke::new(0.5, theme.bar_outline);
    let mut bar_rects = Vec::with_capacity(histogram.bins.len());
    for bin in &histogram.bins {
        let left = frame.x_to_screen(bin.start);
        let right = frame.x_to_screen(bin.end);
        let mut base = 0usize;
        for outcome in Outcome::STACK_ORDER {
            let count = bin.count(outcome);
            if count == 0 {
                continue;
            }
            let rect = Rect::from_min_max(
                Pos2::new(left, frame.y_to_screen((base + count) as f64)),
                Pos2::new(right, frame.y_to_screen(base as f64)),
            );
            painter.rect_filled(rect, 0.0, theme.outcome(outcome));
            painter.rect_stroke(rect, 0.0, outline, egui::StrokeKind::Inside);
            base += count;
        }
        bar_rects.push(Rect::from_min_max(
            Pos2::new(left, frame.plot.top()),
            Pos2::new(right, frame.plot.bottom()),
        ));
    }

    frame.draw_legend(&painter, theme);

    // ── Hover ──────────────────────────────────────────────────────
    let Some(pos) = response.hover_pos().filter(|p| frame.contains(*p)) else {
        return;
    };
    let Some((bin, column)) = histogram
        .bins
        .iter()
        .zip(&bar_rects)
        .find(|(_, r)| r.x_range().contains(pos.x))
    else {
        return;
    };

    let top = frame.y_to_screen(bin.total() as f64);
    let highlight = Rect::from_min_max(Pos2::new(column.left(), top), column.right_bottom());
    painter.rect_stroke(
        highlight,
        0.0,
        Stroke::new(2.0, theme.accent),
        egui::StrokeKind::Inside,
    );

    egui::show_tooltip_at_pointer(
        ui.ctx(),
        ui.layer_id(),
        response.id.with("histogram_tip"),
        |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{} – {}",
                    format_number(bin.start),
                    format_number(bin.end)
                ))
                .strong()
                .size(12.0),
            );
            for outcome in Outcome::STACK_ORDER.iter().rev() {
                ui.label(
                    egui::RichText::new(format!("{}: {}", outcome.label(), bin.count(*outcome)))
                        .color(theme.outcome(*outcome)),
                );
            }
        },
    );
}

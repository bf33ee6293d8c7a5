/// Stacked proportion bars, one per group, Fail on the bottom and Pass on top.
use super::chart_frame::{format_tick_share, ChartFrame};
use crate::theme::ScoreLensTheme;
use egui::{Align2, FontId, Pos2, Rect, Stroke, Ui};
use scorelens_core::analysis::GroupSummary;
use scorelens_core::model::format::format_percent;
use scorelens_core::model::Outcome;

const CHART_HEIGHT: f32 = 280.0;

/// Fraction of each slot taken by its bar.
const BAR_FILL: f64 = 0.6;

/// Draw one stacked bar per group on a 0..1 proportion axis.
pub fn stacked_bar_chart(
    ui: &mut Ui,
    summary: &GroupSummary,
    y_label: &str,
    theme: &ScoreLensTheme,
) {
    if summary.groups.is_empty() {
        ui.label(egui::RichText::new("No groups to plot.").color(theme.text_muted));
        return;
    }

    // Group i occupies the slot [i, i + 1] on the x axis.
    let slots = summary.groups.len() as f64;
    let (frame, response, painter) =
        ChartFrame::allocate(ui, CHART_HEIGHT, (0.0, slots), (0.0, 1.0), theme);

    draw_y_axis(&frame, &painter, theme, y_label);

    let outline = Stroke::new(0.5, theme.bar_outline);
    let mut bars = Vec::with_capacity(summary.groups.len());
    for (i, group) in summary.groups.iter().enumerate() {
        let left = frame.x_to_screen(i as f64 + (1.0 - BAR_FILL) / 2.0);
        let right = frame.x_to_screen(i as f64 + (1.0 + BAR_FILL) / 2.0);

        let mut base = 0.0;
        for outcome in Outcome::STACK_ORDER {
            let share = group.share(outcome);
            if share <= 0.0 {
                continue;
            }
            let rect = Rect::from_min_max(
                Pos2::new(left, frame.y_to_screen(base + share)),
                Pos2::new(right, frame.y_to_screen(base)),
            );
            painter.rect_filled(rect, 0.0, theme.outcome(outcome));
            painter.rect_stroke(rect, 0.0, outline, egui::StrokeKind::Inside);
            base += share;
        }

        painter.text(
            Pos2::new((left + right) / 2.0, frame.plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            group.group.as_str(),
            FontId::proportional(11.0),
            theme.text_muted,
        );
        bars.push(Rect::from_min_max(
            Pos2::new(left, frame.plot.top()),
            Pos2::new(right, frame.plot.bottom()),
        ));
    }

    painter.text(
        Pos2::new(frame.plot.center().x, frame.outer.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        summary.column.as_str(),
        FontId::proportional(12.0),
        theme.text,
    );
    frame.draw_legend(&painter, theme);

    // ── Hover ──────────────────────────────────────────────────────
    let Some(pos) = response.hover_pos() else {
        return;
    };
    let Some((group, bar)) = summary.groups.iter().zip(&bars).find(|(_, r)| r.contains(pos))
    else {
        return;
    };
    painter.rect_stroke(
        *bar,
        0.0,
        Stroke::new(2.0, theme.accent),
        egui::StrokeKind::Inside,
    );
    egui::show_tooltip_at_pointer(ui.ctx(), ui.layer_id(), response.id.with("bar_tip"), |ui| {
        ui.label(
            egui::RichText::new(format!("{} ({} rows)", group.group, group.count))
                .strong()
                .size(12.0),
        );
        for outcome in Outcome::STACK_ORDER.iter().rev() {
            ui.label(
                egui::RichText::new(format!(
                    "{}: {}",
                    outcome.label(),
                    format_percent(group.share(*outcome))
                ))
                .color(theme.outcome(*outcome)),
            );
        }
    });
}

/// Proportion gridlines and labels only; the x axis is categorical.
fn draw_y_axis(frame: &ChartFrame, painter: &egui::Painter, theme: &ScoreLensTheme, label: &str) {
    let grid = Stroke::new(1.0, theme.grid);
    for step in 0..=5 {
        let y = step as f64 * 0.2;
        let sy = frame.y_to_screen(y);
        painter.hline(frame.plot.x_range(), sy, grid);
        painter.text(
            Pos2::new(frame.plot.left() - 6.0, sy),
            Align2::RIGHT_CENTER,
            format_tick_share(y),
            FontId::proportional(11.0),
            theme.text_muted,
        );
    }
    let axis = Stroke::new(1.0, theme.axis);
    painter.hline(frame.plot.x_range(), frame.plot.bottom(), axis);
    painter.vline(frame.plot.left(), frame.plot.y_range(), axis);
    painter.text(
        Pos2::new(frame.outer.left() + 4.0, frame.outer.top() + 4.0),
        Align2::LEFT_TOP,
        label,
        FontId::proportional(12.0),
        theme.text,
    );
}

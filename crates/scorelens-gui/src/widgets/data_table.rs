/// Record table widget built on `egui_extras::TableBuilder`.
///
/// Used for both the preview and the outlier rows. The `result` column, when
/// present, is tinted with its outcome colour.
use crate::theme::ScoreLensTheme;
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use scorelens_core::analysis::RESULT_COLUMN;
use scorelens_core::model::{Outcome, RecordTable, Value};

const ROW_HEIGHT: f32 = 20.0;
const HEADER_HEIGHT: f32 = 22.0;
const MAX_HEIGHT: f32 = 280.0;

/// Draw `table` under a unique `id_salt` so several tables can share a page.
pub fn data_table(ui: &mut Ui, id_salt: &str, table: &RecordTable, theme: &ScoreLensTheme) {
    let result_idx = table.column_index(RESULT_COLUMN);

    ui.push_id(id_salt, |ui| {
        egui::ScrollArea::horizontal().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .vscroll(true)
                .max_scroll_height(MAX_HEIGHT)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(44.0))
                .columns(
                    Column::auto().at_least(64.0).clip(true),
                    table.column_count(),
                )
                .header(HEADER_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.label(egui::RichText::new("#").strong().color(theme.text_muted));
                    });
                    for name in table.columns() {
                        header.col(|ui| {
                            ui.label(egui::RichText::new(name.as_str()).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, table.len(), |mut row| {
                        let idx = row.index();
                        let cells = &table.rows()[idx];
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new((idx + 1).to_string())
                                    .color(theme.text_muted)
                                    .size(11.0),
                            );
                        });
                        for (col, value) in cells.iter().enumerate() {
                            row.col(|ui| {
                                let text = egui::RichText::new(value.to_string());
                                let text = match outcome_of(value) {
                                    Some(outcome) if Some(col) == result_idx => {
                                        text.color(theme.outcome(outcome)).strong()
                                    }
                                    _ => text,
                                };
                                ui.label(text);
                            });
                        }
                    });
                });
        });
    });
}

/// Parse a `result` cell back into its outcome.
fn outcome_of(value: &Value) -> Option<Outcome> {
    match value {
        Value::Text(s) if s.as_str() == Outcome::Pass.label() => Some(Outcome::Pass),
        Value::Text(s) if s.as_str() == Outcome::Fail.label() => Some(Outcome::Fail),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    #[test]
    fn result_cells_map_to_outcomes() {
        assert_eq!(
            outcome_of(&Value::Text(CompactString::new("Pass"))),
            Some(Outcome::Pass)
        );
        assert_eq!(
            outcome_of(&Value::Text(CompactString::new("Fail"))),
            Some(Outcome::Fail)
        );
        assert_eq!(outcome_of(&Value::Text(CompactString::new("pass"))), None);
        assert_eq!(outcome_of(&Value::Number(50.0)), None);
    }
}

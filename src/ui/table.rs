use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::export;
use crate::data::model::Table;
use crate::data::ops;
use crate::state::{AppState, Status};

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 22.0;
const MAX_TABLE_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Sortable data table
// ---------------------------------------------------------------------------

/// Render `table` with clickable headers (sort) and an export button.
///
/// `id` must be unique on the page; it keys the sort state as well.
pub fn data_table(ui: &mut Ui, state: &mut AppState, id: &str, table: &Table) {
    let sort = state
        .sort_for(id)
        .filter(|s| s.column < table.columns.len());
    let order: Vec<usize> = match sort {
        Some(s) => ops::sorted_indices(table, s.column, s.descending),
        None => (0..table.len()).collect(),
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{} rows", table.len()));
        if ui.small_button("Export…").clicked() {
            let displayed = Table::new(
                table.columns.clone(),
                order.iter().map(|&i| table.rows[i].clone()).collect(),
            );
            export_dialog(state, id, &displayed);
        }
    });

    if table.columns.is_empty() {
        ui.label("(no columns)");
        return;
    }

    let mut clicked: Option<usize> = None;

    ui.push_id(id, |ui: &mut Ui| {
        ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .vscroll(true)
                .max_scroll_height(MAX_TABLE_HEIGHT)
                .cell_layout(Layout::left_to_right(Align::Center))
                .columns(Column::auto().at_least(60.0).clip(true), table.columns.len())
                .header(HEADER_HEIGHT, |mut header| {
                    for (idx, name) in table.columns.iter().enumerate() {
                        header.col(|ui: &mut Ui| {
                            let arrow = match sort {
                                Some(s) if s.column == idx && s.descending => " ⬇",
                                Some(s) if s.column == idx => " ⬆",
                                _ => "",
                            };
                            let label = RichText::new(format!("{name}{arrow}")).strong();
                            if ui.add(egui::Button::new(label).frame(false)).clicked() {
                                clicked = Some(idx);
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, order.len(), |mut row| {
                        let cells = &table.rows[order[row.index()]];
                        for cell in cells {
                            row.col(|ui: &mut Ui| {
                                ui.label(cell.to_string());
                            });
                        }
                    });
                });
        });
    });

    if let Some(idx) = clicked {
        state.click_header(id, idx);
    }
}

// ---------------------------------------------------------------------------
// Export dialog
// ---------------------------------------------------------------------------

fn export_dialog(state: &mut AppState, id: &str, table: &Table) {
    let file = rfd::FileDialog::new()
        .set_title("Export table")
        .set_file_name(format!("{id}.csv"))
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match export::export_file(table, &path) {
            Ok(()) => {
                state.status = Some(Status::Info(format!("Exported to {}", path.display())));
            }
            Err(e) => {
                log::error!("Failed to export table: {e:#}");
                state.status = Some(Status::Error(format!("Error: {e:#}")));
            }
        }
    }
}

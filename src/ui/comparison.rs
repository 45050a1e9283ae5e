// src/ui/comparison.rs
use eframe::egui;
use rfd::FileDialog;

use crate::comparison::{Cell, ComparisonTable};
use crate::file::export;
use crate::state::AppState;
use crate::ui::catalog::show_tags;

/// Modal comparison window. Returns true when it was dismissed by its close
/// button or by a click anywhere outside it; the caller closes it after the
/// rest of the frame has been drawn.
pub fn show_comparison_window(ctx: &egui::Context, state: &mut AppState) -> bool {
    let Some(table) = state.comparison.clone() else {
        return false;
    };

    let mut open = true;
    let mut export_clicked = false;

    let response = egui::Window::new("Comparação de Notebooks")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(720.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::ScrollArea::both()
                .id_source("comparison_scroll")
                .show(ui, |ui| show_table(ui, &table));

            ui.add_space(8.0);
            ui.separator();
            if ui.button("💾 Exportar CSV...").clicked() {
                export_clicked = true;
            }
        });

    let clicked_outside = match &response {
        Some(inner) => ctx.input(|i| {
            i.pointer.primary_clicked()
                && i
                    .pointer
                    .interact_pos()
                    .map_or(false, |pos| !inner.response.rect.contains(pos))
        }),
        None => false,
    };

    if export_clicked {
        export_table(state, &table);
    }

    !open || clicked_outside
}

fn show_table(ui: &mut egui::Ui, table: &ComparisonTable) {
    egui::Grid::new("comparison_grid")
        .num_columns(table.columns.len() + 1)
        .striped(true)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            for header in table.header_row() {
                ui.label(egui::RichText::new(header).strong());
            }
            ui.end_row();

            for row in &table.rows {
                ui.label(egui::RichText::new(&row.label).strong());
                for cell in &row.cells {
                    match cell {
                        Cell::Text(text) => {
                            ui.label(text);
                        }
                        Cell::Missing => {
                            ui.label(cell.display_text());
                        }
                        Cell::Tags(tags) => {
                            ui.vertical(|ui| show_tags(ui, tags));
                        }
                    }
                }
                ui.end_row();
            }
        });
}

fn export_table(state: &mut AppState, table: &ComparisonTable) {
    let file_dialog = FileDialog::new()
        .add_filter("CSV files", &["csv"])
        .set_file_name("comparacao.csv")
        .set_title("Export Comparison");

    if let Some(path) = file_dialog.save_file() {
        if let Err(e) = export::save_comparison_csv(table, &path) {
            tracing::error!(error = %e, "Error exporting comparison");
            state.error_message = Some(format!("Error exporting comparison: {:#}", e));
        }
    }
}

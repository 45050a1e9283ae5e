// src/app.rs
use eframe::egui;
use rfd::FileDialog;

use crate::config::Settings;
use crate::file::CatalogSource;
use crate::state::AppState;
use crate::ui::{catalog, comparison, dialog};

pub struct CatalogApp {
    state: AppState,
}

impl CatalogApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let mut app = Self {
            state: AppState::new(settings),
        };
        let source = app.state.source.clone();
        app.load_catalog(&cc.egui_ctx, source);
        app
    }

    fn load_catalog(&mut self, ctx: &egui::Context, source: CatalogSource) {
        let ctx = ctx.clone();
        self.state.start_load(source, move || ctx.request_repaint());
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Catalog...").clicked() {
                    self.open_catalog(ui.ctx());
                    ui.close_menu();
                }
                if ui.button("Reload").clicked() {
                    let source = self.state.source.clone();
                    self.load_catalog(ui.ctx(), source);
                    ui.close_menu();
                }
            });

            ui.separator();
            ui.label(egui::RichText::new(self.state.source.to_string()).weak());
        });
    }

    fn open_catalog(&mut self, ctx: &egui::Context) {
        let file_dialog = FileDialog::new()
            .add_filter("JSON files", &["json"])
            .set_title("Open Catalog File");

        if let Some(path) = file_dialog.pick_file() {
            self.load_catalog(ctx, CatalogSource::Path(path));
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_load();

        // Windows go first so the click that opens the comparison is not
        // also seen as a click outside it
        let dismissed = comparison::show_comparison_window(ctx, &mut self.state);
        dialog::show_messages(ctx, &mut self.state);

        // The comparison is still open here even when this frame's click
        // dismissed it, so that click cannot reach the panels below
        let interactive = self.state.catalog_interactive();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| self.show_menu(ui));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                catalog::show_catalog_view(ui, &mut self.state);
            });
        });

        if dismissed {
            self.state.close_comparison();
        }
    }
}

// src/ui/catalog.rs
use eframe::egui;

use crate::config::{ItemId, ItemRecord, Settings};
use crate::state::filter::ALL;
use crate::state::{AppState, Category, LoadState, Selection};

/// Everything needed to draw the catalog, computed without touching egui.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub count_text: String,
    pub cards: Vec<CardDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardDescriptor {
    pub id: ItemId,
    pub selected: bool,
    pub name: String,
    pub image_ref: Option<String>,
    pub specs: Vec<(&'static str, String)>,
    pub profiles: Vec<String>,
}

pub fn render(items: &[ItemRecord], selection: &Selection, settings: &Settings) -> CatalogView {
    CatalogView {
        count_text: format!("{} notebooks encontrados", items.len()),
        cards: items
            .iter()
            .map(|item| card(item, selection.contains(&item.id), settings))
            .collect(),
    }
}

fn card(item: &ItemRecord, selected: bool, settings: &Settings) -> CardDescriptor {
    CardDescriptor {
        id: item.id.clone(),
        selected,
        name: item.name.clone(),
        image_ref: item.image_ref.clone(),
        specs: vec![
            ("Processador", item.cpu().unwrap_or_default()),
            ("Memória RAM", item.ram().unwrap_or_default()),
            ("Armazenamento", item.ssd().unwrap_or_default()),
            ("Tela", item.screen().unwrap_or_default()),
            ("GPU", item.gpu().unwrap_or_default()),
            (
                "Sistema Operacional",
                item.os().unwrap_or_else(|| settings.default_os.clone()),
            ),
        ],
        profiles: item.recommended_profiles.clone(),
    }
}

pub fn show_catalog_view(ui: &mut egui::Ui, state: &mut AppState) {
    show_toolbar(ui, state);
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    match &state.load_state {
        LoadState::Pending => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Carregando notebooks...");
            });
            return;
        }
        LoadState::Failed(message) => {
            ui.colored_label(egui::Color32::RED, message);
            return;
        }
        LoadState::Ready => {}
    }

    let view = render(state.view(), state.selection(), &state.settings);
    ui.label(egui::RichText::new(&view.count_text).strong());
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_source("catalog_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for card in &view.cards {
                show_card(ui, state, card);
                ui.add_space(4.0);
            }
        });
}

fn show_toolbar(ui: &mut egui::Ui, state: &mut AppState) {
    let ready = state.load_state == LoadState::Ready;

    ui.horizontal(|ui| {
        let current = state.category().clone();
        let mut selected = current.to_string();
        let selected_text = match &current {
            Category::All => "Todos os perfis".to_string(),
            Category::Profile(profile) => profile.clone(),
        };

        ui.add_enabled_ui(ready, |ui| {
            egui::ComboBox::from_label("Perfil")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selected, ALL.to_string(), "Todos os perfis");
                    for option in state.category_options() {
                        ui.selectable_value(&mut selected, option.clone(), option);
                    }
                });
        });

        if selected != current.to_string() {
            state.apply_filter(Category::parse(&selected));
        }

        ui.add_space(16.0);

        let count = state.selection().len();
        let compare = ui.add_enabled(
            state.selection().can_compare(),
            egui::Button::new(format!("Comparar Selecionados ({})", count)),
        );
        if compare.clicked() {
            state.open_comparison();
        }
    });
}

fn show_card(ui: &mut egui::Ui, state: &mut AppState, card: &CardDescriptor) {
    let mut frame = egui::Frame::group(ui.style());
    if card.selected {
        frame = frame
            .fill(ui.visuals().selection.bg_fill.linear_multiply(0.3))
            .stroke(ui.visuals().selection.stroke);
    }

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            let mut checked = card.selected;
            if ui.checkbox(&mut checked, "").changed() {
                // A rejected check leaves the selection untouched, so the box
                // renders unchecked again on the next frame
                let _ = state.toggle_selection(&card.id, checked);
            }
            ui.heading(&card.name);
        });

        if let Some(image) = &card.image_ref {
            ui.label(egui::RichText::new(image).weak().small());
        }

        egui::Grid::new(("card_specs", card.id.to_string()))
            .num_columns(2)
            .spacing([8.0, 2.0])
            .show(ui, |ui| {
                for (label, value) in &card.specs {
                    ui.label(egui::RichText::new(format!("{}:", label)).strong());
                    ui.label(value);
                    ui.end_row();
                }
            });

        ui.add_space(4.0);
        ui.label(egui::RichText::new("Perfis recomendados:").strong());
        show_tags(ui, &card.profiles);
    });
}

pub fn show_tags(ui: &mut egui::Ui, tags: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            egui::Frame::none()
                .fill(ui.visuals().faint_bg_color)
                .rounding(4.0)
                .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(tag).small());
                });
        }
    });
}

// src/comparison/mod.rs
use std::collections::BTreeSet;

use crate::config::item::{self, ItemRecord};

pub const LABEL_COLUMN: &str = "Especificação";
pub const PROFILES_LABEL: &str = "Perfis Recomendados";
pub const PROFILES_KEY: &str = "uso_indicado";
pub const MISSING: &str = "-";

// Rows come out in this order; anything else follows alphabetically
const FIELD_PRIORITY: [&str; 9] = [
    item::CPU,
    item::RAM,
    item::SSD,
    item::SCREEN,
    item::GPU,
    item::OS,
    item::PROS,
    item::CONS,
    item::DESCRIPTION,
];

pub fn field_label(key: &str) -> &str {
    match key {
        item::CPU => "Processador",
        item::RAM => "Memória RAM",
        item::SSD => "Armazenamento",
        item::SCREEN => "Tela",
        item::GPU => "Placa de Vídeo",
        item::OS => "Sistema Operacional",
        item::PROS => "Pontos Positivos",
        item::CONS => "Pontos Negativos",
        item::DESCRIPTION => "Descrição",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Missing,
    Tags(Vec<String>),
}

impl Cell {
    pub fn display_text(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Missing => MISSING.to_string(),
            Cell::Tags(tags) => tags.join("; "),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub key: String,
    pub label: String,
    pub cells: Vec<Cell>,
}

/// Attribute-by-item matrix, one column per selected item.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// The label column followed by one header per item.
    pub fn header_row(&self) -> Vec<String> {
        std::iter::once(LABEL_COLUMN.to_string())
            .chain(self.columns.iter().cloned())
            .collect()
    }
}

/// Builds the comparison for the current selection, or `None` when there are
/// fewer than two items to compare.
pub fn build(selection: &[ItemRecord]) -> Option<ComparisonTable> {
    if selection.len() < 2 {
        return None;
    }

    let columns = selection.iter().map(|item| item.name.clone()).collect();

    let mut rows: Vec<ComparisonRow> = ordered_field_keys(selection)
        .into_iter()
        .map(|key| ComparisonRow {
            label: field_label(&key).to_string(),
            cells: selection
                .iter()
                .map(|item| match item.field_text(&key) {
                    Some(text) => Cell::Text(text),
                    None => Cell::Missing,
                })
                .collect(),
            key,
        })
        .collect();

    rows.push(ComparisonRow {
        key: PROFILES_KEY.to_string(),
        label: PROFILES_LABEL.to_string(),
        cells: selection
            .iter()
            .map(|item| Cell::Tags(item.recommended_profiles.clone()))
            .collect(),
    });

    Some(ComparisonTable { columns, rows })
}

/// Union of field names over the selection. Identity, name, image and
/// profiles are typed on the record and never show up here.
fn ordered_field_keys(selection: &[ItemRecord]) -> Vec<String> {
    let present: BTreeSet<&str> = selection
        .iter()
        .flat_map(|item| item.fields.keys().map(String::as_str))
        .collect();

    let known = FIELD_PRIORITY
        .iter()
        .copied()
        .filter(|key| present.contains(key));
    let unknown = present
        .iter()
        .copied()
        .filter(|key| !FIELD_PRIORITY.contains(key));

    known.chain(unknown).map(str::to_string).collect()
}

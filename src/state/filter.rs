// src/state/filter.rs
use std::fmt;

use crate::config::ItemRecord;

pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    All,
    Profile(String),
}

impl Default for Category {
    fn default() -> Self {
        Category::All
    }
}

impl Category {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case(ALL) {
            Category::All
        } else {
            Category::Profile(value.to_string())
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => f.write_str(ALL),
            Category::Profile(profile) => f.write_str(profile),
        }
    }
}

/// Items recommended for `category`, in catalog order. A profile matches when
/// it contains the category case-insensitively, so "gam" finds "Gamer".
pub fn filter(catalog: &[ItemRecord], category: &Category) -> Vec<ItemRecord> {
    match category {
        Category::All => catalog.to_vec(),
        Category::Profile(profile) => {
            let needle = profile.to_lowercase();
            catalog
                .iter()
                .filter(|item| item.has_profile_matching(&needle))
                .cloned()
                .collect()
        }
    }
}

/// Distinct profile labels in the catalog, sorted case-insensitively.
pub fn catalog_categories(catalog: &[ItemRecord]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for profile in catalog.iter().flat_map(|item| &item.recommended_profiles) {
        let profile = profile.trim();
        if !profile.is_empty() && !categories.iter().any(|c| c.eq_ignore_ascii_case(profile)) {
            categories.push(profile.to_string());
        }
    }
    categories.sort_by_key(|c| c.to_lowercase());
    categories
}

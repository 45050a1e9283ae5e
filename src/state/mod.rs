// src/state/mod.rs
use crate::comparison::{self, ComparisonTable};
use crate::config::{ItemId, ItemRecord, Settings};
use crate::error::{LoadError, SelectionError};
use crate::file::{CatalogLoader, CatalogSource};

pub mod filter;
pub mod selection;

pub use filter::Category;
pub use selection::Selection;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Pending,
    Ready,
    Failed(String),
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub source: CatalogSource,
    pub load_state: LoadState,
    loader: Option<CatalogLoader>,

    // Catalog data, never mutated after load
    catalog: Vec<ItemRecord>,
    category: Category,
    view: Vec<ItemRecord>,
    selection: Selection,

    // Minimal UI state
    pub comparison: Option<ComparisonTable>,
    pub notice: Option<String>,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let source = CatalogSource::parse(&settings.catalog_source);
        let selection = Selection::with_limit(settings.max_compare_items);
        Self {
            settings,
            source,
            load_state: LoadState::Pending,
            loader: None,
            catalog: Vec::new(),
            category: Category::All,
            view: Vec::new(),
            selection,
            comparison: None,
            notice: None,
            error_message: None,
        }
    }

    /// Drops everything derived from the previous catalog and loads `source`
    /// in the background.
    pub fn start_load<F>(&mut self, source: CatalogSource, on_done: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.reset_catalog();
        self.source = source.clone();
        self.loader = Some(CatalogLoader::spawn(source, on_done));
    }

    /// Picks up the background load result, if it has arrived.
    pub fn poll_load(&mut self) {
        let result = match &self.loader {
            Some(loader) => loader.poll(),
            None => return,
        };

        if let Some(result) = result {
            self.loader = None;
            self.finish_load(result);
        }
    }

    pub fn finish_load(&mut self, result: Result<Vec<ItemRecord>, LoadError>) {
        match result {
            Ok(items) => {
                tracing::info!(source = %self.source, count = items.len(), "Catalog loaded");
                self.catalog = items;
                self.category = Category::All;
                self.view = self.catalog.clone();
                self.selection.clear();
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                tracing::error!(source = %self.source, error = %e, "Error loading catalog");
                self.catalog.clear();
                self.view.clear();
                self.load_state = LoadState::Failed(e.user_message().to_string());
            }
        }
    }

    fn reset_catalog(&mut self) {
        self.loader = None;
        self.catalog.clear();
        self.view.clear();
        self.category = Category::All;
        self.selection.clear();
        self.comparison = None;
        self.notice = None;
        self.load_state = LoadState::Pending;
    }

    /// Recomputes the visible items. Any filter change empties the selection.
    pub fn apply_filter(&mut self, category: Category) {
        tracing::debug!(%category, "Applying filter");
        self.view = filter::filter(&self.catalog, &category);
        self.category = category;
        self.selection.clear();
        self.comparison = None;
    }

    /// Ignored while the comparison is open; the catalog sits behind it.
    pub fn toggle_selection(&mut self, id: &ItemId, checked: bool) -> Result<(), SelectionError> {
        if !self.catalog_interactive() {
            return Ok(());
        }
        let Some(item) = self.catalog.iter().find(|item| item.id == *id) else {
            return Ok(());
        };

        let result = self.selection.toggle(item, checked);
        if let Err(e) = &result {
            tracing::warn!(%id, "Selection limit reached");
            self.notice = Some(e.to_string());
        }
        result
    }

    /// Builds the comparison for the current selection. Returns false when
    /// fewer than two items are selected.
    pub fn open_comparison(&mut self) -> bool {
        self.comparison = comparison::build(self.selection.items());
        self.comparison.is_some()
    }

    pub fn close_comparison(&mut self) {
        self.comparison = None;
    }

    /// False while the comparison covers the catalog.
    pub fn catalog_interactive(&self) -> bool {
        self.comparison.is_none()
    }

    pub fn catalog(&self) -> &[ItemRecord] {
        &self.catalog
    }

    pub fn view(&self) -> &[ItemRecord] {
        &self.view
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Filter options: the configured list, or every profile in the catalog.
    pub fn category_options(&self) -> Vec<String> {
        if self.settings.categories.is_empty() {
            filter::catalog_categories(&self.catalog)
        } else {
            self.settings.categories.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::parse_catalog;
    use pretty_assertions::assert_eq;

    const CATALOG: &str = r#"[
        {"id": 1, "name": "A", "cpu": "i5", "ram": "8GB", "uso_indicado": ["Estudo"]},
        {"id": 2, "name": "B", "cpu": "i7", "ram": "16GB", "uso_indicado": ["Jogos"]},
        {"id": 3, "name": "C", "uso_indicado": ["Jogos", "Trabalho"]},
        {"id": 4, "name": "D", "uso_indicado": ["Trabalho"]}
    ]"#;

    fn loaded() -> AppState {
        let mut state = AppState::new(Settings::default());
        state.finish_load(parse_catalog(CATALOG));
        state
    }

    fn ids(items: &[ItemRecord]) -> Vec<ItemId> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_load_success_shows_full_catalog() {
        let state = loaded();
        assert_eq!(state.load_state, LoadState::Ready);
        assert_eq!(state.view().len(), 4);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_load_failure_shows_message_only() {
        let mut state = AppState::new(Settings::default());
        state.finish_load(parse_catalog("not json"));
        assert_eq!(
            state.load_state,
            LoadState::Failed(crate::error::LOAD_ERROR_MESSAGE.to_string())
        );
        assert!(state.view().is_empty());
    }

    #[test]
    fn test_filter_then_all_clears_selection() {
        let mut state = loaded();

        state.apply_filter(Category::parse("jog"));
        assert_eq!(ids(state.view()), vec![ItemId::Number(2), ItemId::Number(3)]);

        state.toggle_selection(&ItemId::Number(2), true).unwrap();
        state.toggle_selection(&ItemId::Number(3), true).unwrap();
        assert!(state.selection().can_compare());

        state.apply_filter(Category::All);
        assert!(state.selection().is_empty());
        assert_eq!(state.view(), state.catalog());
    }

    #[test]
    fn test_any_filter_change_clears_selection() {
        let mut state = loaded();
        state.toggle_selection(&ItemId::Number(1), true).unwrap();
        state.apply_filter(Category::parse("Trabalho"));
        assert!(state.selection().is_empty());
        assert!(state.comparison.is_none());
    }

    #[test]
    fn test_limit_sets_notice() {
        let mut state = loaded();
        for id in 1..=3 {
            state.toggle_selection(&ItemId::Number(id), true).unwrap();
        }

        let result = state.toggle_selection(&ItemId::Number(4), true);
        assert_eq!(result, Err(SelectionError::LimitExceeded { max: 3 }));
        assert_eq!(
            state.notice.as_deref(),
            Some("Você pode comparar no máximo 3 notebooks.")
        );
        assert_eq!(state.selection().len(), 3);
    }

    #[test]
    fn test_open_comparison_needs_two() {
        let mut state = loaded();
        state.toggle_selection(&ItemId::Number(1), true).unwrap();
        assert!(!state.open_comparison());
        assert!(state.comparison.is_none());

        state.toggle_selection(&ItemId::Number(2), true).unwrap();
        assert!(state.open_comparison());
        let table = state.comparison.as_ref().unwrap();
        assert_eq!(table.columns, vec!["A", "B"]);

        state.close_comparison();
        assert!(state.comparison.is_none());
    }

    #[test]
    fn test_selection_frozen_while_comparison_open() {
        let mut state = loaded();
        state.toggle_selection(&ItemId::Number(1), true).unwrap();
        state.toggle_selection(&ItemId::Number(2), true).unwrap();
        assert!(state.open_comparison());
        assert!(!state.catalog_interactive());

        state.toggle_selection(&ItemId::Number(3), true).unwrap();
        state.toggle_selection(&ItemId::Number(1), false).unwrap();
        assert_eq!(
            ids(state.selection().items()),
            vec![ItemId::Number(1), ItemId::Number(2)]
        );
        assert!(state.comparison.is_some());

        state.close_comparison();
        assert!(state.catalog_interactive());
        state.toggle_selection(&ItemId::Number(3), true).unwrap();
        assert_eq!(state.selection().len(), 3);
    }

    #[test]
    fn test_category_options() {
        let mut state = loaded();
        assert_eq!(state.category_options(), vec!["Estudo", "Jogos", "Trabalho"]);

        state.settings.categories = vec!["Design".to_string()];
        assert_eq!(state.category_options(), vec!["Design"]);
    }
}

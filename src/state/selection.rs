// src/state/selection.rs
use crate::config::{ItemId, ItemRecord};
use crate::error::SelectionError;

/// Items picked for comparison, in the order they were checked.
#[derive(Debug, Clone)]
pub struct Selection {
    items: Vec<ItemRecord>,
    max: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self::with_limit(3)
    }
}

impl Selection {
    pub fn with_limit(max: usize) -> Self {
        Self {
            items: Vec::new(),
            max,
        }
    }

    pub fn toggle(&mut self, item: &ItemRecord, checked: bool) -> Result<(), SelectionError> {
        if !checked {
            self.items.retain(|selected| selected.id != item.id);
            return Ok(());
        }

        if self.contains(&item.id) {
            return Ok(());
        }
        if self.items.len() >= self.max {
            return Err(SelectionError::LimitExceeded { max: self.max });
        }

        self.items.push(item.clone());
        Ok(())
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| item.id == *id)
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn can_compare(&self) -> bool {
        self.items.len() >= 2
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

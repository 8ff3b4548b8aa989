//! Multi-select of product ids for batch deletion.

use crate::model::ProductId;
use serde::Serialize;
use std::collections::BTreeSet;

/// Selected ids. Ids stay selected when their rows are filtered out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SelectionSet {
    ids: BTreeSet<ProductId>,
}

impl SelectionSet {
    pub fn toggle(&mut self, id: ProductId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Header checkbox: clears the selection when it already equals the visible page,
    /// otherwise selects exactly the visible page.
    pub fn select_all_on_page(&mut self, visible: &[ProductId]) {
        let visible: BTreeSet<ProductId> = visible.iter().cloned().collect();
        if self.ids == visible {
            self.ids.clear();
        } else {
            self.ids = visible;
        }
    }

    pub fn replace(&mut self, ids: impl IntoIterator<Item = ProductId>) {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops the given ids, typically after they were deleted.
    pub fn prune(&mut self, ids: &[ProductId]) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// True when `visible` is non-empty and every one of its ids is selected.
    pub fn covers(&self, visible: &[ProductId]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<ProductId> {
        raw.iter().map(|id| ProductId::new(*id)).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = SelectionSet::default();
        selection.toggle(ProductId::new("a"));
        assert!(selection.contains(&ProductId::new("a")));
        selection.toggle(ProductId::new("a"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_twice_clears() {
        let page = ids(&["a", "b", "c"]);
        let mut selection = SelectionSet::default();
        selection.select_all_on_page(&page);
        assert_eq!(selection.ids(), page);
        assert!(selection.covers(&page));
        selection.select_all_on_page(&page);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_replaces_partial_or_foreign_selection() {
        let page = ids(&["a", "b"]);
        let mut selection = SelectionSet::default();
        selection.replace(ids(&["a", "z"]));
        selection.select_all_on_page(&page);
        assert_eq!(selection.ids(), page);
    }

    #[test]
    fn test_select_all_on_empty_page() {
        let mut selection = SelectionSet::default();
        selection.select_all_on_page(&[]);
        assert!(selection.is_empty());
        assert!(!selection.covers(&[]));

        selection.toggle(ProductId::new("hidden"));
        selection.select_all_on_page(&[]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_prune_removes_only_listed_ids() {
        let mut selection = SelectionSet::default();
        selection.replace(ids(&["a", "b", "c"]));
        selection.prune(&ids(&["b", "q"]));
        assert_eq!(selection.ids(), ids(&["a", "c"]));
        assert_eq!(selection.len(), 2);
    }
}

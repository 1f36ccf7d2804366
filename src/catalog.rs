//! Authoritative Food List
//!
//! The only stored copy of the records. The filtered view is always derived from it.

use crate::models::{FoodId, FoodItem};
use crate::search;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<FoodItem>,
    loading: bool,
    generation: u64,
}

impl Catalog {
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn contains(&self, id: FoodId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Start a list fetch and return its generation.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Settle a list fetch. `None` (failure) keeps the current items.
    /// Returns false when a newer fetch has started since, in which case nothing changes.
    pub fn finish_load(&mut self, generation: u64, loaded: Option<Vec<FoodItem>>) -> bool {
        if generation != self.generation {
            log::debug!(
                "[catalog] dropping stale list response {} (latest {})",
                generation,
                self.generation
            );
            return false;
        }
        self.loading = false;
        if let Some(items) = loaded {
            self.items = items;
        }
        true
    }

    /// Replace the record with the same id, or append it.
    pub fn upsert(&mut self, item: FoodItem) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn remove(&mut self, id: FoodId) {
        self.items.retain(|item| item.id != id);
    }

    /// Records matching the search text
    pub fn filtered(&self, query: &str) -> Vec<FoodItem> {
        search::filter(&self.items, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str) -> FoodItem {
        FoodItem {
            id,
            name: name.to_string(),
            description: "desc".to_string(),
            price: "1".to_string(),
            calories: "10".to_string(),
        }
    }

    #[test]
    fn test_load_replaces_items() {
        let mut catalog = Catalog::default();
        let generation = catalog.begin_load();
        assert!(catalog.is_loading());
        assert!(catalog.finish_load(generation, Some(vec![item(1, "Pizza")])));
        assert!(!catalog.is_loading());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_failed_load_clears_loading_and_keeps_items() {
        let mut catalog = Catalog::default();
        let generation = catalog.begin_load();
        assert!(catalog.finish_load(generation, None));
        assert!(!catalog.is_loading());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut catalog = Catalog::default();
        let first = catalog.begin_load();
        let second = catalog.begin_load();

        assert!(catalog.finish_load(second, Some(vec![item(2, "Nuevo")])));
        assert!(!catalog.finish_load(first, Some(vec![item(1, "Viejo")])));
        assert_eq!(catalog.items(), &[item(2, "Nuevo")]);
    }

    #[test]
    fn test_upsert_and_remove() {
        let mut catalog = Catalog::default();
        catalog.upsert(item(1, "Pizza"));
        catalog.upsert(item(2, "Taco"));
        catalog.upsert(item(1, "Pizza grande"));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].name, "Pizza grande");

        catalog.remove(1);
        assert!(!catalog.contains(1));
        assert!(catalog.contains(2));
    }

    #[test]
    fn test_filtered_reflects_latest_update() {
        let mut catalog = Catalog::default();
        catalog.upsert(item(1, "Pizza"));
        assert_eq!(catalog.filtered("pizza").len(), 1);

        catalog.upsert(item(1, "Pizza napolitana"));
        let filtered = catalog.filtered("pizza");
        assert_eq!(filtered[0].name, "Pizza napolitana");
    }
}

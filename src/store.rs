//! Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::editor::Editor;
use crate::models::{FoodId, FoodItem};
use crate::table::{self, SortOrder};

/// Screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authoritative list synced from the service
    pub catalog: Catalog,
    /// Current search box text
    pub search_text: String,
    /// Create/edit modal
    pub editor: Editor,
    /// Active table sort, if any
    pub sort: Option<SortOrder>,
    /// Zero-based table page
    pub page: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Insert or replace a food by ID
pub fn store_upsert_food(store: &AppStore, food: FoodItem) {
    store.catalog().write().upsert(food);
}

/// Remove a food by ID
pub fn store_remove_food(store: &AppStore, food_id: FoodId) {
    store.catalog().write().remove(food_id);
}

/// Set the search text and go back to the first page
pub fn store_set_search(store: &AppStore, text: String) {
    store.search_text().set(text);
    store.page().set(0);
}

/// Sort by `column`, toggling direction on repeated clicks
pub fn store_sort_by(store: &AppStore, column: table::Column) {
    let current = store.sort().get_untracked();
    store.sort().set(Some(SortOrder::after_click(current, column)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, SortDirection};

    fn item(id: u64, name: &str) -> FoodItem {
        FoodItem {
            id,
            name: name.to_string(),
            description: "Queso".to_string(),
            price: "5".to_string(),
            calories: "100".to_string(),
        }
    }

    #[test]
    fn test_upsert_and_remove_helpers() {
        let store = Store::new(AppState::new());
        store_upsert_food(&store, item(1, "Pizza"));
        store_upsert_food(&store, item(2, "Taco"));
        store_upsert_food(&store, item(1, "Pizza grande"));

        let catalog = store.catalog().get_untracked();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].name, "Pizza grande");

        store_remove_food(&store, 1);
        assert!(!store.catalog().get_untracked().contains(1));
    }

    #[test]
    fn test_search_resets_page() {
        let store = Store::new(AppState::new());
        store.page().set(3);
        store_set_search(&store, "que".to_string());
        assert_eq!(store.search_text().get_untracked(), "que");
        assert_eq!(store.page().get_untracked(), 0);
    }

    #[test]
    fn test_sort_by_toggles() {
        let store = Store::new(AppState::new());
        store_sort_by(&store, Column::Price);
        store_sort_by(&store, Column::Price);
        assert_eq!(
            store.sort().get_untracked(),
            Some(SortOrder { column: Column::Price, direction: SortDirection::Descending })
        );
    }
}

//! Search Bar Component

use leptos::prelude::*;

use crate::store::{store_set_search, use_app_store, AppStateStoreFields};

/// Filters the table on every keystroke
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <input
            type="text"
            class="form-control mb-3"
            placeholder="Buscar..."
            prop:value=move || store.search_text().get()
            on:input=move |ev| store_set_search(&store, event_target_value(&ev))
        />
    }
}

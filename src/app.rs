//! Comidas Admin App
//!
//! Root component: search bar, food table, form modal and dialogs.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::api::{FoodApi, HttpFoodApi};
use crate::components::{DialogHost, FoodFormModal, FoodTable, Pagination, SearchBar, SignalDialogs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::{FoodId, FoodItem};
use crate::store::{store_remove_food, store_upsert_food, AppState, AppStateStoreFields};
use crate::table;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("[app] food service at {}", config.api_base_url);

    let api: Rc<dyn FoodApi> = Rc::new(HttpFoodApi::new(config.api_base_url.clone()));
    let dialogs = SignalDialogs::new();
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(api, dialogs, (reload_trigger, set_reload_trigger));

    // Provide context to all children
    provide_context(ctx.clone());
    let store = Store::new(AppState::new());
    provide_context(store);

    // Load the list on mount and on every reload
    Effect::new({
        let ctx = ctx.clone();
        move |_| {
            let trigger = ctx.reload_trigger.get();
            let generation = store.catalog().write().begin_load();
            log::debug!("[app] loading foods, trigger={} generation={}", trigger, generation);
            let api = ctx.api();
            spawn_local(async move {
                let loaded = actions::fetch_all(api.as_ref()).await;
                store.catalog().write().finish_load(generation, loaded);
            });
        }
    });

    // Filtered view, derived from the authoritative list
    let page_size = config.page_size;
    let filtered = Memo::new(move |_| {
        let query = store.search_text().get();
        store.catalog().read().filtered(&query)
    });
    let total_pages = Memo::new(move |_| table::page_count(filtered.read().len(), page_size));
    let current_page =
        Memo::new(move |_| table::clamp_page(store.page().get(), filtered.read().len(), page_size));
    let rows = Memo::new(move |_| {
        table::visible_rows(&filtered.read(), store.sort().get(), current_page.get(), page_size)
    });

    let on_edit = move |food: FoodItem| store.editor().write().open_edit(&food);

    let on_save = {
        let ctx = ctx.clone();
        move |_: ()| {
            let started = store.editor().write().begin_save();
            let ticket = match started {
                Ok(ticket) => ticket,
                Err(refused) => {
                    actions::refuse_save(&ctx.dialogs, &refused);
                    return;
                }
            };
            let api = ctx.api();
            let dialogs = ctx.dialogs;
            spawn_local(async move {
                let saved = actions::save(api.as_ref(), &dialogs, &ticket.request).await;
                let succeeded = saved.is_some();
                if let Some(food) = saved {
                    store_upsert_food(&store, food);
                }
                store.editor().write().finish_save(ticket.token, succeeded);
            });
        }
    };

    let on_delete = {
        let ctx = ctx.clone();
        move |id: FoodId| {
            let api = ctx.api();
            let dialogs = ctx.dialogs;
            spawn_local(async move {
                if actions::delete(api.as_ref(), &dialogs, id).await {
                    store_remove_food(&store, id);
                }
            });
        }
    };

    let reload = {
        let ctx = ctx.clone();
        move |_| ctx.reload()
    };

    view! {
        <FoodFormModal on_save=on_save />

        <div class="container mt-3">
            <h3>"Gestión de Comidas"</h3>

            <SearchBar />

            <div class="table-title">
                <h4>"Comidas"</h4>
                <button class="btn btn-outline-secondary" on:click=reload>"Recargar"</button>
            </div>

            <FoodTable rows=rows on_edit=on_edit on_delete=on_delete />

            <Pagination
                current_page=current_page
                total_pages=total_pages
                on_page_change=move |page: usize| store.page().set(page)
            />

            <button class="btn btn-primary" on:click=move |_| store.editor().write().open_create()>
                "Agregar Comida"
            </button>

            <p class="item-count">
                {move || format!("{} de {} comidas", filtered.read().len(), store.catalog().read().len())}
            </p>
        </div>

        <DialogHost dialogs=dialogs />
    }
}

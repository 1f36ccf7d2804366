//! Food Table Component
//!
//! Sortable table of the current page, with edit/delete actions per row.

use leptos::prelude::*;

use crate::models::{FoodId, FoodItem};
use crate::store::{store_sort_by, use_app_store, AppStateStoreFields};
use crate::table::{Column, SortDirection, COLUMNS};

/// Food table
///
/// # Arguments
/// * `rows` - Sorted page of the filtered view
/// * `on_edit` - Opens the form for a row
/// * `on_delete` - Starts the confirm-then-delete flow for a row id
#[component]
pub fn FoodTable(
    rows: Memo<Vec<FoodItem>>,
    #[prop(into)] on_edit: Callback<FoodItem>,
    #[prop(into)] on_delete: Callback<FoodId>,
) -> impl IntoView {
    let store = use_app_store();
    let loading = move || store.catalog().read().is_loading();

    let sort_marker = move |column: Column| match store.sort().get() {
        Some(order) if order.column == column => match order.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => "",
    };

    view! {
        <table class="table table-hover food-table">
            <thead>
                <tr>
                    {COLUMNS.iter().map(move |&(column, label, right_aligned)| view! {
                        <th
                            class=if right_aligned { "sortable text-end" } else { "sortable" }
                            on:click=move |_| store_sort_by(&store, column)
                        >
                            {label}
                            {move || sort_marker(column)}
                        </th>
                    }).collect_view()}
                    <th>"Acciones"</th>
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !loading()
                    fallback=|| view! { <tr><td colspan="6" class="loading">"Cargando..."</td></tr> }
                >
                    <Show
                        when=move || !rows.read().is_empty()
                        fallback=|| view! {
                            <tr><td colspan="6" class="empty">"No hay registros para mostrar"</td></tr>
                        }
                    >
                        <For
                            each=move || rows.get()
                            key=|food| food.clone()
                            children=move |food: FoodItem| {
                                let id = food.id;
                                let edit_target = food.clone();
                                view! {
                                    <tr>
                                        <td>{food.id}</td>
                                        <td>{food.name}</td>
                                        <td>{food.description}</td>
                                        <td class="text-end">{food.price}</td>
                                        <td>{food.calories}</td>
                                        <td>
                                            <div class="d-flex justify-content-around">
                                                <button
                                                    class="btn btn-warning"
                                                    on:click=move |_| on_edit.run(edit_target.clone())
                                                >
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="btn btn-danger"
                                                    on:click=move |_| on_delete.run(id)
                                                >
                                                    "Eliminar"
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </Show>
                </Show>
            </tbody>
        </table>
    }
}

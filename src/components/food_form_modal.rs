//! Food Form Modal Component
//!
//! Shared create/edit form. Price and calories are checked on every keystroke;
//! a rejected keystroke is reverted in the input and reported in a dialog.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::actions;
use crate::context::use_app_context;
use crate::models::FoodDraft;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validation::Field;

fn field_text(form: &FoodDraft, field: Field) -> String {
    match field {
        Field::Name => form.name.clone(),
        Field::Description => form.description.clone(),
        Field::Price => form.price.clone(),
        Field::Calories => form.calories.clone(),
    }
}

/// Modal with the create/edit form
#[component]
pub fn FoodFormModal(#[prop(into)] on_save: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dialogs = ctx.dialogs;

    let value_of = move |field: Field| move || field_text(store.editor().read().form(), field);

    let on_field = move |field: Field, ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let result = store.editor().write().set_field(field, value);
        if let Err(error) = result {
            let previous = field_text(store.editor().read_untracked().form(), field);
            if let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                input.set_value(&previous);
            }
            actions::reject_input(&dialogs, &error);
        }
    };

    let close = move |_| store.editor().write().close();
    let saving = move || store.editor().read().is_saving();

    view! {
        <Show when=move || store.editor().read().is_open()>
            <div class="modal fade show modal-open-backdrop" tabindex="-1">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{move || store.editor().read().title()}</h5>
                            <button type="button" class="btn-close" on:click=close></button>
                        </div>
                        <div class="modal-body">
                            <form on:submit=|ev| ev.prevent_default()>
                                <div class="mb-3">
                                    <label for="nombreComida" class="form-label">"Nombre comida: "</label>
                                    <input
                                        type="text"
                                        class="form-control"
                                        id="nombreComida"
                                        prop:value=value_of(Field::Name)
                                        on:input=move |ev| on_field(Field::Name, ev)
                                    />
                                </div>
                                <div class="mb-3">
                                    <label for="descripcionComida">"Descripción:"</label>
                                    <textarea
                                        class="form-control"
                                        placeholder="Escribe una descripción"
                                        id="descripcionComida"
                                        prop:value=value_of(Field::Description)
                                        on:input=move |ev| on_field(Field::Description, ev)
                                    ></textarea>
                                </div>
                                <div class="mb-3">
                                    <label for="precioComida" class="form-label">"Precio: "</label>
                                    <input
                                        type="text"
                                        inputmode="decimal"
                                        class="form-control"
                                        id="precioComida"
                                        prop:value=value_of(Field::Price)
                                        on:input=move |ev| on_field(Field::Price, ev)
                                    />
                                </div>
                                <div class="mb-3">
                                    <label for="caloriasComida" class="form-label">"Calorías: "</label>
                                    <input
                                        type="text"
                                        inputmode="numeric"
                                        class="form-control"
                                        id="caloriasComida"
                                        prop:value=value_of(Field::Calories)
                                        on:input=move |ev| on_field(Field::Calories, ev)
                                    />
                                </div>
                            </form>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=close>"Cerrar"</button>
                            <button
                                type="button"
                                class="btn btn-primary"
                                disabled=saving
                                on:click=move |_| on_save.run(())
                            >
                                "Guardar"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

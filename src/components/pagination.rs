//! Pagination component for navigating the table

use leptos::prelude::*;

/// Pagination component
#[component]
pub fn Pagination(
    /// Current page (zero-based)
    #[prop(into)]
    current_page: Signal<usize>,
    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Callback when page changes
    #[prop(into)]
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let has_prev = move || current_page.get() > 0;
    let has_next = move || current_page.get() + 1 < total_pages.get();

    view! {
        <div class="pagination">
            <button
                class="pagination-btn"
                disabled=move || !has_prev()
                on:click=move |_| {
                    if has_prev() {
                        on_page_change.run(current_page.get() - 1);
                    }
                }
            >
                "Anterior"
            </button>

            <span class="pagination-info">
                {move || format!("Página {} de {}", current_page.get() + 1, total_pages.get())}
            </span>

            <button
                class="pagination-btn"
                disabled=move || !has_next()
                on:click=move |_| {
                    if has_next() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
            >
                "Siguiente"
            </button>
        </div>
    }
}

//! Pager Component
//!
//! Prev/Next controls. "Next" is enabled only when the controller saw a
//! full page (or the known total says more rows remain).

use leptos::prelude::*;

#[component]
pub fn Pager(
    #[prop(into)] page_index: Signal<usize>,
    #[prop(into)] has_next: Signal<bool>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="pager-btn"
                disabled=move || page_index.get() == 0
                on:click=move |_| on_prev.run(())
            >
                "Prev"
            </button>
            <span class="pager-page">{move || format!("Page {}", page_index.get() + 1)}</span>
            <button
                class="pager-btn"
                disabled=move || !has_next.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}

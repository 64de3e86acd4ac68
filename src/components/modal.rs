//! Modal Component
//!
//! Shell for the add/edit dialogs. Closing is always explicit; forms stay
//! open after a failed submit so the user can correct and retry.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <span class="modal-title">{title}</span>
                    <button
                        class="modal-close"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

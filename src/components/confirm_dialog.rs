//! Confirm Dialog Component
//!
//! Inline confirmation for destructive actions, driving the mutation
//! phase through `PendingConfirm`. The HTTP call is only issued from the
//! confirm branch; cancelling returns to `Idle` with zero network calls
//! and the store untouched.

use leptos::prelude::*;

use crate::mutation::SavePhase;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] button_class: String,
    phase: RwSignal<SavePhase>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || !phase.get().is_pending_confirm()>
            <button
                class=button_class.clone()
                disabled=move || phase.get().is_submitting()
                on:click=move |ev| {
                    ev.stop_propagation();
                    phase.update(|p| {
                        p.request_confirm();
                    });
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || phase.get().is_pending_confirm()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        phase.update(|p| {
                            p.cancel_confirm();
                        });
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

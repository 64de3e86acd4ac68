//! Toast Host Component
//!
//! Mounted once by the application root; renders the single feedback slot.
//! No runtime DOM lookup-or-create, just ordinary composition.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::feedback::ToastKind;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = AppContext::use_context();
    let slot = ctx.feedback.slot();

    view! {
        <div class="toast-host">
            {move || slot.get().current().cloned().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                    ToastKind::Info => "toast toast-info",
                };
                view! {
                    <div class=class role="status">
                        <span class="toast-message">{toast.message}</span>
                        <button
                            class="toast-dismiss"
                            on:click=move |_| ctx.feedback.dismiss()
                        >
                            "×"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

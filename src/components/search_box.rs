//! Search Box Component
//!
//! Debounced text input: the search callback fires only after the user
//! pauses typing, and a superseded debounce timer never fires.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEBOUNCE_MS: u32 = 300;

#[component]
pub fn SearchBox(
    #[prop(into)] placeholder: String,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (debounce_seq, set_debounce_seq) = signal(0u64);

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_text.set(value.clone());

        let seq = debounce_seq.get_untracked() + 1;
        set_debounce_seq.set(seq);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            // a newer keystroke or a torn-down screen cancels this timer
            if debounce_seq.try_get_untracked() == Some(seq) {
                on_search.run(value);
            }
        });
    };

    view! {
        <input
            class="search-box"
            type="text"
            placeholder=placeholder
            prop:value=move || text.get()
            on:input=on_input
        />
    }
}

//! Application Shell
//!
//! Sidebar navigation over the resource screens, a busy indicator fed by
//! the pending-operation counter, the auth token field, and the toast host.
//! Exactly one screen component is mounted at a time; switching pages drops
//! the old screen's state entirely.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::ToastHost;
use crate::context::AppContext;
use crate::pages::{
    FavoritesPage, InvestmentsPage, MoviesPage, NotesPage, PasswordsPage, SeriesPage,
    WebsitesPage, WorkLogPage,
};
use crate::state::{
    store_set_active_page, store_set_auth_token, AppState, AppStateStoreFields, PageId,
};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::provide();
    let store = Store::new(AppState::default());
    provide_context(store);

    let active_page = move || store.active_page().get();

    view! {
        <div class="app-layout">
            <nav class="sidebar">
                <h1 class="app-title">"LifeDesk"</h1>
                <ul class="nav-list">
                    {PageId::ALL
                        .iter()
                        .map(|page| {
                            let page = *page;
                            view! {
                                <li>
                                    <button
                                        class=move || {
                                            if active_page() == page {
                                                "nav-btn active"
                                            } else {
                                                "nav-btn"
                                            }
                                        }
                                        on:click=move |_| store_set_active_page(&store, page)
                                    >
                                        {page.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="sidebar-footer">
                    <label class="token-field">
                        "API token"
                        <input
                            type="password"
                            prop:value=move || store.auth_token().get().unwrap_or_default()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                store_set_auth_token(
                                    &store,
                                    (!value.is_empty()).then_some(value),
                                );
                            }
                        />
                    </label>
                    {move || {
                        ctx.pending
                            .is_busy()
                            .then(|| view! { <div class="busy-indicator">"Working..."</div> })
                    }}
                </div>
            </nav>

            <main class="main-content">
                {move || match active_page() {
                    PageId::Movies => view! { <MoviesPage /> }.into_any(),
                    PageId::Series => view! { <SeriesPage /> }.into_any(),
                    PageId::Passwords => view! { <PasswordsPage /> }.into_any(),
                    PageId::Notes => view! { <NotesPage /> }.into_any(),
                    PageId::Investments => view! { <InvestmentsPage /> }.into_any(),
                    PageId::Favorites => view! { <FavoritesPage /> }.into_any(),
                    PageId::Websites => view! { <WebsitesPage /> }.into_any(),
                    PageId::WorkLog => view! { <WorkLogPage /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}

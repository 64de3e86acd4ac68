//! Global Application State
//!
//! App-level state in a `reactive_stores` Store: which screen is active
//! and the current auth token. Per-list state lives in each screen's
//! `ListController`, not here.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;

/// One entry per resource screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PageId {
    #[default]
    Movies,
    Series,
    Passwords,
    Notes,
    Investments,
    Favorites,
    Websites,
    WorkLog,
}

impl PageId {
    pub const ALL: &'static [PageId] = &[
        PageId::Movies,
        PageId::Series,
        PageId::Passwords,
        PageId::Notes,
        PageId::Investments,
        PageId::Favorites,
        PageId::Websites,
        PageId::WorkLog,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PageId::Movies => "Movies",
            PageId::Series => "Series",
            PageId::Passwords => "Passwords",
            PageId::Notes => "Notes",
            PageId::Investments => "Investments",
            PageId::Favorites => "Favorites",
            PageId::Websites => "Websites",
            PageId::WorkLog => "Work Log",
        }
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub active_page: PageId,
    pub auth_token: Option<String>,
}

pub type AppStore = Store<AppState>;

pub fn store_set_active_page(store: &AppStore, page: PageId) {
    *store.active_page().write() = page;
}

/// Update the token in both the store and the HTTP layer.
pub fn store_set_auth_token(store: &AppStore, token: Option<String>) {
    api::set_auth_token(token.clone());
    *store.auth_token().write() = token;
}

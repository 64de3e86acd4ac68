//! LifeDesk Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod error;
mod feedback;
mod listing;
mod markdown;
mod models;
mod mutation;
mod pages;
mod query;
mod reconcile;
mod state;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

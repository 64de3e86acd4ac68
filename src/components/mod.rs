//! UI Components
//!
//! Reusable Leptos components shared by every resource screen.

mod confirm_dialog;
mod modal;
mod pager;
mod search_box;
mod toast_host;

pub use confirm_dialog::ConfirmDialog;
pub use modal::Modal;
pub use pager::Pager;
pub use search_box::SearchBox;
pub use toast_host::ToastHost;

//! Passwords Screen
//!
//! Credential table with masked passwords and a per-row reveal toggle.

use leptos::prelude::*;

use crate::api;
use crate::components::{ConfirmDialog, Modal, Pager, SearchBox};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::listing::ListController;
use crate::models::PasswordEntry;
use crate::mutation::SavePhase;
use crate::validation;

const CATEGORIES: &[&str] = &["banking", "email", "shopping", "social", "work", "other"];

fn build_password_draft(
    site: &str,
    username: &str,
    password: &str,
    category: &str,
    url: &str,
) -> Result<api::PasswordDraft, ApiError> {
    let site = validation::require_text("site", site)?;
    let username = validation::require_text("username", username)?;
    let password = validation::require_text("password", password)?;
    let category = validation::require_text("category", category)?;
    let url = if url.trim().is_empty() {
        None
    } else {
        Some(validation::require_url("url", url)?)
    };
    Ok(api::PasswordDraft {
        site,
        username,
        password,
        category,
        url,
    })
}

#[component]
pub fn PasswordsPage() -> impl IntoView {
    let ctx = AppContext::use_context();
    let ctrl = ListController::<PasswordEntry>::new();
    ctrl.wire(move |q| async move { api::list_passwords(&q).await });

    let (editor, set_editor) = signal::<Option<Option<PasswordEntry>>>(None);

    view! {
        <section class="page">
            <header class="page-header">
                <h2>"Passwords"</h2>
                <div class="page-actions">
                    <SearchBox
                        placeholder="Search sites..."
                        on_search=move |text| ctrl.set_search(text)
                    />
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        ctrl.set_category((!value.is_empty()).then_some(value));
                    }>
                        <option value="">"All categories"</option>
                        {CATEGORIES
                            .iter()
                            .map(|c| view! { <option value=*c>{*c}</option> })
                            .collect_view()}
                    </select>
                    <button class="refresh-btn" on:click=move |_| ctrl.refresh()>
                        "Refresh"
                    </button>
                    <button class="add-btn" on:click=move |_| set_editor.set(Some(None))>
                        "Add entry"
                    </button>
                </div>
            </header>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Site"</th>
                        <th>"Username"</th>
                        <th>"Password"</th>
                        <th>"Category"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || ctrl.records().get()
                        key=|entry| entry.id
                        children=move |entry| {
                            let phase = RwSignal::new(SavePhase::Idle);
                            let (revealed, set_revealed) = signal(false);
                            let id = entry.id;
                            let edit_entry = entry.clone();
                            let password = entry.password.clone();
                            view! {
                                <tr>
                                    <td>{entry.site.clone()}</td>
                                    <td>{entry.username.clone()}</td>
                                    <td class="password-cell">
                                        <span>
                                            {move || {
                                                if revealed.get() {
                                                    password.clone()
                                                } else {
                                                    "••••••••".to_string()
                                                }
                                            }}
                                        </span>
                                        <button
                                            class="reveal-btn"
                                            on:click=move |_| set_revealed.update(|r| *r = !*r)
                                        >
                                            {move || if revealed.get() { "Hide" } else { "Show" }}
                                        </button>
                                    </td>
                                    <td>{entry.category.clone()}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editor.set(Some(Some(edit_entry.clone())))
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <ConfirmDialog
                                            button_class="delete-btn"
                                            phase=phase
                                            on_confirm=move |_| {
                                                ctrl.submit_delete(
                                                    ctx,
                                                    phase,
                                                    id,
                                                    api::delete_password,
                                                    "Entry",
                                                )
                                            }
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || {
                (!ctrl.loading().get() && ctrl.records().get().is_empty())
                    .then(|| view! { <div class="empty-state">"No results"</div> })
            }}

            <Pager
                page_index=Signal::derive(move || ctrl.query().get().page_index)
                has_next=ctrl.has_next()
                on_prev=move |_| ctrl.prev_page()
                on_next=move |_| ctrl.next_page()
            />

            {move || {
                editor
                    .get()
                    .map(|editing| {
                        let title = if editing.is_some() { "Edit entry" } else { "Add entry" };
                        view! {
                            <Modal title=title on_close=move |_| set_editor.set(None)>
                                <PasswordForm
                                    editing=editing
                                    ctrl=ctrl
                                    on_close=move |_| set_editor.set(None)
                                />
                            </Modal>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn PasswordForm(
    editing: Option<PasswordEntry>,
    ctrl: ListController<PasswordEntry>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::use_context();
    let phase = RwSignal::new(SavePhase::Idle);

    let entry_id = editing.as_ref().map(|e| e.id);
    let (site, set_site) = signal(editing.as_ref().map(|e| e.site.clone()).unwrap_or_default());
    let (username, set_username) = signal(
        editing
            .as_ref()
            .map(|e| e.username.clone())
            .unwrap_or_default(),
    );
    let (password, set_password) = signal(
        editing
            .as_ref()
            .map(|e| e.password.clone())
            .unwrap_or_default(),
    );
    let (category, set_category) = signal(
        editing
            .as_ref()
            .map(|e| e.category.clone())
            .unwrap_or_else(|| CATEGORIES[0].to_string()),
    );
    let (url, set_url) = signal(
        editing
            .as_ref()
            .and_then(|e| e.url.clone())
            .unwrap_or_default(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match build_password_draft(
            &site.get_untracked(),
            &username.get_untracked(),
            &password.get_untracked(),
            &category.get_untracked(),
            &url.get_untracked(),
        ) {
            Ok(draft) => draft,
            Err(err) => {
                ctx.feedback.error(err.to_string());
                return;
            }
        };

        match entry_id {
            Some(id) => {
                let optimistic = PasswordEntry {
                    id,
                    site: draft.site.clone(),
                    username: draft.username.clone(),
                    password: draft.password.clone(),
                    category: draft.category.clone(),
                    url: draft.url.clone(),
                };
                let fut = async move { api::update_password(id, &draft).await };
                ctrl.submit_update(ctx, phase, optimistic, fut, "Entry", move || {
                    on_close.run(())
                });
            }
            None => {
                let fut = async move { api::create_password(&draft).await };
                ctrl.submit_create(ctx, phase, fut, "Entry", move || on_close.run(()));
            }
        }
    };

    view! {
        <form class="record-form" on:submit=submit>
            <label>
                "Site"
                <input
                    type="text"
                    prop:value=move || site.get()
                    on:input=move |ev| set_site.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Username"
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="text"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Category"
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    {CATEGORIES
                        .iter()
                        .map(|c| view! { <option value=*c>{*c}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "URL (optional)"
                <input
                    type="text"
                    prop:value=move || url.get()
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                />
            </label>

            <button type="submit" disabled=move || phase.get().is_submitting()>
                {move || if phase.get().is_submitting() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_allowed() {
        let draft = build_password_draft("bank", "user", "hunter2", "banking", "").unwrap();
        assert_eq!(draft.url, None);
    }

    #[test]
    fn malformed_url_is_rejected() {
        assert!(build_password_draft("bank", "user", "hunter2", "banking", "ftp://x").is_err());
    }
}

//! Websites Screen
//!
//! Bookmark table; titles link out to the stored URL.

use leptos::prelude::*;

use crate::api;
use crate::components::{ConfirmDialog, Modal, Pager, SearchBox};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::listing::ListController;
use crate::models::Website;
use crate::mutation::SavePhase;
use crate::validation;

const CATEGORIES: &[&str] = &["dev", "news", "reference", "shopping", "tools", "other"];

fn build_website_draft(
    title: &str,
    url: &str,
    category: &str,
) -> Result<api::WebsiteDraft, ApiError> {
    let title = validation::require_text("title", title)?;
    let url = validation::require_url("url", url)?;
    let category = validation::require_text("category", category)?;
    Ok(api::WebsiteDraft {
        title,
        url,
        category,
    })
}

#[component]
pub fn WebsitesPage() -> impl IntoView {
    let ctx = AppContext::use_context();
    let ctrl = ListController::<Website>::new();
    ctrl.wire(move |q| async move { api::list_websites(&q).await });

    let (editor, set_editor) = signal::<Option<Option<Website>>>(None);

    view! {
        <section class="page">
            <header class="page-header">
                <h2>"Websites"</h2>
                <div class="page-actions">
                    <SearchBox
                        placeholder="Search bookmarks..."
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
                        "Add bookmark"
                    </button>
                </div>
            </header>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"URL"</th>
                        <th>"Category"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || ctrl.records().get()
                        key=|site| site.id
                        children=move |site| {
                            let phase = RwSignal::new(SavePhase::Idle);
                            let id = site.id;
                            let edit_site = site.clone();
                            view! {
                                <tr>
                                    <td>
                                        <a href=site.url.clone() target="_blank">
                                            {site.title.clone()}
                                        </a>
                                    </td>
                                    <td class="url-cell">{site.url.clone()}</td>
                                    <td>{site.category.clone()}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editor.set(Some(Some(edit_site.clone())))
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
                                                    api::delete_website,
                                                    "Bookmark",
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
                        let title = if editing.is_some() {
                            "Edit bookmark"
                        } else {
                            "Add bookmark"
                        };
                        view! {
                            <Modal title=title on_close=move |_| set_editor.set(None)>
                                <WebsiteForm
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
fn WebsiteForm(
    editing: Option<Website>,
    ctrl: ListController<Website>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::use_context();
    let phase = RwSignal::new(SavePhase::Idle);

    let site_id = editing.as_ref().map(|s| s.id);
    let (title, set_title) = signal(
        editing
            .as_ref()
            .map(|s| s.title.clone())
            .unwrap_or_default(),
    );
    let (url, set_url) = signal(editing.as_ref().map(|s| s.url.clone()).unwrap_or_default());
    let (category, set_category) = signal(
        editing
            .as_ref()
            .map(|s| s.category.clone())
            .unwrap_or_else(|| CATEGORIES[0].to_string()),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match build_website_draft(
            &title.get_untracked(),
            &url.get_untracked(),
            &category.get_untracked(),
        ) {
            Ok(draft) => draft,
            Err(err) => {
                ctx.feedback.error(err.to_string());
                return;
            }
        };

        match site_id {
            Some(id) => {
                let optimistic = Website {
                    id,
                    title: draft.title.clone(),
                    url: draft.url.clone(),
                    category: draft.category.clone(),
                };
                let fut = async move { api::update_website(id, &draft).await };
                ctrl.submit_update(ctx, phase, optimistic, fut, "Bookmark", move || {
                    on_close.run(())
                });
            }
            None => {
                let fut = async move { api::create_website(&draft).await };
                ctrl.submit_create(ctx, phase, fut, "Bookmark", move || on_close.run(()));
            }
        }
    };

    view! {
        <form class="record-form" on:submit=submit>
            <label>
                "Title"
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>
            <label>
                "URL"
                <input
                    type="text"
                    placeholder="https://"
                    prop:value=move || url.get()
                    on:input=move |ev| set_url.set(event_target_value(&ev))
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
    fn url_scheme_is_required() {
        assert!(build_website_draft("docs", "example.com", "dev").is_err());
        assert!(build_website_draft("docs", "https://example.com", "dev").is_ok());
    }
}

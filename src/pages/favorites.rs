//! Favorites Screen
//!
//! Card grid of favorite actresses with a 1-10 rating.

use leptos::prelude::*;

use crate::api;
use crate::components::{ConfirmDialog, Modal, Pager, SearchBox};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::listing::ListController;
use crate::models::Favorite;
use crate::mutation::SavePhase;
use crate::validation;

fn build_favorite_draft(
    name: &str,
    rating: &str,
    remark: &str,
) -> Result<api::FavoriteDraft, ApiError> {
    let name = validation::require_text("name", name)?;
    let rating = validation::parse_rating("rating", rating)?;
    let remark = (!remark.trim().is_empty()).then(|| remark.trim().to_string());
    Ok(api::FavoriteDraft {
        name,
        rating,
        remark,
    })
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = AppContext::use_context();
    let ctrl = ListController::<Favorite>::new();
    ctrl.wire(move |q| async move { api::list_favorites(&q).await });

    let (editor, set_editor) = signal::<Option<Option<Favorite>>>(None);

    view! {
        <section class="page">
            <header class="page-header">
                <h2>"Favorites"</h2>
                <div class="page-actions">
                    <SearchBox
                        placeholder="Search favorites..."
                        on_search=move |text| ctrl.set_search(text)
                    />
                    <button class="refresh-btn" on:click=move |_| ctrl.refresh()>
                        "Refresh"
                    </button>
                    <button class="add-btn" on:click=move |_| set_editor.set(Some(None))>
                        "Add favorite"
                    </button>
                </div>
            </header>

            <div class="card-grid">
                <For
                    each=move || ctrl.records().get()
                    key=|fav| fav.id
                    children=move |fav| {
                        let phase = RwSignal::new(SavePhase::Idle);
                        let id = fav.id;
                        let edit_fav = fav.clone();
                        let stars = "★".repeat(fav.rating as usize);
                        view! {
                            <div class="card">
                                <div class="card-header">
                                    <span class="card-title">{fav.name.clone()}</span>
                                    <span class="card-rating">{stars}</span>
                                </div>
                                {fav.remark
                                    .clone()
                                    .map(|remark| view! { <p class="card-body">{remark}</p> })}
                                <div class="card-actions">
                                    <button
                                        class="edit-btn"
                                        on:click=move |_| {
                                            set_editor.set(Some(Some(edit_fav.clone())))
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
                                                api::delete_favorite,
                                                "Favorite",
                                            )
                                        }
                                    />
                                </div>
                            </div>
                        }
                    }
                />
            </div>

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
                            "Edit favorite"
                        } else {
                            "Add favorite"
                        };
                        view! {
                            <Modal title=title on_close=move |_| set_editor.set(None)>
                                <FavoriteForm
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
fn FavoriteForm(
    editing: Option<Favorite>,
    ctrl: ListController<Favorite>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::use_context();
    let phase = RwSignal::new(SavePhase::Idle);

    let fav_id = editing.as_ref().map(|f| f.id);
    let (name, set_name) = signal(editing.as_ref().map(|f| f.name.clone()).unwrap_or_default());
    let (rating, set_rating) = signal(
        editing
            .as_ref()
            .map(|f| f.rating.to_string())
            .unwrap_or_else(|| "5".to_string()),
    );
    let (remark, set_remark) = signal(
        editing
            .as_ref()
            .and_then(|f| f.remark.clone())
            .unwrap_or_default(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match build_favorite_draft(
            &name.get_untracked(),
            &rating.get_untracked(),
            &remark.get_untracked(),
        ) {
            Ok(draft) => draft,
            Err(err) => {
                ctx.feedback.error(err.to_string());
                return;
            }
        };

        match fav_id {
            Some(id) => {
                let optimistic = Favorite {
                    id,
                    name: draft.name.clone(),
                    rating: draft.rating,
                    remark: draft.remark.clone(),
                };
                let fut = async move { api::update_favorite(id, &draft).await };
                ctrl.submit_update(ctx, phase, optimistic, fut, "Favorite", move || {
                    on_close.run(())
                });
            }
            None => {
                let fut = async move { api::create_favorite(&draft).await };
                ctrl.submit_create(ctx, phase, fut, "Favorite", move || on_close.run(()));
            }
        }
    };

    view! {
        <form class="record-form" on:submit=submit>
            <label>
                "Name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Rating (1-10)"
                <input
                    type="text"
                    prop:value=move || rating.get()
                    on:input=move |ev| set_rating.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Remark"
                <textarea
                    prop:value=move || remark.get()
                    on:input=move |ev| set_remark.set(event_target_value(&ev))
                ></textarea>
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
    fn rating_outside_range_fails() {
        assert!(build_favorite_draft("A", "0", "").is_err());
        assert!(build_favorite_draft("A", "11", "").is_err());
        assert_eq!(build_favorite_draft("A", "10", "").unwrap().rating, 10);
    }

    #[test]
    fn blank_remark_becomes_none() {
        assert_eq!(build_favorite_draft("A", "7", "  ").unwrap().remark, None);
    }
}

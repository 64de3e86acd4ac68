//! Movies Screen
//!
//! Paginated, searchable movie table with an add/edit modal. The modal
//! also edits the parts sub-collection, which is reconciled against the
//! server set when the form is saved.

use leptos::prelude::*;

use crate::api;
use crate::components::{ConfirmDialog, Modal, Pager, SearchBox};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::listing::ListController;
use crate::models::{Movie, MoviePart};
use crate::mutation::SavePhase;
use crate::validation;

const CATEGORIES: &[&str] = &["action", "comedy", "drama", "horror", "scifi", "thriller"];

fn build_movie_draft(
    title: &str,
    year: &str,
    category: &str,
    watched: bool,
    parts: &[MoviePart],
) -> Result<api::MovieDraft, ApiError> {
    let title = validation::require_text("title", title)?;
    let year = validation::parse_year("year", year)?;
    let category = validation::require_text("category", category)?;
    for part in parts {
        validation::require_text("part title", &part.title)?;
    }
    validation::check_child_ordinals("parts", parts, 1)?;
    Ok(api::MovieDraft {
        title,
        year,
        category,
        watched,
    })
}

#[component]
pub fn MoviesPage() -> impl IntoView {
    let ctx = AppContext::use_context();
    let ctrl = ListController::<Movie>::new();
    ctrl.wire(move |q| async move { api::list_movies(&q).await });

    // None = closed, Some(None) = add, Some(Some(movie)) = edit
    let (editor, set_editor) = signal::<Option<Option<Movie>>>(None);

    view! {
        <section class="page">
            <header class="page-header">
                <h2>"Movies"</h2>
                <div class="page-actions">
                    <SearchBox
                        placeholder="Search movies..."
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
                        "Add movie"
                    </button>
                </div>
            </header>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Year"</th>
                        <th>"Category"</th>
                        <th>"Watched"</th>
                        <th>"Parts"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || ctrl.records().get()
                        key=|movie| movie.id
                        children=move |movie| {
                            let phase = RwSignal::new(SavePhase::Idle);
                            let id = movie.id;
                            let edit_movie = movie.clone();
                            view! {
                                <tr>
                                    <td>{movie.title.clone()}</td>
                                    <td>{movie.year}</td>
                                    <td>{movie.category.clone()}</td>
                                    <td>{if movie.watched { "✓" } else { "" }}</td>
                                    <td>{movie.parts.len()}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editor.set(Some(Some(edit_movie.clone())))
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
                                                    api::delete_movie,
                                                    "Movie",
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
                        let title = if editing.is_some() { "Edit movie" } else { "Add movie" };
                        view! {
                            <Modal title=title on_close=move |_| set_editor.set(None)>
                                <MovieForm
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
fn MovieForm(
    editing: Option<Movie>,
    ctrl: ListController<Movie>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::use_context();
    let phase = RwSignal::new(SavePhase::Idle);

    let movie_id = editing.as_ref().map(|m| m.id);
    // last-known server children, diffed against the edited set on save
    let server_parts = StoredValue::new(
        editing
            .as_ref()
            .map(|m| m.parts.clone())
            .unwrap_or_default(),
    );

    let (title, set_title) = signal(
        editing
            .as_ref()
            .map(|m| m.title.clone())
            .unwrap_or_default(),
    );
    let (year, set_year) = signal(
        editing
            .as_ref()
            .map(|m| m.year.to_string())
            .unwrap_or_default(),
    );
    let (category, set_category) = signal(
        editing
            .as_ref()
            .map(|m| m.category.clone())
            .unwrap_or_else(|| CATEGORIES[0].to_string()),
    );
    let (watched, set_watched) = signal(editing.as_ref().map(|m| m.watched).unwrap_or(false));
    let parts = RwSignal::new(
        editing
            .as_ref()
            .map(|m| m.parts.clone())
            .unwrap_or_default(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let local_parts = parts.get_untracked();
        let draft = match build_movie_draft(
            &title.get_untracked(),
            &year.get_untracked(),
            &category.get_untracked(),
            watched.get_untracked(),
            &local_parts,
        ) {
            Ok(draft) => draft,
            Err(err) => {
                ctx.feedback.error(err.to_string());
                return;
            }
        };

        match movie_id {
            Some(id) => {
                let optimistic = Movie {
                    id,
                    title: draft.title.clone(),
                    year: draft.year,
                    category: draft.category.clone(),
                    watched: draft.watched,
                    parts: local_parts.clone(),
                };
                let server = server_parts.get_value();
                let fut = async move {
                    api::update_movie(id, &draft).await?;
                    api::save_movie_parts(id, &server, &local_parts).await?;
                    api::get_movie(id).await
                };
                ctrl.submit_update(ctx, phase, optimistic, fut, "Movie", move || {
                    on_close.run(())
                });
            }
            None => {
                let fut = async move { api::create_movie(&draft).await };
                ctrl.submit_create(ctx, phase, fut, "Movie", move || on_close.run(()));
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
                "Year"
                <input
                    type="text"
                    prop:value=move || year.get()
                    on:input=move |ev| set_year.set(event_target_value(&ev))
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
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=move || watched.get()
                    on:change=move |_| set_watched.update(|w| *w = !*w)
                />
                "Watched"
            </label>

            <div class="sub-records">
                <div class="sub-records-header">
                    <span>"Parts"</span>
                    <button
                        type="button"
                        on:click=move |_| {
                            parts.update(|list| {
                                let next =
                                    list.iter().map(|p| p.part_no).max().unwrap_or(0) + 1;
                                list.push(MoviePart {
                                    id: None,
                                    part_no: next,
                                    title: String::new(),
                                });
                            })
                        }
                    >
                        "Add part"
                    </button>
                </div>
                <For
                    each=move || { (0..parts.get().len()).collect::<Vec<_>>() }
                    key=|i| *i
                    children=move |i| {
                        view! {
                            <div class="sub-record-row">
                                <input
                                    type="text"
                                    class="ordinal-input"
                                    prop:value=move || {
                                        parts.with(|list| {
                                            list.get(i)
                                                .map(|p| p.part_no.to_string())
                                                .unwrap_or_default()
                                        })
                                    }
                                    on:input=move |ev| {
                                        if let Ok(part_no) =
                                            event_target_value(&ev).trim().parse()
                                        {
                                            parts.update(|list| {
                                                if let Some(part) = list.get_mut(i) {
                                                    part.part_no = part_no;
                                                }
                                            });
                                        }
                                    }
                                />
                                <input
                                    type="text"
                                    prop:value=move || {
                                        parts.with(|list| {
                                            list.get(i)
                                                .map(|p| p.title.clone())
                                                .unwrap_or_default()
                                        })
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        parts.update(|list| {
                                            if let Some(part) = list.get_mut(i) {
                                                part.title = value.clone();
                                            }
                                        });
                                    }
                                />
                                <button
                                    type="button"
                                    class="remove-btn"
                                    on:click=move |_| {
                                        parts.update(|list| {
                                            if i < list.len() {
                                                list.remove(i);
                                            }
                                        })
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <button type="submit" disabled=move || phase.get().is_submitting()>
                {move || if phase.get().is_submitting() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: Option<u32>, part_no: u32, title: &str) -> MoviePart {
        MoviePart {
            id,
            part_no,
            title: title.to_string(),
        }
    }

    #[test]
    fn empty_title_fails_before_any_network_call() {
        let err = build_movie_draft("  ", "2010", "scifi", false, &[]).unwrap_err();
        assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "title"));
    }

    #[test]
    fn year_out_of_range_fails() {
        assert!(build_movie_draft("Inception", "1492", "scifi", false, &[]).is_err());
    }

    #[test]
    fn duplicate_part_numbers_fail() {
        let parts = vec![part(Some(1), 1, "a"), part(None, 1, "b")];
        assert!(build_movie_draft("LOTR", "2001", "drama", true, &parts).is_err());
    }

    #[test]
    fn valid_draft_passes() {
        let parts = vec![part(Some(1), 1, "a"), part(None, 2, "b")];
        let draft = build_movie_draft(" LOTR ", "2001", "drama", true, &parts).unwrap();
        assert_eq!(draft.title, "LOTR");
        assert_eq!(draft.year, 2001);
    }
}

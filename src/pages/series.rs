//! Series Screen
//!
//! Same shape as the movies screen, with a status column and the seasons
//! sub-collection instead of parts.

use leptos::prelude::*;

use crate::api;
use crate::components::{ConfirmDialog, Modal, Pager, SearchBox};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::listing::ListController;
use crate::models::{Season, Series};
use crate::mutation::SavePhase;
use crate::validation;

const CATEGORIES: &[&str] = &["action", "comedy", "crime", "drama", "scifi"];
const STATUSES: &[&str] = &["watching", "finished", "dropped", "planned"];

fn build_series_draft(
    title: &str,
    year: &str,
    category: &str,
    status: &str,
    seasons: &[Season],
) -> Result<api::SeriesDraft, ApiError> {
    let title = validation::require_text("title", title)?;
    let year = validation::parse_year("year", year)?;
    let category = validation::require_text("category", category)?;
    let status = validation::require_text("status", status)?;
    for season in seasons {
        if season.episodes == 0 {
            return Err(ApiError::validation("episodes", "must be greater than zero"));
        }
    }
    validation::check_child_ordinals("seasons", seasons, 1)?;
    Ok(api::SeriesDraft {
        title,
        year,
        category,
        status,
    })
}

#[component]
pub fn SeriesPage() -> impl IntoView {
    let ctx = AppContext::use_context();
    let ctrl = ListController::<Series>::new();
    ctrl.wire(move |q| async move { api::list_series(&q).await });

    let (editor, set_editor) = signal::<Option<Option<Series>>>(None);

    view! {
        <section class="page">
            <header class="page-header">
                <h2>"Series"</h2>
                <div class="page-actions">
                    <SearchBox
                        placeholder="Search series..."
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
                        "Add series"
                    </button>
                </div>
            </header>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Year"</th>
                        <th>"Category"</th>
                        <th>"Status"</th>
                        <th>"Seasons"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || ctrl.records().get()
                        key=|series| series.id
                        children=move |series| {
                            let phase = RwSignal::new(SavePhase::Idle);
                            let id = series.id;
                            let edit_series = series.clone();
                            view! {
                                <tr>
                                    <td>{series.title.clone()}</td>
                                    <td>{series.year}</td>
                                    <td>{series.category.clone()}</td>
                                    <td>{series.status.clone()}</td>
                                    <td>{series.seasons.len()}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editor.set(Some(Some(edit_series.clone())))
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
                                                    api::delete_series,
                                                    "Series",
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
                        let title = if editing.is_some() { "Edit series" } else { "Add series" };
                        view! {
                            <Modal title=title on_close=move |_| set_editor.set(None)>
                                <SeriesForm
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
fn SeriesForm(
    editing: Option<Series>,
    ctrl: ListController<Series>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::use_context();
    let phase = RwSignal::new(SavePhase::Idle);

    let series_id = editing.as_ref().map(|s| s.id);
    let server_seasons = StoredValue::new(
        editing
            .as_ref()
            .map(|s| s.seasons.clone())
            .unwrap_or_default(),
    );

    let (title, set_title) = signal(
        editing
            .as_ref()
            .map(|s| s.title.clone())
            .unwrap_or_default(),
    );
    let (year, set_year) = signal(
        editing
            .as_ref()
            .map(|s| s.year.to_string())
            .unwrap_or_default(),
    );
    let (category, set_category) = signal(
        editing
            .as_ref()
            .map(|s| s.category.clone())
            .unwrap_or_else(|| CATEGORIES[0].to_string()),
    );
    let (status, set_status) = signal(
        editing
            .as_ref()
            .map(|s| s.status.clone())
            .unwrap_or_else(|| STATUSES[0].to_string()),
    );
    let seasons = RwSignal::new(
        editing
            .as_ref()
            .map(|s| s.seasons.clone())
            .unwrap_or_default(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let local_seasons = seasons.get_untracked();
        let draft = match build_series_draft(
            &title.get_untracked(),
            &year.get_untracked(),
            &category.get_untracked(),
            &status.get_untracked(),
            &local_seasons,
        ) {
            Ok(draft) => draft,
            Err(err) => {
                ctx.feedback.error(err.to_string());
                return;
            }
        };

        match series_id {
            Some(id) => {
                let optimistic = Series {
                    id,
                    title: draft.title.clone(),
                    year: draft.year,
                    category: draft.category.clone(),
                    status: draft.status.clone(),
                    seasons: local_seasons.clone(),
                };
                let server = server_seasons.get_value();
                let fut = async move {
                    api::update_series(id, &draft).await?;
                    api::save_seasons(id, &server, &local_seasons).await?;
                    api::get_series(id).await
                };
                ctrl.submit_update(ctx, phase, optimistic, fut, "Series", move || {
                    on_close.run(())
                });
            }
            None => {
                let fut = async move { api::create_series(&draft).await };
                ctrl.submit_create(ctx, phase, fut, "Series", move || on_close.run(()));
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
            <label>
                "Status"
                <select
                    prop:value=move || status.get()
                    on:change=move |ev| set_status.set(event_target_value(&ev))
                >
                    {STATUSES
                        .iter()
                        .map(|s| view! { <option value=*s>{*s}</option> })
                        .collect_view()}
                </select>
            </label>

            <div class="sub-records">
                <div class="sub-records-header">
                    <span>"Seasons"</span>
                    <button
                        type="button"
                        on:click=move |_| {
                            seasons.update(|list| {
                                let next =
                                    list.iter().map(|s| s.season_no).max().unwrap_or(0) + 1;
                                list.push(Season {
                                    id: None,
                                    season_no: next,
                                    episodes: 1,
                                });
                            })
                        }
                    >
                        "Add season"
                    </button>
                </div>
                <For
                    each=move || { (0..seasons.get().len()).collect::<Vec<_>>() }
                    key=|i| *i
                    children=move |i| {
                        view! {
                            <div class="sub-record-row">
                                <input
                                    type="text"
                                    class="ordinal-input"
                                    prop:value=move || {
                                        seasons.with(|list| {
                                            list.get(i)
                                                .map(|s| s.season_no.to_string())
                                                .unwrap_or_default()
                                        })
                                    }
                                    on:input=move |ev| {
                                        if let Ok(season_no) =
                                            event_target_value(&ev).trim().parse()
                                        {
                                            seasons.update(|list| {
                                                if let Some(season) = list.get_mut(i) {
                                                    season.season_no = season_no;
                                                }
                                            });
                                        }
                                    }
                                />
                                <input
                                    type="text"
                                    prop:value=move || {
                                        seasons.with(|list| {
                                            list.get(i)
                                                .map(|s| s.episodes.to_string())
                                                .unwrap_or_default()
                                        })
                                    }
                                    on:input=move |ev| {
                                        if let Ok(episodes) =
                                            event_target_value(&ev).trim().parse()
                                        {
                                            seasons.update(|list| {
                                                if let Some(season) = list.get_mut(i) {
                                                    season.episodes = episodes;
                                                }
                                            });
                                        }
                                    }
                                />
                                <button
                                    type="button"
                                    class="remove-btn"
                                    on:click=move |_| {
                                        seasons.update(|list| {
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

    #[test]
    fn zero_episode_season_fails() {
        let seasons = vec![Season {
            id: None,
            season_no: 1,
            episodes: 0,
        }];
        assert!(build_series_draft("Dark", "2017", "scifi", "finished", &seasons).is_err());
    }

    #[test]
    fn new_season_below_minimum_ordinal_fails() {
        let seasons = vec![Season {
            id: None,
            season_no: 0,
            episodes: 8,
        }];
        assert!(build_series_draft("Dark", "2017", "scifi", "finished", &seasons).is_err());
    }
}

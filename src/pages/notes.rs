//! Notes Screen
//!
//! Markdown notes with a live preview pane in the editor modal. The note
//! date is normalized to the canonical "D MMM YYYY" form before submit.

use leptos::prelude::*;

use crate::api;
use crate::components::{ConfirmDialog, Modal, Pager, SearchBox};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::listing::ListController;
use crate::markdown::render_markdown;
use crate::models::Note;
use crate::mutation::SavePhase;
use crate::validation;

fn build_note_draft(title: &str, body: &str, note_date: &str) -> Result<api::NoteDraft, ApiError> {
    let title = validation::require_text("title", title)?;
    let note_date = validation::normalize_date("date", note_date)?;
    Ok(api::NoteDraft {
        title,
        body: body.to_string(),
        note_date,
    })
}

#[component]
pub fn NotesPage() -> impl IntoView {
    let ctx = AppContext::use_context();
    let ctrl = ListController::<Note>::new();
    ctrl.wire(move |q| async move { api::list_notes(&q).await });

    let (editor, set_editor) = signal::<Option<Option<Note>>>(None);

    view! {
        <section class="page">
            <header class="page-header">
                <h2>"Notes"</h2>
                <div class="page-actions">
                    <SearchBox
                        placeholder="Search notes..."
                        on_search=move |text| ctrl.set_search(text)
                    />
                    <button class="refresh-btn" on:click=move |_| ctrl.refresh()>
                        "Refresh"
                    </button>
                    <button class="add-btn" on:click=move |_| set_editor.set(Some(None))>
                        "Add note"
                    </button>
                </div>
            </header>

            <div class="card-grid">
                <For
                    each=move || ctrl.records().get()
                    key=|note| note.id
                    children=move |note| {
                        let phase = RwSignal::new(SavePhase::Idle);
                        let id = note.id;
                        let edit_note = note.clone();
                        let preview = render_markdown(&note.body);
                        view! {
                            <div class="card">
                                <div class="card-header">
                                    <span class="card-title">{note.title.clone()}</span>
                                    <span class="card-date">{note.note_date.clone()}</span>
                                </div>
                                <div class="card-body" inner_html=preview></div>
                                <div class="card-actions">
                                    <button
                                        class="edit-btn"
                                        on:click=move |_| {
                                            set_editor.set(Some(Some(edit_note.clone())))
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
                                                api::delete_note,
                                                "Note",
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
                        let title = if editing.is_some() { "Edit note" } else { "Add note" };
                        view! {
                            <Modal title=title on_close=move |_| set_editor.set(None)>
                                <NoteForm
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
fn NoteForm(
    editing: Option<Note>,
    ctrl: ListController<Note>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::use_context();
    let phase = RwSignal::new(SavePhase::Idle);

    let note_id = editing.as_ref().map(|n| n.id);
    let (title, set_title) = signal(
        editing
            .as_ref()
            .map(|n| n.title.clone())
            .unwrap_or_default(),
    );
    let (body, set_body) = signal(editing.as_ref().map(|n| n.body.clone()).unwrap_or_default());
    let (note_date, set_note_date) = signal(
        editing
            .as_ref()
            .map(|n| n.note_date.clone())
            .unwrap_or_default(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match build_note_draft(
            &title.get_untracked(),
            &body.get_untracked(),
            &note_date.get_untracked(),
        ) {
            Ok(draft) => draft,
            Err(err) => {
                ctx.feedback.error(err.to_string());
                return;
            }
        };

        match note_id {
            Some(id) => {
                let optimistic = Note {
                    id,
                    title: draft.title.clone(),
                    body: draft.body.clone(),
                    note_date: draft.note_date.clone(),
                };
                let fut = async move { api::update_note(id, &draft).await };
                ctrl.submit_update(ctx, phase, optimistic, fut, "Note", move || {
                    on_close.run(())
                });
            }
            None => {
                let fut = async move { api::create_note(&draft).await };
                ctrl.submit_create(ctx, phase, fut, "Note", move || on_close.run(()));
            }
        }
    };

    view! {
        <form class="record-form note-form" on:submit=submit>
            <label>
                "Title"
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Date"
                <input
                    type="text"
                    placeholder="e.g. 2 Oct 2025"
                    prop:value=move || note_date.get()
                    on:input=move |ev| set_note_date.set(event_target_value(&ev))
                />
            </label>
            <div class="note-editor">
                <textarea
                    prop:value=move || body.get()
                    on:input=move |ev| set_body.set(event_target_value(&ev))
                ></textarea>
                <div
                    class="note-preview"
                    inner_html=move || render_markdown(&body.get())
                ></div>
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
    fn date_is_normalized_before_submission() {
        let draft = build_note_draft("Test", "", "2 Oct 2025").unwrap();
        assert_eq!(draft.note_date, "2 Oct 2025");

        let draft = build_note_draft("Test", "", "2025-10-02").unwrap();
        assert_eq!(draft.note_date, "2 Oct 2025");
    }

    #[test]
    fn empty_title_fails_locally() {
        let err = build_note_draft("", "body", "2 Oct 2025").unwrap_err();
        assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "title"));
    }
}

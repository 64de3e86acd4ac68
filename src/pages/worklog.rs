//! Work Log Screen
//!
//! Construction-site records behind one screen with three tabs: daily
//! progress reports, inward stock, and site expenses. The expenses tab can
//! export the report PDF (opaque download, no client-side parsing).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ConfirmDialog, Modal, Pager, SearchBox};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::listing::ListController;
use crate::models::{DprEntry, ExpenseEntry, InwardEntry};
use crate::mutation::SavePhase;
use crate::validation;

const UNITS: &[&str] = &["bag", "kg", "ton", "cum", "nos", "litre"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum WorkTab {
    Dpr,
    Inward,
    Expenses,
}

impl WorkTab {
    const ALL: &'static [WorkTab] = &[WorkTab::Dpr, WorkTab::Inward, WorkTab::Expenses];

    fn label(&self) -> &'static str {
        match self {
            WorkTab::Dpr => "Daily Progress",
            WorkTab::Inward => "Inward Stock",
            WorkTab::Expenses => "Expenses",
        }
    }
}

fn build_dpr_draft(
    work_date: &str,
    description: &str,
    labour_count: &str,
) -> Result<api::DprDraft, ApiError> {
    let work_date = validation::normalize_date("date", work_date)?;
    let description = validation::require_text("description", description)?;
    let labour_count = validation::parse_count("labour", labour_count)?;
    Ok(api::DprDraft {
        work_date,
        description,
        labour_count,
    })
}

fn build_inward_draft(
    received_on: &str,
    material: &str,
    quantity: &str,
    unit: &str,
) -> Result<api::InwardDraft, ApiError> {
    let received_on = validation::normalize_date("date", received_on)?;
    let material = validation::require_text("material", material)?;
    let quantity = validation::parse_amount("quantity", quantity)?;
    let unit = validation::require_text("unit", unit)?;
    Ok(api::InwardDraft {
        received_on,
        material,
        quantity,
        unit,
    })
}

fn build_expense_draft(
    expense_date: &str,
    description: &str,
    amount: &str,
) -> Result<api::ExpenseDraft, ApiError> {
    let expense_date = validation::normalize_date("date", expense_date)?;
    let description = validation::require_text("description", description)?;
    let amount = validation::parse_amount("amount", amount)?;
    Ok(api::ExpenseDraft {
        expense_date,
        description,
        amount,
    })
}

#[component]
pub fn WorkLogPage() -> impl IntoView {
    let (tab, set_tab) = signal(WorkTab::Dpr);

    view! {
        <section class="page">
            <header class="page-header">
                <h2>"Work Log"</h2>
                <div class="tab-bar">
                    {WorkTab::ALL
                        .iter()
                        .map(|t| {
                            let t = *t;
                            view! {
                                <button
                                    class=move || {
                                        if tab.get() == t { "tab-btn active" } else { "tab-btn" }
                                    }
                                    on:click=move |_| set_tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </header>

            {move || match tab.get() {
                WorkTab::Dpr => view! { <DprTab /> }.into_any(),
                WorkTab::Inward => view! { <InwardTab /> }.into_any(),
                WorkTab::Expenses => view! { <ExpensesTab /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn DprTab() -> impl IntoView {
    let ctx = AppContext::use_context();
    let ctrl = ListController::<DprEntry>::new();
    ctrl.wire(move |q| async move { api::list_dpr(&q).await });

    let (editor, set_editor) = signal::<Option<Option<DprEntry>>>(None);

    view! {
        <div class="tab-panel">
            <div class="page-actions">
                <SearchBox
                    placeholder="Search work..."
                    on_search=move |text| ctrl.set_search(text)
                />
                <button class="refresh-btn" on:click=move |_| ctrl.refresh()>
                    "Refresh"
                </button>
                <button class="add-btn" on:click=move |_| set_editor.set(Some(None))>
                    "Add entry"
                </button>
            </div>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Work description"</th>
                        <th>"Labour"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || ctrl.records().get()
                        key=|entry| entry.id
                        children=move |entry| {
                            let phase = RwSignal::new(SavePhase::Idle);
                            let id = entry.id;
                            let edit_entry = entry.clone();
                            view! {
                                <tr>
                                    <td>{entry.work_date.clone()}</td>
                                    <td>{entry.description.clone()}</td>
                                    <td>{entry.labour_count}</td>
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
                                                    api::delete_dpr,
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
                                <DprForm
                                    editing=editing
                                    ctrl=ctrl
                                    on_close=move |_| set_editor.set(None)
                                />
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn DprForm(
    editing: Option<DprEntry>,
    ctrl: ListController<DprEntry>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::use_context();
    let phase = RwSignal::new(SavePhase::Idle);

    let entry_id = editing.as_ref().map(|e| e.id);
    let (work_date, set_work_date) = signal(
        editing
            .as_ref()
            .map(|e| e.work_date.clone())
            .unwrap_or_default(),
    );
    let (description, set_description) = signal(
        editing
            .as_ref()
            .map(|e| e.description.clone())
            .unwrap_or_default(),
    );
    let (labour, set_labour) = signal(
        editing
            .as_ref()
            .map(|e| e.labour_count.to_string())
            .unwrap_or_default(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match build_dpr_draft(
            &work_date.get_untracked(),
            &description.get_untracked(),
            &labour.get_untracked(),
        ) {
            Ok(draft) => draft,
            Err(err) => {
                ctx.feedback.error(err.to_string());
                return;
            }
        };

        match entry_id {
            Some(id) => {
                let optimistic = DprEntry {
                    id,
                    work_date: draft.work_date.clone(),
                    description: draft.description.clone(),
                    labour_count: draft.labour_count,
                };
                let fut = async move { api::update_dpr(id, &draft).await };
                ctrl.submit_update(ctx, phase, optimistic, fut, "Entry", move || {
                    on_close.run(())
                });
            }
            None => {
                let fut = async move { api::create_dpr(&draft).await };
                ctrl.submit_create(ctx, phase, fut, "Entry", move || on_close.run(()));
            }
        }
    };

    view! {
        <form class="record-form" on:submit=submit>
            <label>
                "Date"
                <input
                    type="text"
                    placeholder="e.g. 2 Oct 2025"
                    prop:value=move || work_date.get()
                    on:input=move |ev| set_work_date.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Work description"
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Labour count"
                <input
                    type="text"
                    prop:value=move || labour.get()
                    on:input=move |ev| set_labour.set(event_target_value(&ev))
                />
            </label>

            <button type="submit" disabled=move || phase.get().is_submitting()>
                {move || if phase.get().is_submitting() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

#[component]
fn InwardTab() -> impl IntoView {
    let ctx = AppContext::use_context();
    let ctrl = ListController::<InwardEntry>::new();
    ctrl.wire(move |q| async move { api::list_inward(&q).await });

    let (editor, set_editor) = signal::<Option<Option<InwardEntry>>>(None);

    view! {
        <div class="tab-panel">
            <div class="page-actions">
                <SearchBox
                    placeholder="Search materials..."
                    on_search=move |text| ctrl.set_search(text)
                />
                <button class="refresh-btn" on:click=move |_| ctrl.refresh()>
                    "Refresh"
                </button>
                <button class="add-btn" on:click=move |_| set_editor.set(Some(None))>
                    "Add stock"
                </button>
            </div>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Material"</th>
                        <th>"Quantity"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || ctrl.records().get()
                        key=|entry| entry.id
                        children=move |entry| {
                            let phase = RwSignal::new(SavePhase::Idle);
                            let id = entry.id;
                            let edit_entry = entry.clone();
                            view! {
                                <tr>
                                    <td>{entry.received_on.clone()}</td>
                                    <td>{entry.material.clone()}</td>
                                    <td>{format!("{} {}", entry.quantity, entry.unit)}</td>
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
                                                    api::delete_inward,
                                                    "Stock",
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
                        let title = if editing.is_some() { "Edit stock" } else { "Add stock" };
                        view! {
                            <Modal title=title on_close=move |_| set_editor.set(None)>
                                <InwardForm
                                    editing=editing
                                    ctrl=ctrl
                                    on_close=move |_| set_editor.set(None)
                                />
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn InwardForm(
    editing: Option<InwardEntry>,
    ctrl: ListController<InwardEntry>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::use_context();
    let phase = RwSignal::new(SavePhase::Idle);

    let entry_id = editing.as_ref().map(|e| e.id);
    let (received_on, set_received_on) = signal(
        editing
            .as_ref()
            .map(|e| e.received_on.clone())
            .unwrap_or_default(),
    );
    let (material, set_material) = signal(
        editing
            .as_ref()
            .map(|e| e.material.clone())
            .unwrap_or_default(),
    );
    let (quantity, set_quantity) = signal(
        editing
            .as_ref()
            .map(|e| e.quantity.to_string())
            .unwrap_or_default(),
    );
    let (unit, set_unit) = signal(
        editing
            .as_ref()
            .map(|e| e.unit.clone())
            .unwrap_or_else(|| UNITS[0].to_string()),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match build_inward_draft(
            &received_on.get_untracked(),
            &material.get_untracked(),
            &quantity.get_untracked(),
            &unit.get_untracked(),
        ) {
            Ok(draft) => draft,
            Err(err) => {
                ctx.feedback.error(err.to_string());
                return;
            }
        };

        match entry_id {
            Some(id) => {
                let optimistic = InwardEntry {
                    id,
                    received_on: draft.received_on.clone(),
                    material: draft.material.clone(),
                    quantity: draft.quantity,
                    unit: draft.unit.clone(),
                };
                let fut = async move { api::update_inward(id, &draft).await };
                ctrl.submit_update(ctx, phase, optimistic, fut, "Stock", move || {
                    on_close.run(())
                });
            }
            None => {
                let fut = async move { api::create_inward(&draft).await };
                ctrl.submit_create(ctx, phase, fut, "Stock", move || on_close.run(()));
            }
        }
    };

    view! {
        <form class="record-form" on:submit=submit>
            <label>
                "Date"
                <input
                    type="text"
                    placeholder="e.g. 2 Oct 2025"
                    prop:value=move || received_on.get()
                    on:input=move |ev| set_received_on.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Material"
                <input
                    type="text"
                    prop:value=move || material.get()
                    on:input=move |ev| set_material.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Quantity"
                <input
                    type="text"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Unit"
                <select
                    prop:value=move || unit.get()
                    on:change=move |ev| set_unit.set(event_target_value(&ev))
                >
                    {UNITS
                        .iter()
                        .map(|u| view! { <option value=*u>{*u}</option> })
                        .collect_view()}
                </select>
            </label>

            <button type="submit" disabled=move || phase.get().is_submitting()>
                {move || if phase.get().is_submitting() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

#[component]
fn ExpensesTab() -> impl IntoView {
    let ctx = AppContext::use_context();
    let ctrl = ListController::<ExpenseEntry>::new();
    ctrl.wire(move |q| async move { api::list_expenses(&q).await });

    let (editor, set_editor) = signal::<Option<Option<ExpenseEntry>>>(None);
    let (exporting, set_exporting) = signal(false);

    let export_pdf = move |_| {
        if exporting.get_untracked() {
            return;
        }
        set_exporting.set(true);
        ctx.pending.begin();
        spawn_local(async move {
            let result = api::download_expense_report().await;
            ctx.pending.end();
            if set_exporting.try_set(false).is_some() {
                // tab torn down while exporting
                return;
            }
            match result {
                Ok(()) => ctx.feedback.success("Report downloaded"),
                Err(err) => ctx.feedback.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="tab-panel">
            <div class="page-actions">
                <SearchBox
                    placeholder="Search expenses..."
                    on_search=move |text| ctrl.set_search(text)
                />
                <button class="refresh-btn" on:click=move |_| ctrl.refresh()>
                    "Refresh"
                </button>
                <button
                    class="export-btn"
                    disabled=move || exporting.get()
                    on:click=export_pdf
                >
                    {move || if exporting.get() { "Exporting..." } else { "Export PDF" }}
                </button>
                <button class="add-btn" on:click=move |_| set_editor.set(Some(None))>
                    "Add expense"
                </button>
            </div>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Description"</th>
                        <th>"Amount"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || ctrl.records().get()
                        key=|entry| entry.id
                        children=move |entry| {
                            let phase = RwSignal::new(SavePhase::Idle);
                            let id = entry.id;
                            let edit_entry = entry.clone();
                            view! {
                                <tr>
                                    <td>{entry.expense_date.clone()}</td>
                                    <td>{entry.description.clone()}</td>
                                    <td class="amount-cell">{format!("{:.2}", entry.amount)}</td>
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
                                                    api::delete_expense,
                                                    "Expense",
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
                            "Edit expense"
                        } else {
                            "Add expense"
                        };
                        view! {
                            <Modal title=title on_close=move |_| set_editor.set(None)>
                                <ExpenseForm
                                    editing=editing
                                    ctrl=ctrl
                                    on_close=move |_| set_editor.set(None)
                                />
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ExpenseForm(
    editing: Option<ExpenseEntry>,
    ctrl: ListController<ExpenseEntry>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::use_context();
    let phase = RwSignal::new(SavePhase::Idle);

    let entry_id = editing.as_ref().map(|e| e.id);
    let (expense_date, set_expense_date) = signal(
        editing
            .as_ref()
            .map(|e| e.expense_date.clone())
            .unwrap_or_default(),
    );
    let (description, set_description) = signal(
        editing
            .as_ref()
            .map(|e| e.description.clone())
            .unwrap_or_default(),
    );
    let (amount, set_amount) = signal(
        editing
            .as_ref()
            .map(|e| e.amount.to_string())
            .unwrap_or_default(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match build_expense_draft(
            &expense_date.get_untracked(),
            &description.get_untracked(),
            &amount.get_untracked(),
        ) {
            Ok(draft) => draft,
            Err(err) => {
                ctx.feedback.error(err.to_string());
                return;
            }
        };

        match entry_id {
            Some(id) => {
                let optimistic = ExpenseEntry {
                    id,
                    expense_date: draft.expense_date.clone(),
                    description: draft.description.clone(),
                    amount: draft.amount,
                };
                let fut = async move { api::update_expense(id, &draft).await };
                ctrl.submit_update(ctx, phase, optimistic, fut, "Expense", move || {
                    on_close.run(())
                });
            }
            None => {
                let fut = async move { api::create_expense(&draft).await };
                ctrl.submit_create(ctx, phase, fut, "Expense", move || on_close.run(()));
            }
        }
    };

    view! {
        <form class="record-form" on:submit=submit>
            <label>
                "Date"
                <input
                    type="text"
                    placeholder="e.g. 2 Oct 2025"
                    prop:value=move || expense_date.get()
                    on:input=move |ev| set_expense_date.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <input
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Amount"
                <input
                    type="text"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
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
    fn dpr_labour_must_be_positive() {
        assert!(build_dpr_draft("2 Oct 2025", "slab casting", "0").is_err());
        assert_eq!(
            build_dpr_draft("2 Oct 2025", "slab casting", "12")
                .unwrap()
                .labour_count,
            12
        );
    }

    #[test]
    fn inward_quantity_must_be_positive() {
        assert!(build_inward_draft("2 Oct 2025", "cement", "-1", "bag").is_err());
    }

    #[test]
    fn expense_dates_are_normalized() {
        let draft = build_expense_draft("02/10/2025", "diesel", "850").unwrap();
        assert_eq!(draft.expense_date, "2 Oct 2025");
    }
}

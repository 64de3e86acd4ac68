//! Investments Screen

use leptos::prelude::*;

use crate::api;
use crate::components::{ConfirmDialog, Modal, Pager, SearchBox};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::listing::ListController;
use crate::models::Investment;
use crate::mutation::SavePhase;
use crate::validation;

const KINDS: &[&str] = &["stocks", "mutual fund", "fixed deposit", "gold", "crypto"];

fn build_investment_draft(
    name: &str,
    kind: &str,
    amount: &str,
    invested_on: &str,
) -> Result<api::InvestmentDraft, ApiError> {
    let name = validation::require_text("name", name)?;
    let kind = validation::require_text("kind", kind)?;
    let amount = validation::parse_amount("amount", amount)?;
    let invested_on = validation::normalize_date("date", invested_on)?;
    Ok(api::InvestmentDraft {
        name,
        kind,
        amount,
        invested_on,
    })
}

#[component]
pub fn InvestmentsPage() -> impl IntoView {
    let ctx = AppContext::use_context();
    let ctrl = ListController::<Investment>::new();
    ctrl.wire(move |q| async move { api::list_investments(&q).await });

    let (editor, set_editor) = signal::<Option<Option<Investment>>>(None);

    // sum of the visible page only
    let page_total = move || {
        ctrl.records()
            .get()
            .iter()
            .map(|i| i.amount)
            .sum::<f64>()
    };

    view! {
        <section class="page">
            <header class="page-header">
                <h2>"Investments"</h2>
                <div class="page-actions">
                    <SearchBox
                        placeholder="Search investments..."
                        on_search=move |text| ctrl.set_search(text)
                    />
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        ctrl.set_category((!value.is_empty()).then_some(value));
                    }>
                        <option value="">"All kinds"</option>
                        {KINDS
                            .iter()
                            .map(|k| view! { <option value=*k>{*k}</option> })
                            .collect_view()}
                    </select>
                    <button class="refresh-btn" on:click=move |_| ctrl.refresh()>
                        "Refresh"
                    </button>
                    <button class="add-btn" on:click=move |_| set_editor.set(Some(None))>
                        "Add investment"
                    </button>
                </div>
            </header>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Kind"</th>
                        <th>"Amount"</th>
                        <th>"Date"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || ctrl.records().get()
                        key=|inv| inv.id
                        children=move |inv| {
                            let phase = RwSignal::new(SavePhase::Idle);
                            let id = inv.id;
                            let edit_inv = inv.clone();
                            view! {
                                <tr>
                                    <td>{inv.name.clone()}</td>
                                    <td>{inv.kind.clone()}</td>
                                    <td class="amount-cell">{format!("{:.2}", inv.amount)}</td>
                                    <td>{inv.invested_on.clone()}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editor.set(Some(Some(edit_inv.clone())))
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
                                                    api::delete_investment,
                                                    "Investment",
                                                )
                                            }
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="2">"Page total"</td>
                        <td class="amount-cell">{move || format!("{:.2}", page_total())}</td>
                        <td colspan="2"></td>
                    </tr>
                </tfoot>
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
                            "Edit investment"
                        } else {
                            "Add investment"
                        };
                        view! {
                            <Modal title=title on_close=move |_| set_editor.set(None)>
                                <InvestmentForm
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
fn InvestmentForm(
    editing: Option<Investment>,
    ctrl: ListController<Investment>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::use_context();
    let phase = RwSignal::new(SavePhase::Idle);

    let inv_id = editing.as_ref().map(|i| i.id);
    let (name, set_name) = signal(editing.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let (kind, set_kind) = signal(
        editing
            .as_ref()
            .map(|i| i.kind.clone())
            .unwrap_or_else(|| KINDS[0].to_string()),
    );
    let (amount, set_amount) = signal(
        editing
            .as_ref()
            .map(|i| i.amount.to_string())
            .unwrap_or_default(),
    );
    let (invested_on, set_invested_on) = signal(
        editing
            .as_ref()
            .map(|i| i.invested_on.clone())
            .unwrap_or_default(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match build_investment_draft(
            &name.get_untracked(),
            &kind.get_untracked(),
            &amount.get_untracked(),
            &invested_on.get_untracked(),
        ) {
            Ok(draft) => draft,
            Err(err) => {
                ctx.feedback.error(err.to_string());
                return;
            }
        };

        match inv_id {
            Some(id) => {
                let optimistic = Investment {
                    id,
                    name: draft.name.clone(),
                    kind: draft.kind.clone(),
                    amount: draft.amount,
                    invested_on: draft.invested_on.clone(),
                };
                let fut = async move { api::update_investment(id, &draft).await };
                ctrl.submit_update(ctx, phase, optimistic, fut, "Investment", move || {
                    on_close.run(())
                });
            }
            None => {
                let fut = async move { api::create_investment(&draft).await };
                ctrl.submit_create(ctx, phase, fut, "Investment", move || on_close.run(()));
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
                "Kind"
                <select
                    prop:value=move || kind.get()
                    on:change=move |ev| set_kind.set(event_target_value(&ev))
                >
                    {KINDS
                        .iter()
                        .map(|k| view! { <option value=*k>{*k}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Amount"
                <input
                    type="text"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Date"
                <input
                    type="text"
                    placeholder="e.g. 2 Oct 2025"
                    prop:value=move || invested_on.get()
                    on:input=move |ev| set_invested_on.set(event_target_value(&ev))
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
    fn non_positive_amount_fails() {
        assert!(build_investment_draft("NIFTY ETF", "stocks", "0", "2 Oct 2025").is_err());
        assert!(build_investment_draft("NIFTY ETF", "stocks", "-5", "2 Oct 2025").is_err());
    }

    #[test]
    fn valid_draft_normalizes_date() {
        let draft =
            build_investment_draft("NIFTY ETF", "stocks", "2500.75", "2025-10-02").unwrap();
        assert_eq!(draft.invested_on, "2 Oct 2025");
        assert_eq!(draft.amount, 2500.75);
    }
}

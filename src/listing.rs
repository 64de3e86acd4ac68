//! List Controller
//!
//! One instance per resource screen. Bundles the query state, the page
//! store, and the load lifecycle: any query change supersedes the previous
//! fetch and issues a new one, and a stale result is dropped before it can
//! touch the store ("last request wins").

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::{Keyed, ListPage};
use crate::query::{FetchGuard, PageQuery};
use crate::store::ListStore;

pub struct ListController<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    query: RwSignal<PageQuery>,
    store: ListStore<T>,
    loading: RwSignal<bool>,
    load_error: RwSignal<Option<String>>,
    has_next: RwSignal<bool>,
    guard: StoredValue<FetchGuard, LocalStorage>,
    refresh_tick: RwSignal<u32>,
}

impl<T> Clone for ListController<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListController<T> where T: Keyed + Clone + Send + Sync + 'static {}

impl<T> ListController<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(PageQuery::default()),
            store: ListStore::new(),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
            has_next: RwSignal::new(false),
            guard: StoredValue::new_local(FetchGuard::new()),
            refresh_tick: RwSignal::new(0),
        }
    }

    /// Install the fetch effect. Reruns whenever the query changes or an
    /// explicit refresh is requested. Must be called inside the component
    /// that owns the screen.
    ///
    /// The continuation only uses `try_` accessors: if the screen was torn
    /// down while the request was in flight, its reactive nodes are gone and
    /// the result is dropped silently, same as a superseded request.
    pub fn wire<F, Fut>(self, fetch: F)
    where
        F: Fn(PageQuery) -> Fut + 'static,
        Fut: Future<Output = Result<ListPage<T>, ApiError>> + 'static,
    {
        let ctx = AppContext::use_context();
        Effect::new(move |_| {
            let _ = self.refresh_tick.get();
            let query = self.query.get();
            let token = self.guard.with_value(|g| g.begin());
            self.loading.set(true);
            ctx.pending.begin();
            let fut = fetch(query.clone());
            spawn_local(async move {
                let result = fut.await;
                ctx.pending.end();
                // superseded or disposed while in flight; swallow silently
                if self.guard.try_with_value(|g| g.is_current(token)) != Some(true) {
                    return;
                }
                let _ = self.loading.try_set(false);
                match result {
                    Ok(page) => {
                        let _ = self
                            .has_next
                            .try_set(page.has_next(query.offset(), query.page_size));
                        let _ = self.load_error.try_set(None);
                        self.store.replace_all(page.items);
                    }
                    Err(err) => {
                        // a failed load never leaves stale rows behind
                        self.store.clear();
                        let _ = self.has_next.try_set(false);
                        let message = err.to_string();
                        let _ = self.load_error.try_set(Some(message.clone()));
                        ctx.feedback.error(message);
                    }
                }
            });
        });
    }

    pub fn store(&self) -> ListStore<T> {
        self.store
    }

    pub fn records(&self) -> RwSignal<Vec<T>> {
        self.store.records()
    }

    pub fn query(&self) -> RwSignal<PageQuery> {
        self.query
    }

    pub fn loading(&self) -> RwSignal<bool> {
        self.loading
    }

    pub fn load_error(&self) -> RwSignal<Option<String>> {
        self.load_error
    }

    pub fn has_next(&self) -> RwSignal<bool> {
        self.has_next
    }

    pub fn set_search(&self, search: String) {
        self.query.update(|q| q.set_search(search));
    }

    pub fn set_category(&self, category: Option<String>) {
        self.query.update(|q| q.set_category(category));
    }

    pub fn next_page(&self) {
        if !self.has_next.get_untracked() {
            return;
        }
        let last_len = self.store.records().with_untracked(Vec::len);
        self.query.update(|q| {
            q.try_next(last_len);
        });
    }

    pub fn prev_page(&self) {
        self.query.update(|q| {
            q.try_prev();
        });
    }

    /// User-triggered refresh; also the recovery path after a failed
    /// optimistic mutation.
    pub fn refresh(&self) {
        self.refresh_tick.update(|t| *t += 1);
    }

    /// Create flow: no optimistic insert; the list is refetched after the
    /// server confirms, which keeps pagination and totals correct.
    pub fn submit_create<Fut>(
        self,
        ctx: AppContext,
        phase: RwSignal<crate::mutation::SavePhase>,
        fut: Fut,
        noun: &'static str,
        on_done: impl FnOnce() + 'static,
    ) where
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        if !phase.try_update(|p| p.begin_submit()).unwrap_or(false) {
            return;
        }
        ctx.pending.begin();
        spawn_local(async move {
            let result = fut.await;
            ctx.pending.end();
            let ok = result.is_ok();
            if phase.try_update(|p| p.finish(ok)).is_none() {
                // form torn down while the request was in flight
                return;
            }
            match result {
                Ok(_created) => {
                    ctx.feedback.success(format!("{} added", noun));
                    self.refresh();
                    on_done();
                }
                Err(err) => {
                    // form stays open for correction
                    ctx.feedback.error(err.to_string());
                }
            }
        });
    }

    /// Update flow: the edited record is applied to the page immediately,
    /// then replaced by the server's canonical record on success or rolled
    /// back verbatim on failure.
    pub fn submit_update<Fut>(
        self,
        ctx: AppContext,
        phase: RwSignal<crate::mutation::SavePhase>,
        optimistic: T,
        fut: Fut,
        noun: &'static str,
        on_done: impl FnOnce() + 'static,
    ) where
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        if !phase.try_update(|p| p.begin_submit()).unwrap_or(false) {
            return;
        }
        let snapshot = self.store.snapshot();
        self.store.update_optimistic(optimistic);
        ctx.pending.begin();
        spawn_local(async move {
            let result = fut.await;
            ctx.pending.end();
            let ok = result.is_ok();
            if phase.try_update(|p| p.finish(ok)).is_none() {
                return;
            }
            match result {
                Ok(confirmed) => {
                    self.store.update_optimistic(confirmed);
                    ctx.feedback.success(format!("{} saved", noun));
                    on_done();
                }
                Err(err) => {
                    self.store.rollback(snapshot);
                    ctx.feedback.error(err.to_string());
                }
            }
        });
    }

    /// Delete flow: the row disappears immediately and comes back on
    /// failure. Only reachable from a confirmed `ConfirmDialog`.
    pub fn submit_delete<F, Fut>(
        self,
        ctx: AppContext,
        phase: RwSignal<crate::mutation::SavePhase>,
        id: u32,
        delete: F,
        noun: &'static str,
    ) where
        F: FnOnce(u32) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        if !phase.try_update(|p| p.begin_submit()).unwrap_or(false) {
            return;
        }
        let snapshot = self.store.snapshot();
        self.store.remove_optimistic(id);
        ctx.pending.begin();
        spawn_local(async move {
            let result = delete(id).await;
            ctx.pending.end();
            match result {
                Ok(()) => {
                    let _ = phase.try_update(|p| p.finish(true));
                    ctx.feedback.success(format!("{} deleted", noun));
                }
                Err(err) => {
                    let _ = phase.try_update(|p| p.finish(false));
                    self.store.rollback(snapshot);
                    ctx.feedback.error(err.to_string());
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FetchGuard;

    #[test]
    fn staleness_check_survives_guard_disposal() {
        // the guard is owned by the screen; a fetch resolving after
        // teardown must see "not current", not panic
        let guard: StoredValue<FetchGuard, LocalStorage> =
            StoredValue::new_local(FetchGuard::new());
        let token = guard.with_value(|g| g.begin());
        assert_eq!(guard.try_with_value(|g| g.is_current(token)), Some(true));

        guard.dispose();
        assert_eq!(guard.try_with_value(|g| g.is_current(token)), None);
    }
}

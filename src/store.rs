//! Resource List Store
//!
//! Owns the fetched records for the current page of one resource list.
//! All changes go through the optimistic operations here; nothing else
//! mutates the page array. Operations never touch records outside the
//! loaded page - cross-page consistency comes from refetching.

use leptos::prelude::*;

use crate::models::Keyed;

/// Verbatim copy of the page array, captured before an optimistic change
/// and restored on server failure.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot<T>(Vec<T>);

/// Signal-backed store for the current page of one resource.
#[derive(Debug)]
pub struct ListStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    records: RwSignal<Vec<T>>,
}

impl<T> Clone for ListStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListStore<T> where T: Clone + Send + Sync + 'static {}

impl<T> ListStore<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(Vec::new()),
        }
    }

    pub fn records(&self) -> RwSignal<Vec<T>> {
        self.records
    }

    /// Full replacement on successful list fetch.
    ///
    /// Like every mutator here, this is a no-op once the owning screen has
    /// been torn down: callers run in `spawn_local` continuations that may
    /// outlive the page, and a write landing after disposal must be dropped,
    /// not panic.
    pub fn replace_all(&self, records: Vec<T>) {
        let _ = self.records.try_set(records);
    }

    pub fn clear(&self) {
        let _ = self.records.try_set(Vec::new());
    }

    pub fn snapshot(&self) -> PageSnapshot<T> {
        PageSnapshot(self.records.get_untracked())
    }

    pub fn rollback(&self, snapshot: PageSnapshot<T>) {
        let _ = self.records.try_set(snapshot.0);
    }

    pub fn insert_optimistic(&self, record: T) {
        let _ = self
            .records
            .try_update(|records| insert_head(records, record));
    }

    pub fn update_optimistic(&self, updated: T) {
        let _ = self
            .records
            .try_update(|records| update_by_key(records, updated));
    }

    pub fn remove_optimistic(&self, key: u32) {
        let _ = self
            .records
            .try_update(|records| remove_by_key(records, key));
    }
}

/// Prepend a newly created record.
pub fn insert_head<T>(records: &mut Vec<T>, record: T) {
    records.insert(0, record);
}

/// Replace the record matching `updated`'s key. No-op if the record is not
/// on the current page.
pub fn update_by_key<T: Keyed>(records: &mut Vec<T>, updated: T) {
    if let Some(slot) = records.iter_mut().find(|r| r.key() == updated.key()) {
        *slot = updated;
    }
}

/// Remove the record matching `key`. No-op if absent.
pub fn remove_by_key<T: Keyed>(records: &mut Vec<T>, key: u32) {
    records.retain(|r| r.key() != key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Website;

    fn site(id: u32, title: &str) -> Website {
        Website {
            id,
            title: title.to_string(),
            url: format!("https://{}.example.com", title),
            category: "misc".to_string(),
        }
    }

    #[test]
    fn insert_prepends() {
        let mut page = vec![site(1, "a"), site(2, "b")];
        insert_head(&mut page, site(3, "c"));
        assert_eq!(page[0].id, 3);
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn update_replaces_matching_record() {
        let mut page = vec![site(1, "a"), site(2, "b")];
        update_by_key(&mut page, site(2, "renamed"));
        assert_eq!(page[1].title, "renamed");
    }

    #[test]
    fn update_is_noop_for_absent_id() {
        let mut page = vec![site(1, "a")];
        let before = page.clone();
        update_by_key(&mut page, site(9, "ghost"));
        assert_eq!(page, before);
    }

    #[test]
    fn remove_is_noop_for_absent_id() {
        let mut page = vec![site(1, "a")];
        remove_by_key(&mut page, 9);
        assert_eq!(page.len(), 1);
        remove_by_key(&mut page, 1);
        assert!(page.is_empty());
    }

    #[test]
    fn writes_after_dispose_are_dropped() {
        // a slow response landing after the screen is torn down
        let store = ListStore::<Website>::new();
        store.replace_all(vec![site(1, "a")]);
        let snapshot = store.snapshot();

        store.records().dispose();

        store.replace_all(vec![site(2, "b")]);
        store.update_optimistic(site(1, "renamed"));
        store.remove_optimistic(1);
        store.rollback(snapshot);
        store.clear();
    }

    #[test]
    fn rollback_restores_pre_mutation_page() {
        let before = vec![site(1, "a"), site(2, "b")];
        let snapshot = PageSnapshot(before.clone());

        let mut page = before.clone();
        remove_by_key(&mut page, 1);
        update_by_key(&mut page, site(2, "changed"));
        assert_ne!(page, before);

        // restore verbatim
        let PageSnapshot(restored) = snapshot;
        assert_eq!(restored, before);
    }
}

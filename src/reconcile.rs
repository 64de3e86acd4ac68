//! Child-collection Reconciliation
//!
//! Movie parts and series seasons are edited as a whole inside the parent's
//! modal, then diffed against the last-known server state. The diff yields
//! three batches which are issued in create -> update -> delete order.

use crate::models::{MoviePart, Season};

/// A sub-record that can be reconciled against its server-side collection.
pub trait ChildRecord: Clone + PartialEq {
    /// Server-assigned id, `None` for locally added entries.
    fn server_id(&self) -> Option<u32>;
    /// Ordinal key, unique within the parent (part number, season number).
    fn ordinal(&self) -> u32;
    /// The same record carrying a server id, used when an id-less local
    /// entry matched a server entry by ordinal.
    fn with_server_id(self, id: u32) -> Self;
}

impl ChildRecord for MoviePart {
    fn server_id(&self) -> Option<u32> {
        self.id
    }

    fn ordinal(&self) -> u32 {
        self.part_no
    }

    fn with_server_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

impl ChildRecord for Season {
    fn server_id(&self) -> Option<u32> {
        self.id
    }

    fn ordinal(&self) -> u32 {
        self.season_no
    }

    fn with_server_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChildDiff<C> {
    /// Present locally with no matching server id or ordinal key.
    pub create: Vec<C>,
    /// Matched a server entry (by id, or by ordinal for id-less locals)
    /// with changed fields. Each carries its server id.
    pub update: Vec<C>,
    /// Server ids no longer present in the local set.
    pub delete: Vec<u32>,
}

impl<C> ChildDiff<C> {
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.update.is_empty() && self.delete.is_empty()
    }
}

/// Compare the locally edited set against the last-known server children.
pub fn diff_children<C: ChildRecord>(server: &[C], local: &[C]) -> ChildDiff<C> {
    let mut create = Vec::new();
    let mut update = Vec::new();
    let mut matched_server_ids = Vec::new();

    for entry in local {
        let matched = match entry.server_id() {
            Some(id) => server.iter().find(|s| s.server_id() == Some(id)),
            None => server.iter().find(|s| s.ordinal() == entry.ordinal()),
        };
        // a server entry without an id cannot be addressed for update or
        // delete, so it counts as absent
        let matched = matched.and_then(|s| s.server_id().map(|id| (s, id)));
        match matched {
            Some((existing, server_id)) => {
                matched_server_ids.push(server_id);
                let candidate = entry.clone().with_server_id(server_id);
                if candidate != *existing {
                    update.push(candidate);
                }
            }
            None => create.push(entry.clone()),
        }
    }

    let delete = server
        .iter()
        .filter_map(ChildRecord::server_id)
        .filter(|id| !matched_server_ids.contains(id))
        .collect();

    ChildDiff {
        create,
        update,
        delete,
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
    fn one_update_one_create_one_delete() {
        let server = vec![part(Some(1), 1, "a"), part(Some(2), 2, "b")];
        let local = vec![part(Some(1), 1, "x"), part(None, 3, "c")];

        let diff = diff_children(&server, &local);

        assert_eq!(diff.update, vec![part(Some(1), 1, "x")]);
        assert_eq!(diff.create, vec![part(None, 3, "c")]);
        assert_eq!(diff.delete, vec![2]);
    }

    #[test]
    fn unchanged_children_produce_empty_diff() {
        let server = vec![part(Some(1), 1, "a"), part(Some(2), 2, "b")];
        let diff = diff_children(&server, &server.clone());
        assert!(diff.is_empty());
    }

    #[test]
    fn idless_local_matching_ordinal_becomes_update() {
        // the edit form dropped the id but kept the part number
        let server = vec![part(Some(7), 1, "a")];
        let local = vec![part(None, 1, "renamed")];

        let diff = diff_children(&server, &local);

        assert!(diff.create.is_empty());
        assert!(diff.delete.is_empty());
        assert_eq!(diff.update, vec![part(Some(7), 1, "renamed")]);
    }

    #[test]
    fn idless_server_entry_counts_as_absent() {
        // malformed response: the backend omitted a child id
        let server = vec![part(None, 1, "a")];
        let local = vec![part(None, 1, "renamed")];

        let diff = diff_children(&server, &local);

        assert_eq!(diff.create, vec![part(None, 1, "renamed")]);
        assert!(diff.update.is_empty());
        assert!(diff.delete.is_empty());
    }

    #[test]
    fn emptied_local_set_deletes_everything() {
        let server = vec![part(Some(1), 1, "a"), part(Some(2), 2, "b")];
        let diff = diff_children::<MoviePart>(&server, &[]);
        assert!(diff.create.is_empty());
        assert!(diff.update.is_empty());
        assert_eq!(diff.delete, vec![1, 2]);
    }
}

//! Identity-keyed mutable dataset
//!
//! The rendering engine holds its items and groups in long-lived mutable
//! collections keyed by identity, with idempotent update-if-exists
//! semantics. This is the only persistent mutable state in the system;
//! the panel owns it and converges it through [`MutableDataSet::apply`].

use std::collections::{HashMap, HashSet};

use chronoline_core::DatasetDiff;
use chronoline_types::{Id, Keyed};

/// Insertion-ordered, identity-keyed mutable collection.
#[derive(Debug, Clone)]
pub struct MutableDataSet<T: Keyed> {
    order: Vec<Id>,
    entries: HashMap<Id, T>,
}

impl<T: Keyed> Default for MutableDataSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> MutableDataSet<T> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The identities currently held, as a set for reconciliation.
    pub fn id_set(&self) -> HashSet<Id> {
        self.entries.keys().cloned().collect()
    }

    pub fn get(&self, id: &Id) -> Option<&T> {
        self.entries.get(id)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Idempotent upsert: an existing identity is overwritten in place
    /// (keeping its position), a new one is appended.
    pub fn update(&mut self, records: Vec<T>) {
        for record in records {
            let key = record.key().clone();
            if self.entries.insert(key.clone(), record).is_none() {
                self.order.push(key);
            }
        }
    }

    /// Alias for bulk insertion into an empty or cleared dataset.
    pub fn add(&mut self, records: Vec<T>) {
        self.update(records);
    }

    pub fn remove(&mut self, ids: &[Id]) {
        if ids.is_empty() {
            return;
        }
        for id in ids {
            self.entries.remove(id);
        }
        self.order.retain(|id| self.entries.contains_key(id));
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }

    /// Apply a reconciliation diff, removals strictly before upserts so
    /// no identity is ever held twice mid-pass. Returns the number of
    /// records removed and upserted.
    pub fn apply(&mut self, diff: DatasetDiff<T>) -> (usize, usize) {
        let removed = diff.to_remove.len();
        let upserted = diff.to_upsert.len();
        self.remove(&diff.to_remove);
        self.update(diff.to_upsert);
        (removed, upserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronoline_core::reconcile;
    use chronoline_types::GroupDescriptor;

    fn entry(id: i64, content: &str) -> GroupDescriptor {
        GroupDescriptor {
            id: Id::Int(id),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_update_is_an_idempotent_upsert() {
        let mut ds = MutableDataSet::new();
        ds.update(vec![entry(1, "a"), entry(2, "b")]);
        ds.update(vec![entry(1, "a2")]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(&Id::Int(1)).unwrap().content, "a2");
    }

    #[test]
    fn test_upsert_keeps_insertion_order() {
        let mut ds = MutableDataSet::new();
        ds.update(vec![entry(1, "a"), entry(2, "b"), entry(3, "c")]);
        ds.update(vec![entry(2, "b2")]);
        let order: Vec<_> = ds.iter().map(|e| e.id.clone()).collect();
        assert_eq!(order, vec![Id::Int(1), Id::Int(2), Id::Int(3)]);
    }

    #[test]
    fn test_remove_then_clear() {
        let mut ds = MutableDataSet::new();
        ds.add(vec![entry(1, "a"), entry(2, "b")]);
        ds.remove(&[Id::Int(1)]);
        assert_eq!(ds.len(), 1);
        assert!(ds.get(&Id::Int(1)).is_none());
        ds.clear();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_apply_converges_to_the_next_list() {
        let mut ds = MutableDataSet::new();
        ds.add(vec![entry(1, "a"), entry(2, "b"), entry(3, "c")]);
        let diff = reconcile(&ds.id_set(), vec![entry(2, "b"), entry(3, "c"), entry(4, "d")]);
        let (removed, upserted) = ds.apply(diff);
        assert_eq!((removed, upserted), (1, 3));
        let expected: std::collections::HashSet<Id> =
            [Id::Int(2), Id::Int(3), Id::Int(4)].into_iter().collect();
        assert_eq!(ds.id_set(), expected);
    }

    #[test]
    fn test_apply_never_duplicates_an_identity() {
        let mut ds = MutableDataSet::new();
        ds.add(vec![entry(1, "a")]);
        let diff = reconcile(&ds.id_set(), vec![entry(1, "a2"), entry(1, "a3")]);
        ds.apply(diff);
        // Last write wins; the dataset still holds one entry per identity.
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.iter().count(), 1);
        assert_eq!(ds.get(&Id::Int(1)).unwrap().content, "a3");
    }
}

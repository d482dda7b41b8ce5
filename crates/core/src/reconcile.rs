//! Converging an external mutable dataset by identity

use std::collections::HashSet;

use chronoline_types::{Id, Keyed};

/// The operations that converge a mutable dataset to a new canonical
/// list: identities to remove, then records to upsert.
///
/// Removals must be applied before upserts so that no moment exists where
/// two records claim one identity in the target dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetDiff<T> {
    pub to_remove: Vec<Id>,
    pub to_upsert: Vec<T>,
}

/// Compute the operations converging a dataset holding `current_ids` to
/// exactly `next`.
///
/// `to_remove` is the set difference (held but no longer wanted).
/// `to_upsert` is the full next list, unconditionally: records whose
/// attributes changed under an unchanged identity are resubmitted and
/// rely on the target's idempotent update-if-exists semantics. This is a
/// full replace by identity, not a field-level patch.
pub fn reconcile<T: Keyed>(current_ids: &HashSet<Id>, next: Vec<T>) -> DatasetDiff<T> {
    let next_ids: HashSet<&Id> = next.iter().map(Keyed::key).collect();
    let to_remove = current_ids
        .iter()
        .filter(|id| !next_ids.contains(*id))
        .cloned()
        .collect();
    DatasetDiff {
        to_remove,
        to_upsert: next,
    }
}

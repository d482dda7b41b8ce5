//! Deriving group descriptors from the current item list

use std::collections::HashSet;

use chronoline_types::{GroupDescriptor, RawItem};

/// Collect the distinct groups referenced by `items`, in first-seen
/// order.
///
/// Falsy group values (absent, empty string, integer zero) are excluded;
/// an item carrying one still renders, just ungrouped. De-duplication is
/// on the typed value, so the integer `1` and the string `"1"` yield two
/// separate groups.
pub fn extract_groups(items: &[RawItem]) -> Vec<GroupDescriptor> {
    let mut seen = HashSet::new();
    let mut groups = Vec::new();

    for item in items {
        let Some(group) = &item.group else { continue };
        if group.is_falsy() || !seen.insert(group.clone()) {
            continue;
        }
        groups.push(GroupDescriptor {
            id: group.clone(),
            content: group.to_string(),
        });
    }

    groups
}

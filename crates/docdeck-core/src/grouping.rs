//! Grouping of flat search matches into per-file result groups

use std::collections::HashMap;

use crate::types::{SearchGroup, SearchMatch};

/// Group a flat match sequence by file, preserving first-seen file order.
///
/// Single stable O(n) pass: the first match for a file opens its group at the
/// next position, later matches for the same file append to that group. The
/// output order is therefore the order in which file ids first appear in the
/// input, not registry or alphabetical order.
///
/// An empty input yields an empty vec; the caller renders an empty state,
/// not an error.
pub fn group_matches(matches: Vec<SearchMatch>) -> Vec<SearchGroup> {
    let mut groups: Vec<SearchGroup> = Vec::new();
    let mut index_by_file: HashMap<String, usize> = HashMap::new();

    for m in matches {
        match index_by_file.get(&m.file_id) {
            Some(&i) => groups[i].matches.push(m),
            None => {
                index_by_file.insert(m.file_id.clone(), groups.len());
                groups.push(SearchGroup {
                    file_id: m.file_id.clone(),
                    filename: m.filename.clone(),
                    kind: m.kind,
                    matches: vec![m],
                });
            }
        }
    }

    groups
}

/// Total number of matches across all groups.
pub fn total_matches(groups: &[SearchGroup]) -> usize {
    groups.iter().map(|g| g.matches.len()).sum()
}

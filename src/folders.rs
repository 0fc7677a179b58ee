//! Library root deduplication.
//!
//! Before a scan the configured roots are collapsed so no folder is walked
//! twice: exact repeats go, and so does any folder already covered by another
//! root in the same set.

use std::path::Path;

use crate::config::FolderMatch;

/// Remove repeated roots and roots nested inside another root, using raw
/// substring containment.
pub fn remove_useless_folders<S: AsRef<str>>(folders: &[S]) -> Vec<String> {
    remove_useless_folders_with(folders, FolderMatch::Substring)
}

/// Same as [`remove_useless_folders`] with an explicit containment test.
///
/// Input order is preserved. A folder that is itself covered does not mark
/// anything else, so the survivors never cover one another.
pub fn remove_useless_folders_with<S: AsRef<str>>(
    folders: &[S],
    mode: FolderMatch,
) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(folders.len());
    for folder in folders {
        let folder = folder.as_ref();
        if !unique.iter().any(|f| f == folder) {
            unique.push(folder.to_string());
        }
    }

    let mut covered = vec![false; unique.len()];
    for (i, folder) in unique.iter().enumerate() {
        if covered[i] {
            continue;
        }
        for (j, subfolder) in unique.iter().enumerate() {
            if i != j && is_covered_by(subfolder, folder, mode) {
                covered[j] = true;
            }
        }
    }

    unique
        .into_iter()
        .zip(covered)
        .filter_map(|(folder, covered)| (!covered).then_some(folder))
        .collect()
}

fn is_covered_by(candidate: &str, root: &str, mode: FolderMatch) -> bool {
    match mode {
        FolderMatch::Substring => candidate.contains(root),
        FolderMatch::PathPrefix => Path::new(candidate).starts_with(Path::new(root)),
    }
}

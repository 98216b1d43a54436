//! Find tagged files use case

use crate::application::TagStore;
use crate::domain::TagSet;
use crate::error::{FtagError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Tags a matching file must all carry.
    pub tags: TagSet,
    pub recursive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindReport {
    pub scanned_files: usize,
    pub matches: Vec<PathBuf>,
}

/// Walk `root` and collect the files whose tag set contains every tag in
/// `options.tags`. Hidden entries are skipped, as are files whose metadata
/// cannot be read.
pub fn find_tagged(store: &TagStore, root: &Path, options: &FindOptions) -> Result<FindReport> {
    if !root.exists() {
        return Err(FtagError::PathNotFound(root.to_path_buf()));
    }

    let mut walker = WalkDir::new(root);
    if !options.recursive {
        walker = walker.max_depth(1);
    }
    let entries = walker.into_iter().filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .map(|name| !name.starts_with('.'))
            .unwrap_or(true)
    });

    let mut scanned_files = 0usize;
    let mut matches = Vec::new();

    for entry in entries {
        let Ok(entry) = entry else {
            continue;
        };
        if !entry.file_type().is_file() {
            continue;
        }
        scanned_files += 1;

        let Ok(tags) = store.get_tags(entry.path()) else {
            continue;
        };
        if options.tags.is_subset(&tags) {
            matches.push(entry.path().to_path_buf());
        }
    }

    matches.sort();

    Ok(FindReport {
        scanned_files,
        matches,
    })
}

//! Tag store use cases

use crate::domain::TagSet;
use crate::error::{FtagError, Result};
use crate::infrastructure::{default_backend, MetadataBackend};
use std::path::Path;

/// Service reading and writing the tag set attached to a path.
///
/// Every call is one read or one read-modify-write against the backend's
/// metadata store; no state is held between calls. `add_tags` and
/// `remove_tags` are not atomic against other writers of the same path, so
/// concurrent mutators may lose updates. Callers serialize their own access.
pub struct TagStore {
    backend: Box<dyn MetadataBackend>,
}

impl TagStore {
    /// Create a store over the given backend.
    pub fn new(backend: Box<dyn MetadataBackend>) -> Self {
        TagStore { backend }
    }

    /// Create a store over the platform default backend.
    pub fn with_default_backend() -> Self {
        TagStore::new(default_backend())
    }

    /// Current tag set of `path`. A path that was never tagged has an
    /// empty set.
    pub fn get_tags(&self, path: &Path) -> Result<TagSet> {
        self.ensure_exists(path)?;
        self.backend.read_tags(path)
    }

    /// Replace the entire tag set of `path`. An empty set clears all tags.
    pub fn set_tags(&self, path: &Path, tags: &TagSet) -> Result<()> {
        self.ensure_exists(path)?;
        self.backend.write_tags(path, tags)
    }

    /// Union `tags` into the current set.
    pub fn add_tags(&self, path: &Path, tags: &TagSet) -> Result<()> {
        self.ensure_exists(path)?;
        let mut current = self.backend.read_tags(path)?;
        current.extend(tags.iter().cloned());
        self.backend.write_tags(path, &current)
    }

    /// Subtract `tags` from the current set. Removing a tag that is not
    /// present is a no-op, not an error.
    pub fn remove_tags(&self, path: &Path, tags: &TagSet) -> Result<()> {
        self.ensure_exists(path)?;
        let mut current = self.backend.read_tags(path)?;
        let before = current.len();
        for tag in tags {
            current.remove(tag);
        }
        if current.len() == before {
            return Ok(());
        }
        self.backend.write_tags(path, &current)
    }

    /// Clear all tags from `path`.
    pub fn clear_tags(&self, path: &Path) -> Result<()> {
        self.set_tags(path, &TagSet::new())
    }

    fn ensure_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(FtagError::PathNotFound(path.to_path_buf()));
        }
        Ok(())
    }
}

//! Sidecar file backend
//!
//! Portable fallback for filesystems without extended attribute support.
//! Tags are stored next to the target in a hidden `.<name>.tags` TOML
//! document. Clearing the tag set removes the sidecar file.

use crate::domain::{tag_names, Tag, TagSet};
use crate::error::{FtagError, Result};
use crate::infrastructure::MetadataBackend;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct SidecarDoc {
    tags: Vec<String>,
}

/// Backend storing tags in a sidecar file beside the target path.
#[derive(Debug, Clone, Default)]
pub struct SidecarBackend;

impl SidecarBackend {
    pub fn new() -> Self {
        SidecarBackend
    }

    /// Sidecar location for a target path: `.<name>.tags` in the same
    /// directory.
    pub fn sidecar_path(path: &Path) -> Result<PathBuf> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                FtagError::Backend(format!(
                    "Cannot derive a sidecar name for: {}",
                    path.display()
                ))
            })?;
        Ok(path.with_file_name(format!(".{}.tags", name)))
    }
}

impl MetadataBackend for SidecarBackend {
    fn read_tags(&self, path: &Path) -> Result<TagSet> {
        let sidecar = Self::sidecar_path(path)?;
        if !sidecar.exists() {
            return Ok(TagSet::new());
        }

        let contents = fs::read_to_string(&sidecar)?;
        let doc: SidecarDoc = toml::from_str(&contents)?;

        // Hand-edited sidecars may carry duplicates or unusable names;
        // collapse and skip rather than fail the read.
        let mut tags = TagSet::new();
        for name in doc.tags {
            let Ok(tag) = Tag::new(name) else {
                continue;
            };
            tags.insert(tag);
        }
        Ok(tags)
    }

    fn write_tags(&self, path: &Path, tags: &TagSet) -> Result<()> {
        let sidecar = Self::sidecar_path(path)?;

        if tags.is_empty() {
            if sidecar.exists() {
                fs::remove_file(&sidecar)?;
            }
            return Ok(());
        }

        let doc = SidecarDoc {
            tags: tag_names(tags),
        };
        let contents = toml::to_string_pretty(&doc)?;
        fs::write(&sidecar, contents)?;
        Ok(())
    }
}

//! Extended attribute backend
//!
//! Stores the tag list in the `user.xdg.tags` attribute as a comma
//! separated list, following the freedesktop.org CommonExtendedAttributes
//! convention, so tags stay visible to other xdg-aware tools.

use crate::domain::{Tag, TagSet};
use crate::error::{FtagError, Result};
use crate::infrastructure::MetadataBackend;
use std::io;
use std::path::Path;

/// Attribute name from the freedesktop CommonExtendedAttributes draft.
pub const XATTR_NAME: &str = "user.xdg.tags";

/// Backend storing tags in a user extended attribute.
#[derive(Debug, Clone, Default)]
pub struct XattrBackend;

impl XattrBackend {
    pub fn new() -> Self {
        XattrBackend
    }

    /// Check whether the filesystem holding `path` accepts user extended
    /// attributes. tmpfs and some container overlays do not.
    pub fn probe(path: &Path) -> bool {
        match xattr::get(path, XATTR_NAME) {
            Ok(_) => true,
            Err(e) => e.kind() != io::ErrorKind::Unsupported,
        }
    }
}

fn decode(data: &[u8]) -> TagSet {
    let text = String::from_utf8_lossy(data);
    let mut tags = TagSet::new();
    for part in text.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        // Foreign writers own this attribute too; skip entries that do not
        // form valid tags instead of failing the read.
        let Ok(tag) = Tag::new(part) else {
            continue;
        };
        tags.insert(tag);
    }
    tags
}

fn encode(tags: &TagSet) -> Vec<u8> {
    tags.iter()
        .map(Tag::as_str)
        .collect::<Vec<_>>()
        .join(",")
        .into_bytes()
}

pub(crate) fn map_xattr_error(path: &Path, e: io::Error) -> FtagError {
    match e.kind() {
        io::ErrorKind::NotFound => FtagError::PathNotFound(path.to_path_buf()),
        io::ErrorKind::Unsupported => FtagError::Unsupported(path.to_path_buf()),
        _ => FtagError::Io(e),
    }
}

impl MetadataBackend for XattrBackend {
    fn read_tags(&self, path: &Path) -> Result<TagSet> {
        match xattr::get(path, XATTR_NAME) {
            Ok(Some(data)) => Ok(decode(&data)),
            Ok(None) => Ok(TagSet::new()),
            Err(e) => Err(map_xattr_error(path, e)),
        }
    }

    fn write_tags(&self, path: &Path, tags: &TagSet) -> Result<()> {
        if tags.is_empty() {
            // Drop the attribute entirely so other consumers of
            // user.xdg.tags see a clean file, not an empty list.
            return match xattr::get(path, XATTR_NAME) {
                Ok(Some(_)) => {
                    xattr::remove(path, XATTR_NAME).map_err(|e| map_xattr_error(path, e))
                }
                Ok(None) => Ok(()),
                Err(e) => Err(map_xattr_error(path, e)),
            };
        }

        xattr::set(path, XATTR_NAME, &encode(tags)).map_err(|e| map_xattr_error(path, e))
    }
}

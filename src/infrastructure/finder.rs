//! Finder tag backend (macOS)
//!
//! Reads and writes `com.apple.metadata:_kMDItemUserTags`, the attribute
//! Finder itself uses. The payload is a binary property list holding an
//! array of strings. Finder may suffix a name with `"\n<color-digit>"`;
//! the suffix is stripped on read and never emitted on write, matching
//! what NSURL's tagNames resource value exposes.

use crate::domain::{Tag, TagSet};
use crate::error::Result;
use crate::infrastructure::xattr_store::map_xattr_error;
use crate::infrastructure::MetadataBackend;
use std::path::Path;

/// The attribute Finder and Spotlight read user tags from.
pub const FINDER_TAGS_ATTR: &str = "com.apple.metadata:_kMDItemUserTags";

/// Backend storing tags where Finder keeps them.
#[derive(Debug, Clone, Default)]
pub struct FinderBackend;

impl FinderBackend {
    pub fn new() -> Self {
        FinderBackend
    }
}

fn decode(data: &[u8]) -> Result<TagSet> {
    let names: Vec<String> = plist::from_bytes(data)?;

    let mut tags = TagSet::new();
    for name in names {
        let base = match name.split_once('\n') {
            Some((base, _color)) => base,
            None => name.as_str(),
        };
        let Ok(tag) = Tag::new(base) else {
            continue;
        };
        tags.insert(tag);
    }
    Ok(tags)
}

fn encode(tags: &TagSet) -> Result<Vec<u8>> {
    let names: Vec<&str> = tags.iter().map(Tag::as_str).collect();
    let mut buf = Vec::new();
    plist::to_writer_binary(&mut buf, &names)?;
    Ok(buf)
}

impl MetadataBackend for FinderBackend {
    fn read_tags(&self, path: &Path) -> Result<TagSet> {
        match xattr::get(path, FINDER_TAGS_ATTR) {
            Ok(Some(data)) => decode(&data),
            Ok(None) => Ok(TagSet::new()),
            Err(e) => Err(map_xattr_error(path, e)),
        }
    }

    fn write_tags(&self, path: &Path, tags: &TagSet) -> Result<()> {
        if tags.is_empty() {
            return match xattr::get(path, FINDER_TAGS_ATTR) {
                Ok(Some(_)) => {
                    xattr::remove(path, FINDER_TAGS_ATTR).map_err(|e| map_xattr_error(path, e))
                }
                Ok(None) => Ok(()),
                Err(e) => Err(map_xattr_error(path, e)),
            };
        }

        xattr::set(path, FINDER_TAGS_ATTR, &encode(tags)?)
            .map_err(|e| map_xattr_error(path, e))
    }
}

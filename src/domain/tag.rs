//! Tag domain model

use crate::error::{FtagError, Result};
use std::collections::BTreeSet;
use std::fmt;

/// Characters the native metadata encodings use as separators: `,` in the
/// xdg comma list, `\n` before the Finder color suffix.
const RESERVED_CHARS: [char; 2] = [',', '\n'];

/// A single tag label attached to a file.
///
/// Tags compare and sort by their exact string value; case matters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    /// Create a tag, rejecting names the metadata encodings cannot carry.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.chars().any(|ch| RESERVED_CHARS.contains(&ch)) {
            return Err(FtagError::InvalidTag(name));
        }
        Ok(Tag(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of tags attached to one path. Ordered so listings are stable;
/// duplicates collapse structurally.
pub type TagSet = BTreeSet<Tag>;

/// Parse raw tag names into a set. Duplicate names collapse; any invalid
/// name fails the whole call.
pub fn parse_tags<I, S>(names: I) -> Result<TagSet>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tags = TagSet::new();
    for name in names {
        tags.insert(Tag::new(name)?);
    }
    Ok(tags)
}

/// Plain string names of a tag set, in set order.
pub fn tag_names(tags: &TagSet) -> Vec<String> {
    tags.iter().map(|tag| tag.as_str().to_string()).collect()
}

//! Domain layer - Tag model

pub mod tag;

pub use tag::{parse_tags, tag_names, Tag, TagSet};

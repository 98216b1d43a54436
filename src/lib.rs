//! ftag - File tagging via filesystem metadata
//!
//! Reads and writes the set of string tags attached to a file, persisted
//! as OS-native metadata: Finder user tags on macOS, `user.xdg.tags`
//! extended attributes on other Unix systems, with a portable sidecar-file
//! fallback behind the same backend interface.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::TagStore;
pub use domain::{Tag, TagSet};
pub use error::FtagError;

//! Infrastructure layer - Tag metadata persistence

pub mod backend;
#[cfg(target_os = "macos")]
pub mod finder;
pub mod sidecar;
#[cfg(unix)]
pub mod xattr_store;

pub use backend::{default_backend, BackendKind, MetadataBackend};
#[cfg(target_os = "macos")]
pub use finder::FinderBackend;
pub use sidecar::SidecarBackend;
#[cfg(unix)]
pub use xattr_store::XattrBackend;

//! Tag metadata backends

use crate::domain::TagSet;
use crate::error::{FtagError, Result};
use crate::infrastructure::SidecarBackend;
#[cfg(target_os = "macos")]
use crate::infrastructure::FinderBackend;
#[cfg(unix)]
use crate::infrastructure::XattrBackend;
use std::path::Path;
use std::str::FromStr;

/// Abstract storage for the tag set attached to a path.
///
/// A backend holds no per-path state of its own; everything lives in the
/// filesystem metadata it reads and writes.
pub trait MetadataBackend {
    /// Read the full tag set attached to `path`.
    fn read_tags(&self, path: &Path) -> Result<TagSet>;

    /// Replace the full tag set attached to `path`. An empty set clears the
    /// stored metadata entirely.
    fn write_tags(&self, path: &Path, tags: &TagSet) -> Result<()>;
}

/// Backend selection as named on the command line or in FTAG_BACKEND.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Auto,
    Sidecar,
    #[cfg(unix)]
    Xattr,
    #[cfg(target_os = "macos")]
    Finder,
}

impl FromStr for BackendKind {
    type Err = FtagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(BackendKind::Auto),
            "sidecar" => Ok(BackendKind::Sidecar),
            #[cfg(unix)]
            "xattr" => Ok(BackendKind::Xattr),
            #[cfg(not(unix))]
            "xattr" => Err(FtagError::Backend(
                "Backend 'xattr' is not available on this platform".to_string(),
            )),
            #[cfg(target_os = "macos")]
            "finder" => Ok(BackendKind::Finder),
            #[cfg(not(target_os = "macos"))]
            "finder" => Err(FtagError::Backend(
                "Backend 'finder' is only available on macOS".to_string(),
            )),
            other => Err(FtagError::Backend(format!("Unknown backend: {}", other))),
        }
    }
}

impl BackendKind {
    /// Resolve to a concrete backend. `auto` honors the FTAG_BACKEND
    /// environment variable, then falls back to the platform default.
    pub fn resolve(self) -> Result<Box<dyn MetadataBackend>> {
        match self {
            BackendKind::Auto => {
                if let Ok(value) = std::env::var("FTAG_BACKEND") {
                    let kind = BackendKind::from_str(&value)?;
                    if kind != BackendKind::Auto {
                        return kind.resolve();
                    }
                }
                Ok(default_backend())
            }
            BackendKind::Sidecar => Ok(Box::new(SidecarBackend::new())),
            #[cfg(unix)]
            BackendKind::Xattr => Ok(Box::new(XattrBackend::new())),
            #[cfg(target_os = "macos")]
            BackendKind::Finder => Ok(Box::new(FinderBackend::new())),
        }
    }
}

/// Platform default: Finder tags on macOS, `user.xdg.tags` extended
/// attributes on other Unix systems, sidecar files everywhere else.
pub fn default_backend() -> Box<dyn MetadataBackend> {
    #[cfg(target_os = "macos")]
    return Box::new(FinderBackend::new());
    #[cfg(all(unix, not(target_os = "macos")))]
    return Box::new(XattrBackend::new());
    #[cfg(not(unix))]
    return Box::new(SidecarBackend::new());
}

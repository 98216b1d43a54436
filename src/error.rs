//! Error types for ftag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ftag application
#[derive(Debug, Error)]
pub enum FtagError {
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Unknown backend: {0}")]
    Backend(String),

    #[error("Tag metadata not supported here: {0}")]
    Unsupported(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[cfg(target_os = "macos")]
    #[error("Property list error: {0}")]
    Plist(#[from] plist::Error),
}

impl FtagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FtagError::PathNotFound(_) => 2,
            FtagError::InvalidTag(_) => 3,
            FtagError::Unsupported(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FtagError::PathNotFound(path) => {
                format!(
                    "Path not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path spelling\n\
                    • The file must exist before tags can be read or written\n\
                    • Tags live in the file's metadata and vanish with the file",
                    path.display()
                )
            }
            FtagError::InvalidTag(tag) => {
                format!(
                    "Invalid tag: '{}'\n\n\
                    Tags must be non-empty and may not contain commas or newlines\n\
                    (those characters separate tags in the native metadata encodings).\n\n\
                    Examples:\n\
                    ftag add notes.txt Green\n\
                    ftag add notes.txt \"Needs Review\"",
                    tag
                )
            }
            FtagError::Backend(msg) => {
                format!(
                    "{}\n\n\
                    Valid backends: auto, finder (macOS only), xattr (Unix only), sidecar\n\
                    Example: ftag --backend sidecar list notes.txt",
                    msg
                )
            }
            FtagError::Unsupported(path) => {
                format!(
                    "Tag metadata not supported here: {}\n\n\
                    Suggestions:\n\
                    • This filesystem does not accept user extended attributes\n\
                    • Retry with the portable backend: ftag --backend sidecar ...\n\
                    • Or export FTAG_BACKEND=sidecar",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FtagError
pub type Result<T> = std::result::Result<T, FtagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_suggestions() {
        let err = FtagError::PathNotFound(PathBuf::from("/tmp/missing.txt"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/missing.txt"));
        assert!(msg.contains("Suggestions"));
        assert!(msg.contains("must exist"));
    }

    #[test]
    fn test_invalid_tag_suggestions() {
        let err = FtagError::InvalidTag("a,b".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("a,b"));
        assert!(msg.contains("commas"));
        assert!(msg.contains("ftag add"));
    }

    #[test]
    fn test_unknown_backend_suggestions() {
        let err = FtagError::Backend("Unknown backend: cloud".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Unknown backend: cloud"));
        assert!(msg.contains("sidecar"));
    }

    #[test]
    fn test_unsupported_suggestions() {
        let err = FtagError::Unsupported(PathBuf::from("/mnt/fat32/file"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("FTAG_BACKEND=sidecar"));
        assert!(msg.contains("--backend sidecar"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(FtagError::PathNotFound(PathBuf::from("/x")).exit_code(), 2);
        assert_eq!(FtagError::InvalidTag(String::new()).exit_code(), 3);
        assert_eq!(FtagError::Unsupported(PathBuf::from("/x")).exit_code(), 4);
        assert_eq!(
            FtagError::Backend("Unknown backend: x".to_string()).exit_code(),
            1
        );
    }
}

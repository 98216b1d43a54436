//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ftag")]
#[command(about = "Read and write file tags stored in filesystem metadata", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tag storage backend (auto, finder, xattr, sidecar)
    #[arg(short, long, global = true, default_value = "auto")]
    pub backend: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tags on a file, one per line
    List {
        /// File or directory to inspect
        path: PathBuf,
    },

    /// Replace all tags on a file
    Set {
        /// File or directory to tag
        path: PathBuf,

        /// Tags to store
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Add tags to a file, keeping existing ones
    Add {
        /// File or directory to tag
        path: PathBuf,

        /// Tags to add
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Remove tags from a file; absent tags are ignored
    Remove {
        /// File or directory to untag
        path: PathBuf,

        /// Tags to remove
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Remove every tag from a file
    Clear {
        /// File or directory to clear
        path: PathBuf,
    },

    /// List files carrying all of the given tags
    Find {
        /// Tags a matching file must carry
        #[arg(required = true)]
        tags: Vec<String>,

        /// Directory to search (default: current directory)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Recurse into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
}

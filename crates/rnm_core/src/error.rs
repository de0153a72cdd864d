use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure to resolve a single module path. Recovered per match by the patcher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Failed to resolve '{0}'")]
    NotFound(String),
}

/// Errors that abort a patch run.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Expected a path to a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to traverse {}: {source}", root.display())]
    Traversal {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },
    #[error("Traversal yielded an unusable path: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },
}

//! Core utilities for resolve-node-modules.
//!
//! This crate rewrites stale `node_modules` paths embedded in text files so
//! that they point at the package actually installed on disk:
//! - Enumerating candidate `node_modules` directories for a file
//! - Resolving a module path with a simplified node_modules lookup
//! - Scanning and patching a single file
//! - Walking a directory tree and collecting the applied replacements

mod constants;
mod error;
mod module_paths;
mod patcher;
mod paths;
mod resolver;
mod types;
mod walker;

// Re-export public API
pub use constants::BINARY_EXTENSIONS;
pub use error::{PatchError, ResolveError};
pub use module_paths::{global_module_paths, lookup_paths, node_module_paths};
pub use patcher::patch_file;
pub use paths::relative_path;
pub use resolver::{MatchPolicy, Resolver};
pub use types::{FilePatch, PatchOptions, PatchResult, Replacement};
pub use walker::patch_tree;

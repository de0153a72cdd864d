//! Candidate `node_modules` directories for a referencing file.
//!
//! Follows the host module system's search-path convention: every ancestor of
//! the file's directory contributes its own `node_modules` subdirectory,
//! nearest first, followed by the global folders.

use log::trace;
use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

const NODE_MODULES: &str = "node_modules";

/// Ancestor `node_modules` directories of `from_dir`, nearest first, ending at
/// the filesystem root. Ancestors that are themselves a `node_modules`
/// directory are skipped.
pub fn node_module_paths(from_dir: &Path) -> Vec<PathBuf> {
    from_dir
        .ancestors()
        .filter(|dir| dir.file_name() != Some(OsStr::new(NODE_MODULES)))
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(NODE_MODULES))
        .collect()
}

/// Global folders searched after the ancestor chain, read from the environment.
pub fn global_module_paths() -> Vec<PathBuf> {
    let home = env::var_os("HOME").or_else(|| env::var_os("USERPROFILE")).map(PathBuf::from);
    global_paths_from(env::var_os("NODE_PATH").as_deref(), home.as_deref())
}

fn global_paths_from(node_path: Option<&OsStr>, home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = node_path
        .map(|np| env::split_paths(np).filter(|p| !p.as_os_str().is_empty()).collect())
        .unwrap_or_default();
    if let Some(home) = home {
        paths.push(home.join(".node_modules"));
        paths.push(home.join(".node_libraries"));
    }
    paths
}

// A leading `.` followed by nothing, another `.` or a separator marks a relative request
fn is_relative_request(module_path: &str) -> bool {
    let mut chars = module_path.chars();
    chars.next() == Some('.') && matches!(chars.next(), None | Some('.') | Some('/'))
}

/// Ordered lookup paths for resolving `module_path` from `referencing_file`.
///
/// Relative requests only ever look in the referencing file's own directory.
pub fn lookup_paths(module_path: &str, referencing_file: &Path, global: &[PathBuf]) -> Vec<PathBuf> {
    let from_dir = referencing_file.parent().unwrap_or(referencing_file);
    if is_relative_request(module_path) {
        trace!("'{}' is a relative request, looking only in {:?}", module_path, from_dir);
        return vec![from_dir.to_path_buf()];
    }

    let mut paths = node_module_paths(from_dir);
    paths.extend(global.iter().cloned());
    trace!("Lookup paths for '{}' from {:?}: {:?}", module_path, referencing_file, paths);
    paths
}

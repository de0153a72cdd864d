use log::{debug, trace};
use path_clean::clean;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::ResolveError,
    module_paths::{global_module_paths, lookup_paths},
};

/// How a directory entry is compared with the final segment of a module path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Entry name starts with the segment. Tolerates extension and suffix variance.
    #[default]
    Prefix,
    /// Entry name equals the segment.
    Exact,
}

impl MatchPolicy {
    fn matches(self, entry_name: &str, segment: &str) -> bool {
        match self {
            MatchPolicy::Prefix => entry_name.starts_with(segment),
            MatchPolicy::Exact => entry_name == segment,
        }
    }
}

/// Implements a simplified version of the node_modules resolution algorithm.
///
/// No `package.json` fields, extension probing or realpath handling: a module
/// path resolves to the first candidate `node_modules` directory whose copy of
/// the module's parent directory holds a matching entry.
#[derive(Debug, Clone)]
pub struct Resolver {
    policy: MatchPolicy,
    global_paths: Vec<PathBuf>,
}

impl Resolver {
    /// Resolver that also searches the global folders named by the environment.
    pub fn new(policy: MatchPolicy) -> Self {
        Self::with_global_paths(policy, global_module_paths())
    }

    pub fn with_global_paths(policy: MatchPolicy, global_paths: Vec<PathBuf>) -> Self {
        Self { policy, global_paths }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Resolve `module_path` (the part after `node_modules/`) as seen from `from_file`.
    pub fn resolve(&self, module_path: &str, from_file: &Path) -> Result<PathBuf, ResolveError> {
        debug!("Resolving '{}' from {}", module_path, from_file.display());
        let (module_directory, filename_prefix) = split_module_path(module_path);

        let candidates = lookup_paths(module_path, from_file, &self.global_paths);

        for candidate_node_modules in &candidates {
            let candidate_dir = join_segments(candidate_node_modules, module_directory);
            if !candidate_dir.is_dir() {
                trace!("Not a directory: {:?}", candidate_dir);
                continue;
            }

            let entries = match fs::read_dir(&candidate_dir) {
                Ok(entries) => entries,
                Err(e) => {
                    trace!("Failed to list {:?}: {}", candidate_dir, e);
                    continue;
                }
            };

            // First entry in enumeration order wins when several share the prefix
            for entry in entries.filter_map(|e| e.ok()) {
                let name = entry.file_name();
                if self.policy.matches(&name.to_string_lossy(), filename_prefix) {
                    let resolved = join_segments(candidate_node_modules, module_path);
                    debug!(
                        "Resolved '{}' to {} (matched entry {:?})",
                        module_path,
                        resolved.display(),
                        name
                    );
                    return Ok(resolved);
                }
            }
            trace!("No entry in {:?} matches '{}'", candidate_dir, filename_prefix);
        }

        Err(ResolveError::NotFound(module_path.to_string()))
    }
}

/// Appends the `/`-separated segments of `relative` to `base` and folds `.`/`..`.
///
/// Leading and repeated slashes are dropped, so an absolute-looking module path
/// still lands under `base`.
fn join_segments(base: &Path, relative: &str) -> PathBuf {
    let mut joined = base.to_path_buf();
    for segment in relative.split('/').filter(|s| !s.is_empty()) {
        joined.push(segment);
    }
    clean(joined)
}

/// Splits a module path into its directory portion and final segment.
/// The final segment keeps any extension.
fn split_module_path(module_path: &str) -> (&str, &str) {
    let trimmed = module_path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx + 1..]),
        None => ("", trimmed),
    }
}

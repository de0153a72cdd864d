use serde::Serialize;
use std::collections::BTreeSet;

use crate::resolver::MatchPolicy;

/// A path rewritten inside a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

/// Replacements applied to one file, keyed by its path relative to the scan root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePatch {
    pub path: String,
    pub replacements: Vec<Replacement>,
}

/// Outcome of a tree walk. Only files with at least one replacement are listed,
/// in traversal order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchResult {
    pub files: Vec<FilePatch>,
    pub files_scanned: usize,
}

impl PatchResult {
    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(|f| f.replacements.len()).sum()
    }

    pub fn get(&self, path: &str) -> Option<&[Replacement]> {
        self.files.iter().find(|f| f.path == path).map(|f| f.replacements.as_slice())
    }
}

/// Options controlling which files are visited and whether they are written.
#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// Don't write any files
    pub dry_run: bool,
    /// Glob used to select files while traversing
    pub pattern: String,
    /// Globs excluded from traversal
    pub exclude_patterns: BTreeSet<String>,
    /// Skip files with a known binary extension
    pub exclude_binaries: bool,
    /// Skip paths listed in .gitignore files
    pub exclude_git_ignored: bool,
    pub match_policy: MatchPolicy,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            pattern: "**".to_string(),
            exclude_patterns: BTreeSet::new(),
            exclude_binaries: true,
            exclude_git_ignored: true,
            match_policy: MatchPolicy::default(),
        }
    }
}

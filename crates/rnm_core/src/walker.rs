use ignore::{
    Walk, WalkBuilder,
    overrides::{Override, OverrideBuilder},
};
use log::{debug, info, trace};
use path_clean::clean;
use std::path::Path;

use crate::{
    constants::binary_exclude_globs,
    error::PatchError,
    patcher::patch_file,
    resolver::Resolver,
    types::{FilePatch, PatchOptions, PatchResult},
};

/// Traverses a file system looking for occurrences of "node_modules", resolves
/// the module paths on disk and patches each file with the relative path to
/// the module on disk.
///
/// Files are visited lazily and patched one at a time. The first traversal or
/// file access error aborts the run; files already written stay written.
///
/// # Returns
/// The replacements applied, keyed by file path relative to `root`
pub fn patch_tree(root: &Path, options: &PatchOptions) -> Result<PatchResult, PatchError> {
    let root = clean(std::path::absolute(root).map_err(|_| PatchError::InvalidPath(root.into()))?);
    info!("Patching files containing 'node_modules' in {}", root.display());
    debug!("Options: {:?}", options);

    let resolver = Resolver::new(options.match_policy);
    let include = build_include(&root, &options.pattern)?;
    let walker = build_walker(&root, options)?;

    let mut result = PatchResult::default();
    for entry in walker {
        let entry =
            entry.map_err(|source| PatchError::Traversal { root: root.clone(), source })?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let absolute_path = entry.path();
        let relative_path = relative_key(&root, absolute_path)?;
        if !include.matched(absolute_path, false).is_whitelist() {
            trace!("Not matched by '{}': {}", options.pattern, relative_path);
            continue;
        }

        result.files_scanned += 1;
        let replacements = patch_file(absolute_path, &resolver, options.dry_run)?;
        if !replacements.is_empty() {
            debug!("{} replacements in {}", replacements.len(), relative_path);
            result.files.push(FilePatch { path: relative_path, replacements });
        }
    }

    info!(
        "Patched {} of {} files ({} replacements)",
        result.files.len(),
        result.files_scanned,
        result.total_replacements()
    );
    Ok(result)
}

fn relative_key(root: &Path, absolute_path: &Path) -> Result<String, PatchError> {
    absolute_path
        .strip_prefix(root)
        .ok()
        .and_then(|p| p.to_str())
        .map(str::to_string)
        .ok_or_else(|| PatchError::InvalidPath(absolute_path.to_path_buf()))
}

fn build_include(root: &Path, pattern: &str) -> Result<Override, PatchError> {
    let pattern_error = |source| PatchError::Pattern { pattern: pattern.to_string(), source };
    let mut builder = OverrideBuilder::new(root);
    builder.add(pattern).map_err(pattern_error)?;
    builder.build().map_err(pattern_error)
}

fn build_walker(root: &Path, options: &PatchOptions) -> Result<Walk, PatchError> {
    let mut excludes: Vec<String> = options.exclude_patterns.iter().cloned().collect();
    if options.exclude_binaries {
        excludes.extend(binary_exclude_globs());
    }
    debug!("Excluding {} patterns", excludes.len());

    let mut builder = OverrideBuilder::new(root);
    for pattern in &excludes {
        builder.add(&format!("!{pattern}")).map_err(|source| PatchError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
    }
    let overrides = builder.build().map_err(|source| PatchError::Pattern {
        pattern: excludes.join(", "),
        source,
    })?;

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .follow_links(true)
        .ignore(false)
        .git_global(false)
        .git_exclude(false)
        .git_ignore(options.exclude_git_ignored)
        .parents(options.exclude_git_ignored)
        .require_git(false)
        .overrides(overrides)
        .build();
    Ok(walker)
}

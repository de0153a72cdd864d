use log::{debug, trace, warn};
use path_clean::clean;
use regex::{Captures, Regex};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use crate::{error::PatchError, paths::relative_path, resolver::Resolver, types::Replacement};

const NODE_MODULES_SEGMENT: &str = "node_modules/";

// A path-like token containing `node_modules/`, stopping at quotes, whitespace,
// byte order marks and backslashes
static NODE_MODULES_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^"'\s\x{FEFF}\\]+node_modules/[^"'\s\x{FEFF}\\]+"#)
        .expect("Invalid node_modules path regex")
});

/// The module path following the last `node_modules/` in a matched token
fn module_path_of(matched: &str) -> &str {
    match matched.rfind(NODE_MODULES_SEGMENT) {
        Some(idx) => &matched[idx + NODE_MODULES_SEGMENT.len()..],
        None => matched,
    }
}

/// Rewrites every `node_modules` path in `path_to_patch` to the relative path
/// of the module it resolves to.
///
/// Unresolvable matches are logged and left untouched. The file is only
/// written when its content changed and `dry_run` is false.
///
/// # Returns
/// The replacements applied, in the order they appear in the file
pub fn patch_file(
    path_to_patch: &Path,
    resolver: &Resolver,
    dry_run: bool,
) -> Result<Vec<Replacement>, PatchError> {
    let read_error = |source| PatchError::Read { path: path_to_patch.to_path_buf(), source };

    let stats = fs::metadata(path_to_patch).map_err(read_error)?;
    if !stats.is_file() {
        return Err(PatchError::NotAFile(path_to_patch.to_path_buf()));
    }
    let absolute: PathBuf = clean(std::path::absolute(path_to_patch).map_err(read_error)?);
    let from_dir = absolute.parent().unwrap_or(&absolute);

    debug!("Reading {}", path_to_patch.display());
    let bytes = fs::read(path_to_patch).map_err(read_error)?;
    let contents = match String::from_utf8(bytes) {
        Ok(contents) => contents,
        Err(_) => {
            warn!("Skipped '{}': content is not valid UTF-8", path_to_patch.display());
            return Ok(Vec::new());
        }
    };

    let mut applied = Vec::new();
    let patched = NODE_MODULES_PATH.replace_all(&contents, |caps: &Captures| {
        let relative = &caps[0];
        let module_path = module_path_of(relative);
        trace!("Found '{}' (module path '{}')", relative, module_path);

        match resolver.resolve(module_path, &absolute) {
            Ok(resolved_absolute) => {
                let resolved_relative =
                    relative_path(&resolved_absolute, from_dir).to_string_lossy().into_owned();
                if relative != resolved_relative {
                    applied.push(Replacement {
                        from: relative.to_string(),
                        to: resolved_relative.clone(),
                    });
                }
                resolved_relative
            }
            Err(e) => {
                warn!("Skipped resolving '{}' in '{}': {}", relative, path_to_patch.display(), e);
                relative.to_string()
            }
        }
    });

    if patched != contents.as_str() {
        if dry_run {
            debug!("Dry run, not writing {}", path_to_patch.display());
        } else {
            debug!("Writing {} replacements to {}", applied.len(), path_to_patch.display());
            fs::write(path_to_patch, patched.as_bytes()).map_err(|source| PatchError::Write {
                path: path_to_patch.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(applied)
}
